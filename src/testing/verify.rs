//! Running one law as a property test.

use std::time::Instant;

use proptest::arbitrary::any;
use proptest::strategy::Strategy;
use proptest::test_runner::{TestCaseError, TestError, TestRunner};

use super::draw::Draw;
use super::profile::Profile;
use crate::typeclass::Class;

/// A law that failed on some input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{class} law `{law}` violated by {counterexample}: {reason}")]
pub struct LawViolation {
    /// Class declaring the law.
    pub class: &'static str,
    /// Law name, as listed by the class descriptor.
    pub law: &'static str,
    /// `Debug` rendering of the shrunk input and the draw seed.
    pub counterexample: String,
    /// Why the example failed.
    pub reason: String,
}

/// Checks `law` of `class` on inputs drawn from `strategy` under the
/// profile selected by the environment.
///
/// `check` receives one input together with a [`Draw`] seeded per example
/// and returns whether both sides of the law agree.
///
/// # Errors
///
/// Returns the shrunk counter-example as a [`LawViolation`].
pub fn verify<S: Strategy>(
    class: &'static Class,
    law: &'static str,
    strategy: S,
    check: impl Fn(S::Value, &mut Draw) -> bool,
) -> Result<(), LawViolation> {
    verify_with(Profile::from_env(), class, law, strategy, check)
}

/// [`verify`] under an explicit profile.
///
/// # Errors
///
/// Returns the shrunk counter-example as a [`LawViolation`].
pub fn verify_with<S: Strategy>(
    profile: Profile,
    class: &'static Class,
    law: &'static str,
    strategy: S,
    check: impl Fn(S::Value, &mut Draw) -> bool,
) -> Result<(), LawViolation> {
    debug_assert!(
        class.laws.iter().any(|declared| declared.name == law),
        "{} declares no law named {law}",
        class.name
    );

    let mut runner = TestRunner::new(profile.config());
    let outcome = runner.run(&(strategy, any::<u64>()), |(input, seed)| {
        let started = Instant::now();
        let mut draw = Draw::from_seed(seed);
        let holds = check(input, &mut draw);
        profile.check_deadline(started.elapsed())?;
        if holds {
            Ok(())
        } else {
            Err(TestCaseError::fail("both sides differ"))
        }
    });

    outcome.map_err(|error| {
        let (counterexample, reason) = match error {
            TestError::Fail(reason, (input, seed)) => {
                (format!("{input:?} (seed {seed})"), reason.message().to_owned())
            }
            TestError::Abort(reason) => (String::from("<none>"), reason.message().to_owned()),
        };
        tracing::trace!(
            target: "lawful::laws",
            class = class.name,
            law,
            %counterexample,
            %reason,
            "law violated"
        );
        LawViolation {
            class: class.name,
            law,
            counterexample,
            reason,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{MONOID, SEMIGROUP};
    use rstest::rstest;

    #[rstest]
    fn a_true_law_passes() {
        let outcome = verify(&SEMIGROUP, "associativity", any::<(u8, u8, u8)>(), |(x, y, z), _| {
            u32::from(x) + (u32::from(y) + u32::from(z)) == (u32::from(x) + u32::from(y)) + u32::from(z)
        });
        assert_eq!(outcome, Ok(()));
    }

    #[rstest]
    fn a_false_law_reports_a_shrunk_counterexample() {
        let violation = verify_with(Profile::Ci, &MONOID, "left_identity", any::<u8>(), |x, _| {
            x < 10
        })
        .unwrap_err();
        assert_eq!(violation.class, "Monoid");
        assert_eq!(violation.law, "left_identity");
        assert!(violation.counterexample.starts_with("10 "), "{violation}");
    }

    #[rstest]
    fn violations_convert_into_test_case_errors() {
        let violation = LawViolation {
            class: "Semigroup",
            law: "associativity",
            counterexample: String::from("(1, 2, 3)"),
            reason: String::from("both sides differ"),
        };
        let error = TestCaseError::from(violation);
        assert!(error.to_string().contains("associativity"));
    }
}
