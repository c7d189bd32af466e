//! Test-driver profiles.
//!
//! | Profile | Deadline per example |
//! |---|---|
//! | `dev` (default) | 200 ms |
//! | `ci` | 2 s |
//!
//! The profile is read from `LAWFUL_PROFILE`. Both profiles run the same
//! number of cases, [`DEFAULT_CASES`] unless `LAWFUL_CASES` says otherwise.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use proptest::test_runner::{Config, TestCaseError};

/// Environment variable selecting the profile.
pub const PROFILE_VARIABLE: &str = "LAWFUL_PROFILE";

/// Environment variable overriding the number of cases per law.
pub const CASES_VARIABLE: &str = "LAWFUL_CASES";

/// Cases per law when `LAWFUL_CASES` is unset.
pub const DEFAULT_CASES: u32 = 100;

/// A named test-driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Local development: tight deadline.
    #[default]
    Dev,
    /// Continuous integration: loose deadline for slow shared runners.
    Ci,
}

/// `LAWFUL_PROFILE` named no known profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown test profile `{0}` (expected `dev` or `ci`)")]
pub struct UnknownProfile(pub String);

/// An example ran longer than its profile allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("DeadlineExceeded: example took {elapsed:?}, the deadline is {deadline:?}")]
pub struct DeadlineExceeded {
    /// Time the example took.
    pub elapsed: Duration,
    /// Time the profile allows.
    pub deadline: Duration,
}

impl Profile {
    /// The profile named by `LAWFUL_PROFILE`, or [`Profile::Dev`].
    ///
    /// An unknown name falls back to `Dev` with a warning.
    pub fn from_env() -> Self {
        match std::env::var(PROFILE_VARIABLE) {
            Ok(name) => name.parse().unwrap_or_else(|error: UnknownProfile| {
                tracing::warn!(%error, "falling back to the dev profile");
                Self::Dev
            }),
            Err(_) => Self::Dev,
        }
    }

    /// Wall-clock budget of a single example.
    pub const fn deadline(self) -> Duration {
        match self {
            Self::Dev => Duration::from_millis(200),
            Self::Ci => Duration::from_secs(2),
        }
    }

    /// Number of cases per law.
    pub fn cases(self) -> u32 {
        std::env::var(CASES_VARIABLE)
            .ok()
            .and_then(|cases| cases.parse().ok())
            .unwrap_or(DEFAULT_CASES)
    }

    /// The proptest configuration every law runs with.
    ///
    /// Failures are not persisted: the harness runs inside downstream crates
    /// whose source layout it does not know.
    pub fn config(self) -> Config {
        Config {
            failure_persistence: None,
            ..Config::with_cases(self.cases())
        }
    }

    /// Fails the example when `elapsed` is over the deadline.
    ///
    /// # Errors
    ///
    /// Returns a failing [`TestCaseError`] carrying [`DeadlineExceeded`].
    pub fn check_deadline(self, elapsed: Duration) -> Result<(), TestCaseError> {
        let deadline = self.deadline();
        if elapsed > deadline {
            return Err(TestCaseError::fail(
                DeadlineExceeded { elapsed, deadline }.to_string(),
            ));
        }
        Ok(())
    }
}

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "ci" => Ok(Self::Ci),
            _ => Err(UnknownProfile(name.to_owned())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Dev => "dev",
            Self::Ci => "ci",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("dev", Profile::Dev)]
    #[case("ci", Profile::Ci)]
    #[case(" CI ", Profile::Ci)]
    fn profiles_parse(#[case] name: &str, #[case] expected: Profile) {
        assert_eq!(name.parse::<Profile>(), Ok(expected));
    }

    #[rstest]
    fn unknown_profiles_are_rejected() {
        assert_eq!(
            "nightly".parse::<Profile>(),
            Err(UnknownProfile(String::from("nightly")))
        );
    }

    #[rstest]
    fn profiles_differ_only_in_deadline() {
        assert_eq!(Profile::Dev.deadline(), Duration::from_millis(200));
        assert_eq!(Profile::Ci.deadline(), Duration::from_secs(2));
        assert_eq!(Profile::Dev.config().cases, Profile::Ci.config().cases);
    }

    #[rstest]
    fn failures_are_not_persisted() {
        assert!(Profile::Ci.config().failure_persistence.is_none());
    }

    #[rstest]
    fn slow_examples_miss_the_deadline() {
        assert!(Profile::Dev.check_deadline(Duration::from_millis(10)).is_ok());
        let error = Profile::Dev
            .check_deadline(Duration::from_millis(500))
            .unwrap_err();
        assert!(error.to_string().contains("DeadlineExceeded"), "{error}");
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        for profile in [Profile::Dev, Profile::Ci] {
            assert_eq!(profile.to_string().parse::<Profile>(), Ok(profile));
        }
    }
}
