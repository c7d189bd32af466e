//! Prism optics: focusing on a part that may be absent.
//!
//! A prism runs at any [`Cocartesian`] profunctor. `matcher` either finds the
//! focus (`Right`) or produces the finished result directly (`Left`); `build`
//! turns a new focus back into a whole:
//!
//! ```text
//! prism(matcher, build)(p) = dimap(right(p), matcher, |e| either(id, build, e))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Either;
//! use lawful::optics::{over, prism};
//!
//! let positive = prism(
//!     |x: i32| if x > 0 { Either::Right(x) } else { Either::Left(x) },
//!     |x: i32| x,
//! );
//! let halve = over(&positive, |x| x / 2);
//! assert_eq!(halve.call(10), 5);
//! assert_eq!(halve.call(-10), -10);
//! ```

use std::fmt;
use std::rc::Rc;

use super::optic::{Optic, OpticAt};
use crate::control::Either;
use crate::typeclass::{Cocartesian, Value};

/// An optic built from `matcher: S -> Either<T, A>` and `build: B -> T`.
pub struct PrismOptic<S, T, A, B> {
    matcher: Rc<dyn Fn(S) -> Either<T, A>>,
    build: Rc<dyn Fn(B) -> T>,
}

/// Builds a [`PrismOptic`].
pub fn prism<S, T, A, B>(
    matcher: impl Fn(S) -> Either<T, A> + 'static,
    build: impl Fn(B) -> T + 'static,
) -> PrismOptic<S, T, A, B> {
    PrismOptic {
        matcher: Rc::new(matcher),
        build: Rc::new(build),
    }
}

impl<S, T, A, B> Clone for PrismOptic<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            matcher: Rc::clone(&self.matcher),
            build: Rc::clone(&self.build),
        }
    }
}

impl<S, T, A, B> fmt::Debug for PrismOptic<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PrismOptic")
    }
}

impl<S: Value, T: Value, A: Value, B: Value> Optic for PrismOptic<S, T, A, B> {
    type Source = S;
    type Target = T;
    type Focus = A;
    type Replacement = B;
}

impl<P: Cocartesian, S: Value, T: Value, A: Value, B: Value> OpticAt<P>
    for PrismOptic<S, T, A, B>
{
    fn run(&self, p: P::Of<A, B>) -> P::Of<S, T> {
        let matcher = Rc::clone(&self.matcher);
        let build = Rc::clone(&self.build);
        P::dimap(
            P::right::<A, B, T>(p),
            move |source: S| matcher(source),
            move |result: Either<T, B>| match result {
                Either::Left(finished) => finished,
                Either::Right(value) => build(value),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::over;
    use rstest::rstest;

    fn some<X: Value>() -> PrismOptic<Option<X>, Option<X>, X, X> {
        prism(
            |value: Option<X>| match value {
                Some(x) => Either::Right(x),
                None => Either::Left(None),
            },
            Some,
        )
    }

    fn singleton<X: Value>() -> PrismOptic<Vec<X>, Vec<X>, X, X> {
        prism(
            |values: Vec<X>| match values.first() {
                Some(x) => Either::Right(x.clone()),
                None => Either::Left(values),
            },
            |x: X| vec![x],
        )
    }

    #[rstest]
    #[case(Some(vec![Some(42)]), Some(vec![Some(420)]))]
    #[case(Some(vec![]), Some(vec![]))]
    #[case(Some(vec![None]), Some(vec![None]))]
    #[case(None, None)]
    fn composed_prisms_reach_present_values(
        #[case] input: Option<Vec<Option<i32>>>,
        #[case] expected: Option<Vec<Option<i32>>>,
    ) {
        let optic = some::<Vec<Option<i32>>>()
            .then(singleton::<Option<i32>>())
            .then(some::<i32>());
        assert_eq!(over(&optic, |x: i32| x * 10).call(input), expected);
    }

    #[rstest]
    fn build_runs_on_the_new_focus() {
        let optic = singleton::<i32>();
        assert_eq!(over(&optic, |x| x + 1).call(vec![1, 2, 3]), vec![2]);
    }
}
