//! Identity wrapper type - the identity functor.
//!
//! `Identity` wraps a single value and adds no effect. It serves as:
//!
//! - the inner layer of the [`IdentityT`](crate::types::IdentityT) transformer,
//! - the applicative of the Traversable identity law,
//! - the simplest model instance of the monad hierarchy.

use super::applicative::Applicative;
use super::apply::Apply;
use super::bind::Bind;
use super::class::Instance;
use super::eq::Eq;
use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::{TypeConstructor, Value};
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use super::traversable::Traversable;
use super::{EQ, FOLDABLE, MONAD, MONOID, TRAVERSABLE};
use crate::function::Function;

/// The identity functor.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Bind, Identity, IdentityKind};
///
/// let wrapped = Identity::new(20);
/// let result = IdentityKind::bind(wrapped, |x: i32| Identity(x + 22));
/// assert_eq!(result.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: Eq> Eq for Identity<A> {
    fn eq(&self, other: &Self) -> bool {
        Eq::eq(&self.0, &other.0)
    }
}

impl<A: Semigroup> Semigroup for Identity<A> {
    fn append(self, other: Self) -> Self {
        Self(self.0.append(other.0))
    }
}

impl<A: Monoid> Monoid for Identity<A> {
    fn empty() -> Self {
        Self(A::empty())
    }
}

/// Witness for [`Identity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityKind;

impl TypeConstructor for IdentityKind {
    type Of<A: Value> = Identity<A>;
}

impl Functor for IdentityKind {
    fn map<A: Value, B: Value>(fa: Identity<A>, function: impl Fn(A) -> B + 'static) -> Identity<B> {
        Identity(function(fa.0))
    }
}

impl Apply for IdentityKind {
    fn apply<A: Value, B: Value>(fa: Identity<A>, ff: Identity<Function<A, B>>) -> Identity<B> {
        Identity(ff.0.call(fa.0))
    }
}

impl Applicative for IdentityKind {
    fn pure<A: Value>(value: A) -> Identity<A> {
        Identity(value)
    }
}

impl Bind for IdentityKind {
    fn bind<A: Value, B: Value>(
        fa: Identity<A>,
        function: impl Fn(A) -> Identity<B> + 'static,
    ) -> Identity<B> {
        function(fa.0)
    }

    fn join<A: Value>(ffa: Identity<Identity<A>>) -> Identity<A> {
        ffa.0
    }
}

impl Foldable for IdentityKind {
    fn foldl<A: Value, B: Value>(
        fa: &Identity<A>,
        initial: B,
        function: impl Fn(B, A) -> B + 'static,
    ) -> B {
        function(initial, fa.0.clone())
    }

    fn foldr<A: Value, B: Value>(
        fa: &Identity<A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        function(fa.0.clone(), initial)
    }

    fn length<A: Value>(_: &Identity<A>) -> usize {
        1
    }
}

impl Traversable for IdentityKind {
    fn traverse<G: Applicative, A: Value, B: Value>(
        ta: Identity<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Identity<B>> {
        G::map(function(ta.0), Identity)
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("Identity", &MONAD, &["map", "apply", "pure", "bind", "join"]),
    Instance::new("Identity", &FOLDABLE, &["foldl", "foldr", "length"]),
    Instance::new("Identity", &TRAVERSABLE, &["map", "foldl", "foldr", "traverse"]),
    Instance::new("Identity", &EQ, &["eq"]),
    Instance::new("Identity", &MONOID, &["append", "empty"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn new_and_into_inner() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.as_inner(), "hello");
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i32::MAX)]
    fn map_applies_directly(#[case] value: i32) {
        assert_eq!(IdentityKind::map(Identity(value), |x| x.wrapping_add(1)), Identity(value.wrapping_add(1)));
    }

    #[rstest]
    fn apply_calls_the_wrapped_function() {
        let function = Identity(Function::new(|x: i32| x * 3));
        assert_eq!(IdentityKind::apply(Identity(4), function), Identity(12));
    }

    #[rstest]
    fn join_unwraps_one_layer() {
        assert_eq!(IdentityKind::join(Identity(Identity('x'))), Identity('x'));
    }

    #[rstest]
    fn folds_see_one_element() {
        assert_eq!(IdentityKind::foldl(&Identity(5), 1, |a, b| a + b), 6);
        assert_eq!(IdentityKind::fold_map(&Identity(5), Sum), Sum(5));
        assert_eq!(IdentityKind::length(&Identity(())), 1);
    }

    #[rstest]
    fn monoid_lifts_through() {
        assert_eq!(Identity(Sum(1)).append(Identity(Sum(2))), Identity(Sum(3)));
        assert_eq!(Identity::<String>::empty(), Identity(String::new()));
    }

    #[rstest]
    fn instances_are_complete() {
        for instance in INSTANCES {
            assert!(instance.validate().is_ok(), "{instance:?}");
        }
    }
}
