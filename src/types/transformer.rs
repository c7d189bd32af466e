//! Monad transformers.
//!
//! A [`Transformer`] is an inner monad `I` that knows how to merge two of its
//! own layers when they sit inside an arbitrary outer monad `O`. Given that,
//! [`Transformed<I, O>`] is a monad over `O::Of<I::Of<A>>`: `map`, `pure`
//! and `lift` are the double lifts of [`ComposeKind`], and `join` uses the
//! inner layer's case analysis.
//!
//! `MaybeT<O>` differs observably from `ComposeKind<O, MaybeKind>` at the
//! applicative level: its `apply` goes through `bind`, so a `Nothing` on the
//! left stops the computation instead of being paired with every value on
//! the right.
//!
//! ```rust
//! use lawful::typeclass::Apply;
//! use lawful::types::{Composed, List, ListKind, Maybe, MaybeT};
//!
//! let stop = Composed::<ListKind, _, i32>(List::from(vec![Maybe::Nothing]));
//! let values = Composed(List::from(vec![Maybe::Just(1), Maybe::Just(2)]));
//! let result = MaybeT::<ListKind>::apply_second(stop, values);
//! assert_eq!(result.0, List::from(vec![Maybe::Nothing]));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::compose::{ComposeKind, Composed};
use crate::function::Function;
use crate::typeclass::{
    Applicative, Apply, Bind, Functor, Identity, IdentityKind, Instance, MONAD, Monad,
    TypeConstructor, Value,
};
use crate::types::{Maybe, MaybeKind};

/// An inner monad that can be stacked under any outer monad.
pub trait Transformer: Monad {
    /// Merges the inner layer of `layer` into the outer monad `M`.
    fn join_inner<M: Monad, A: Value>(layer: Self::Of<M::Of<Self::Of<A>>>) -> M::Of<Self::Of<A>>;
}

impl Transformer for MaybeKind {
    fn join_inner<M: Monad, A: Value>(layer: Maybe<M::Of<Maybe<A>>>) -> M::Of<Maybe<A>> {
        match layer {
            Maybe::Just(inner) => inner,
            Maybe::Nothing => M::pure(Maybe::Nothing),
        }
    }
}

impl Transformer for IdentityKind {
    fn join_inner<M: Monad, A: Value>(layer: Identity<M::Of<Identity<A>>>) -> M::Of<Identity<A>> {
        layer.into_inner()
    }
}

/// Witness for the inner monad `I` stacked under the outer monad `O`.
pub struct Transformed<I, O>(PhantomData<fn() -> (I, O)>);

/// `Maybe` under the outer monad `O`.
pub type MaybeT<O> = Transformed<MaybeKind, O>;

/// `Identity` under the outer monad `O`.
pub type IdentityT<O> = Transformed<IdentityKind, O>;

impl<I, O> Clone for Transformed<I, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, O> Copy for Transformed<I, O> {}

impl<I, O> fmt::Debug for Transformed<I, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Transformed")
    }
}

impl<I: Transformer, O: Monad> Transformed<I, O> {
    /// Lifts an outer computation into the stack.
    pub fn lift<A: Value>(outer: O::Of<A>) -> Composed<O, I, A> {
        Composed(O::map(outer, I::pure))
    }
}

impl<I: TypeConstructor, O: TypeConstructor> TypeConstructor for Transformed<I, O> {
    type Of<A: Value> = Composed<O, I, A>;
}

impl<I: Transformer, O: Monad> Functor for Transformed<I, O> {
    fn map<A: Value, B: Value>(
        fa: Composed<O, I, A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Composed<O, I, B> {
        ComposeKind::<O, I>::map(fa, function)
    }
}

impl<I: Transformer, O: Monad> Apply for Transformed<I, O> {
    fn apply<A: Value, B: Value>(
        fa: Composed<O, I, A>,
        ff: Composed<O, I, Function<A, B>>,
    ) -> Composed<O, I, B> {
        Self::apply_via_bind(fa, ff)
    }
}

impl<I: Transformer, O: Monad> Applicative for Transformed<I, O> {
    fn pure<A: Value>(value: A) -> Composed<O, I, A> {
        ComposeKind::<O, I>::pure(value)
    }
}

impl<I: Transformer, O: Monad> Bind for Transformed<I, O> {
    fn join<A: Value>(ffa: Composed<O, I, Composed<O, I, A>>) -> Composed<O, I, A> {
        let merged = O::map(ffa.0, |inner: I::Of<Composed<O, I, A>>| {
            I::join_inner::<O, A>(I::map(inner, |nested: Composed<O, I, A>| nested.0))
        });
        Composed(O::join(merged))
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("MaybeT", &MONAD, &["map", "apply", "pure", "join"]),
    Instance::new("IdentityT", &MONAD, &["map", "apply", "pure", "join"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{List, ListKind};
    use rstest::rstest;

    type ListMaybe = MaybeT<ListKind>;

    fn stacked(values: Vec<Maybe<i32>>) -> Composed<ListKind, MaybeKind, i32> {
        Composed(List::from(values))
    }

    #[rstest]
    fn nothing_stops_the_sequence() {
        let result = ListMaybe::apply_second(
            stacked(vec![Maybe::Nothing]),
            stacked(vec![Maybe::Just(1), Maybe::Just(2)]),
        );
        assert_eq!(result, stacked(vec![Maybe::Nothing]));
    }

    #[rstest]
    fn bind_runs_inside_the_outer_monad() {
        let result = ListMaybe::bind(stacked(vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)]), |x| {
            stacked(vec![Maybe::Just(x), Maybe::Just(x * 10)])
        });
        assert_eq!(
            result,
            stacked(vec![
                Maybe::Just(1),
                Maybe::Just(10),
                Maybe::Nothing,
                Maybe::Just(3),
                Maybe::Just(30),
            ])
        );
    }

    #[rstest]
    fn lift_wraps_every_outer_value() {
        let lifted = ListMaybe::lift(List::from(vec![1, 2]));
        assert_eq!(lifted, stacked(vec![Maybe::Just(1), Maybe::Just(2)]));
    }

    #[rstest]
    fn identity_transformer_is_the_outer_monad() {
        let values = Composed::<ListKind, IdentityKind, i32>(List::from(vec![Identity(1), Identity(2)]));
        let result = IdentityT::<ListKind>::bind(values, |x| {
            IdentityT::<ListKind>::lift(List::from(vec![x, -x]))
        });
        assert_eq!(
            result.0,
            List::from(vec![Identity(1), Identity(-1), Identity(2), Identity(-2)])
        );
    }

    #[rstest]
    fn instances_are_complete() {
        for instance in INSTANCES {
            assert!(instance.validate().is_ok(), "{instance:?}");
        }
    }
}
