//! The sampling registry.
//!
//! Plain types sample through proptest's [`Arbitrary`], implemented here for
//! every data type of the crate. Type constructors sample through
//! [`SampleKind`]: given a strategy for the elements, a witness produces a
//! strategy for its containers. Sampling composes, so
//! `ComposeKind<MaybeKind, ListKind>` samples maybes of lists of whatever
//! the element strategy draws, and a strategy for functions can be fed in as
//! the element strategy to sample containers of functions.

use proptest::arbitrary::{Arbitrary, any};
use proptest::collection::vec;
use proptest::prop_oneof;
use proptest::strategy::{BoxedStrategy, Just, Strategy};

use super::draw::functions;
use crate::control::{Either, EitherKind};
use crate::function::{Function, FunctionArrow, FunctionKind, OpKind, Uncurried, UncurriedKind};
use crate::typeclass::{
    All, Any, Endo, Identity, IdentityKind, Sum, TypeConstructor, TypeConstructor2, Value,
};
use crate::types::{
    ComposeKind, Composed, Dictionary, DictionaryKind, Key, Lens, LensKind, LinkedList,
    LinkedListKind, List, ListKind, Maybe, MaybeKind, Transformed,
};

/// Largest sampled collection.
pub const MAX_LENGTH: usize = 6;

/// Type constructors whose values can be sampled from an element strategy.
pub trait SampleKind: TypeConstructor {
    /// Containers holding values drawn from `element`.
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<Self::Of<A>>;
}

/// Two-parameter constructors sampled from a strategy for their output.
pub trait SampleKind2: TypeConstructor2 {
    /// Values of `Self::Of<A, B>` producing outputs drawn from `output`.
    fn sample<A: Value, B: Value>(output: BoxedStrategy<B>) -> BoxedStrategy<Self::Of<A, B>>;
}

/// Shorthand for `K::sample(any::<A>())`.
pub fn sample<K: SampleKind, A: Value + Arbitrary>() -> BoxedStrategy<K::Of<A>> {
    K::sample(any::<A>().boxed())
}

// =============================================================================
// Arbitrary for plain types
// =============================================================================

macro_rules! arbitrary_via {
    ($type:ty => $strategy:expr) => {
        impl Arbitrary for $type {
            type Parameters = ();
            type Strategy = BoxedStrategy<Self>;

            fn arbitrary_with((): ()) -> Self::Strategy {
                $strategy.boxed()
            }
        }
    };
}

arbitrary_via!(Sum => any::<i64>().prop_map(Sum));
arbitrary_via!(All => any::<bool>().prop_map(All));
arbitrary_via!(Any => any::<bool>().prop_map(Any));

impl<A: Value + Arbitrary> Arbitrary for Maybe<A> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        sample::<MaybeKind, A>()
    }
}

impl<A: Value + Arbitrary> Arbitrary for Identity<A> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        sample::<IdentityKind, A>()
    }
}

impl<L: Value + Arbitrary, R: Value + Arbitrary> Arbitrary for Either<L, R> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        sample::<EitherKind<L>, R>()
    }
}

impl<A: Value + Arbitrary> Arbitrary for List<A> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        sample::<ListKind, A>()
    }
}

impl<A: Value + Arbitrary> Arbitrary for LinkedList<A> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        sample::<LinkedListKind, A>()
    }
}

impl<K: Key + Arbitrary, V: Value + Arbitrary> Arbitrary for Dictionary<K, V> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        sample::<DictionaryKind<K>, V>()
    }
}

impl<F, G, A> Arbitrary for Composed<F, G, A>
where
    F: TypeConstructor,
    G: TypeConstructor,
    A: Value,
    F::Of<G::Of<A>>: Arbitrary,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        any::<F::Of<G::Of<A>>>().prop_map(Composed).boxed()
    }
}

impl<A: Value, B: Value + Arbitrary> Arbitrary for Function<A, B> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        functions(any::<B>())
    }
}

impl<A: Value + Arbitrary> Arbitrary for Endo<A> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        any::<Function<A, A>>().prop_map(Endo).boxed()
    }
}

impl<Args: Value, B: Value + Arbitrary> Arbitrary for Uncurried<Args, B> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        sample::<UncurriedKind<Args>, B>()
    }
}

impl<S: Value, T: Value + Arbitrary, A: Value + Arbitrary, B: Value> Arbitrary
    for Lens<S, T, A, B>
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        LensKind::<A, B>::sample::<S, T>(any::<T>().boxed())
    }
}

// =============================================================================
// Type constructors
// =============================================================================

impl SampleKind for MaybeKind {
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<Maybe<A>> {
        prop_oneof![
            1 => Just(Maybe::Nothing),
            3 => element.prop_map(Maybe::Just),
        ]
        .boxed()
    }
}

impl SampleKind for IdentityKind {
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<Identity<A>> {
        element.prop_map(Identity).boxed()
    }
}

impl<L: Value + Arbitrary> SampleKind for EitherKind<L> {
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<Either<L, A>> {
        prop_oneof![
            any::<L>().prop_map(Either::Left),
            element.prop_map(Either::Right),
        ]
        .boxed()
    }
}

impl SampleKind for ListKind {
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<List<A>> {
        vec(element, 0..=MAX_LENGTH).prop_map(List::from).boxed()
    }
}

impl SampleKind for LinkedListKind {
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<LinkedList<A>> {
        vec(element, 0..=MAX_LENGTH)
            .prop_map(|elements| elements.into_iter().collect::<LinkedList<A>>())
            .boxed()
    }
}

impl<K: Key + Arbitrary> SampleKind for DictionaryKind<K> {
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<Dictionary<K, A>> {
        vec((any::<K>(), element), 0..=MAX_LENGTH)
            .prop_map(|entries| entries.into_iter().collect::<Dictionary<K, A>>())
            .boxed()
    }
}

impl<X: Value> SampleKind for FunctionKind<X> {
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<Function<X, A>> {
        functions(element)
    }
}

impl<Args: Value> SampleKind for UncurriedKind<Args> {
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<Uncurried<Args, A>> {
        functions::<Args, A>(element)
            .prop_map(|function| Uncurried::new(move |arguments| function.call(arguments)))
            .boxed()
    }
}

// The input side of `Function<A, R>` is not drawn; only results are.
impl<R: Value + Arbitrary> SampleKind for OpKind<R> {
    fn sample<A: Value>(_: BoxedStrategy<A>) -> BoxedStrategy<Function<A, R>> {
        functions(any::<R>())
    }
}

impl<F: SampleKind, G: SampleKind> SampleKind for ComposeKind<F, G> {
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<Composed<F, G, A>> {
        F::sample(G::sample(element)).prop_map(Composed).boxed()
    }
}

impl<I: SampleKind, O: SampleKind> SampleKind for Transformed<I, O> {
    fn sample<A: Value>(element: BoxedStrategy<A>) -> BoxedStrategy<Composed<O, I, A>> {
        ComposeKind::<O, I>::sample(element)
    }
}

impl SampleKind2 for FunctionArrow {
    fn sample<A: Value, B: Value>(output: BoxedStrategy<B>) -> BoxedStrategy<Function<A, B>> {
        functions(output)
    }
}

impl<X: Value + Arbitrary, Y: Value> SampleKind2 for LensKind<X, Y> {
    fn sample<S: Value, T: Value>(output: BoxedStrategy<T>) -> BoxedStrategy<Lens<S, T, X, Y>> {
        (functions::<S, X>(any::<X>()), functions::<(Y, S), T>(output))
            .prop_map(|(view, update)| {
                Lens::new(
                    move |source: S| view.call(source),
                    move |value: Y, source: S| update.call((value, source)),
                )
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Draw;
    use rstest::rstest;

    #[rstest]
    fn lists_stay_short() {
        let mut draw = Draw::from_seed(11);
        for _ in 0..50 {
            let list = draw.from_strategy(&sample::<ListKind, i32>()).unwrap();
            assert!(list.len() <= MAX_LENGTH);
        }
    }

    #[rstest]
    fn maybes_mix_both_constructors() {
        let mut draw = Draw::from_seed(12);
        let values: Vec<Maybe<u8>> = (0..200)
            .filter_map(|_| draw.value::<Maybe<u8>>())
            .collect();
        assert!(values.iter().any(|value| matches!(value, Maybe::Nothing)));
        assert!(values.iter().any(|value| matches!(value, Maybe::Just(_))));
    }

    #[rstest]
    fn composed_sampling_nests() {
        let mut draw = Draw::from_seed(13);
        let Composed(outer) = draw
            .from_strategy(&sample::<ComposeKind<ListKind, MaybeKind>, bool>())
            .unwrap();
        assert!(outer.len() <= MAX_LENGTH);
    }

    #[rstest]
    fn sampled_lenses_are_lawful_getters() {
        let mut draw = Draw::from_seed(14);
        let lens = draw.value::<Lens<i32, i32, u8, u8>>().unwrap();
        assert_eq!(lens.view(3), lens.view(3));
    }
}
