//! Composition of two type constructors.
//!
//! [`Composed<F, G, A>`] wraps an `F::Of<G::Of<A>>`. [`ComposeKind<F, G>`]
//! lifts each layer's operation through the other, so the composite is a
//! functor, applicative, foldable or traversable whenever both layers are.
//! It is not a monad in general; see [`Transformed`](super::Transformed) for
//! the layers that can be joined.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Applicative, Functor};
//! use lawful::types::{ComposeKind, Composed, List, ListKind, Maybe, MaybeKind};
//!
//! type ListOfMaybe = ComposeKind<ListKind, MaybeKind>;
//!
//! let nested = Composed::<ListKind, MaybeKind, i32>(List::from(vec![Maybe::Just(1), Maybe::Nothing]));
//! let doubled = ListOfMaybe::map(nested, |x| x * 2);
//! assert_eq!(doubled.0, List::from(vec![Maybe::Just(2), Maybe::Nothing]));
//! assert_eq!(ListOfMaybe::pure(7).0, List::from(vec![Maybe::Just(7)]));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::function::Function;
use crate::typeclass::{
    APPLICATIVE, Applicative, Apply, FOLDABLE, Foldable, Functor, Instance, TRAVERSABLE,
    Traversable, TypeConstructor, Value,
};

/// A value of `F::Of<G::Of<A>>`.
pub struct Composed<F: TypeConstructor, G: TypeConstructor, A: Value>(pub F::Of<G::Of<A>>);

impl<F: TypeConstructor, G: TypeConstructor, A: Value> Composed<F, G, A> {
    /// Unwraps the nested value.
    pub fn decomposed(self) -> F::Of<G::Of<A>> {
        self.0
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A: Value> Clone for Composed<F, G, A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A: Value> fmt::Debug for Composed<F, G, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Compose").field(&self.0).finish()
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A: Value> PartialEq for Composed<F, G, A>
where
    F::Of<G::Of<A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A: Value> crate::typeclass::Eq for Composed<F, G, A>
where
    F::Of<G::Of<A>>: crate::typeclass::Eq,
{
    fn eq(&self, other: &Self) -> bool {
        crate::typeclass::Eq::eq(&self.0, &other.0)
    }
}

/// Witness for `F` composed with `G`.
pub struct ComposeKind<F, G>(PhantomData<fn() -> (F, G)>);

impl<F, G> Clone for ComposeKind<F, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, G> Copy for ComposeKind<F, G> {}

impl<F, G> fmt::Debug for ComposeKind<F, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ComposeKind")
    }
}

impl<F: TypeConstructor, G: TypeConstructor> TypeConstructor for ComposeKind<F, G> {
    type Of<A: Value> = Composed<F, G, A>;
}

impl<F: Functor, G: Functor> Functor for ComposeKind<F, G> {
    fn map<A: Value, B: Value>(
        fa: Composed<F, G, A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Composed<F, G, B> {
        let function = Rc::new(function);
        Composed(F::map(fa.0, move |ga| {
            let function = Rc::clone(&function);
            G::map(ga, move |a| function(a))
        }))
    }
}

impl<F: Apply, G: Apply> Apply for ComposeKind<F, G> {
    fn apply<A: Value, B: Value>(
        fa: Composed<F, G, A>,
        ff: Composed<F, G, Function<A, B>>,
    ) -> Composed<F, G, B> {
        let lifted = F::map(ff.0, |gf: G::Of<Function<A, B>>| {
            Function::new(move |ga: G::Of<A>| G::apply(ga, gf.clone()))
        });
        Composed(F::apply(fa.0, lifted))
    }
}

impl<F: Applicative, G: Applicative> Applicative for ComposeKind<F, G> {
    fn pure<A: Value>(value: A) -> Composed<F, G, A> {
        Composed(F::pure(G::pure(value)))
    }
}

impl<F: Foldable, G: Foldable> Foldable for ComposeKind<F, G> {
    fn foldl<A: Value, B: Value>(
        fa: &Composed<F, G, A>,
        initial: B,
        function: impl Fn(B, A) -> B + 'static,
    ) -> B {
        let function = Rc::new(function);
        F::foldl(&fa.0, initial, move |accumulator, ga| {
            let function = Rc::clone(&function);
            G::foldl(&ga, accumulator, move |b, a| function(b, a))
        })
    }

    fn foldr<A: Value, B: Value>(
        fa: &Composed<F, G, A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        let function = Rc::new(function);
        F::foldr(&fa.0, initial, move |ga, accumulator| {
            let function = Rc::clone(&function);
            G::foldr(&ga, accumulator, move |a, b| function(a, b))
        })
    }
}

impl<F: Traversable, G: Traversable> Traversable for ComposeKind<F, G> {
    fn traverse<H: Applicative, A: Value, B: Value>(
        ta: Composed<F, G, A>,
        function: impl Fn(A) -> H::Of<B> + 'static,
    ) -> H::Of<Composed<F, G, B>> {
        let function = Rc::new(function);
        let traversed = F::traverse::<H, G::Of<A>, G::Of<B>>(ta.0, move |ga| {
            let function = Rc::clone(&function);
            G::traverse::<H, A, B>(ga, move |a| function(a))
        });
        H::map(traversed, |nested| Composed(nested))
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("Compose", &APPLICATIVE, &["map", "apply", "pure"]),
    Instance::new("Compose", &FOLDABLE, &["foldl", "foldr"]),
    Instance::new("Compose", &TRAVERSABLE, &["map", "foldl", "foldr", "traverse"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::IdentityKind;
    use crate::types::{List, ListKind, Maybe, MaybeKind};
    use rstest::rstest;

    type ListOfMaybe = ComposeKind<ListKind, MaybeKind>;

    fn nested(values: Vec<Maybe<i32>>) -> Composed<ListKind, MaybeKind, i32> {
        Composed(List::from(values))
    }

    #[rstest]
    fn apply_second_keeps_every_combination() {
        let result = ListOfMaybe::apply_second(
            nested(vec![Maybe::Nothing]),
            nested(vec![Maybe::Just(1), Maybe::Just(2)]),
        );
        assert_eq!(result, nested(vec![Maybe::Nothing, Maybe::Nothing]));
    }

    #[rstest]
    fn apply_lifts_through_both_layers() {
        let functions = Composed::<ListKind, MaybeKind, Function<i32, i32>>(List::from(vec![
            Maybe::Just(Function::new(|x| x + 1)),
            Maybe::Nothing,
        ]));
        let result = ListOfMaybe::apply(nested(vec![Maybe::Just(1), Maybe::Just(2)]), functions);
        assert_eq!(
            result,
            nested(vec![Maybe::Just(2), Maybe::Just(3), Maybe::Nothing, Maybe::Nothing])
        );
    }

    #[rstest]
    fn folds_visit_every_inner_value() {
        let values = nested(vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)]);
        assert_eq!(ListOfMaybe::sum(&values), 4);
        assert_eq!(ListOfMaybe::length(&values), 2);
        assert_eq!(
            ListOfMaybe::foldr(&values, String::new(), |x, acc| format!("{x}{acc}")),
            "13"
        );
    }

    #[rstest]
    fn traverse_rebuilds_both_layers() {
        let values = nested(vec![Maybe::Just(1), Maybe::Nothing]);
        let result = ListOfMaybe::traverse::<IdentityKind, i32, i32>(values, |x| {
            crate::typeclass::Identity(x * 10)
        });
        assert_eq!(result.0, nested(vec![Maybe::Just(10), Maybe::Nothing]));
    }

    #[rstest]
    fn instances_are_complete() {
        for instance in INSTANCES {
            assert!(instance.validate().is_ok(), "{instance:?}");
        }
    }
}
