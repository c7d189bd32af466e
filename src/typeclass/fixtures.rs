//! Minimal instances over `Vec` for the unit tests of this module.

use super::{
    Applicative, Apply, Bind, Foldable, Functor, Traversable, TypeConstructor, Value,
};
use crate::function::Function;

/// `Vec` with list-monad semantics and direct folds.
#[derive(Debug, Clone, Copy)]
pub struct VecKind;

impl TypeConstructor for VecKind {
    type Of<A: Value> = Vec<A>;
}

impl Functor for VecKind {
    fn map<A: Value, B: Value>(fa: Vec<A>, function: impl Fn(A) -> B + 'static) -> Vec<B> {
        fa.into_iter().map(function).collect()
    }
}

impl Apply for VecKind {
    fn apply<A: Value, B: Value>(fa: Vec<A>, ff: Vec<Function<A, B>>) -> Vec<B> {
        ff.iter()
            .flat_map(|function| fa.iter().map(|a| function.call(a.clone())))
            .collect()
    }
}

impl Applicative for VecKind {
    fn pure<A: Value>(value: A) -> Vec<A> {
        vec![value]
    }
}

impl Bind for VecKind {
    fn bind<A: Value, B: Value>(fa: Vec<A>, function: impl Fn(A) -> Vec<B> + 'static) -> Vec<B> {
        fa.into_iter().flat_map(function).collect()
    }
}

impl Foldable for VecKind {
    fn foldl<A: Value, B: Value>(
        fa: &Vec<A>,
        initial: B,
        function: impl Fn(B, A) -> B + 'static,
    ) -> B {
        fa.iter().cloned().fold(initial, function)
    }

    fn foldr<A: Value, B: Value>(
        fa: &Vec<A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        fa.iter().rev().cloned().fold(initial, |b, a| function(a, b))
    }
}

impl Traversable for VecKind {
    fn traverse<G: Applicative, A: Value, B: Value>(
        ta: Vec<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Vec<B>> {
        ta.into_iter().fold(G::pure(Vec::new()), |accumulator, a| {
            G::lift2(accumulator, function(a), |mut values: Vec<B>, b| {
                values.push(b);
                values
            })
        })
    }
}

/// `Vec` folded through `foldr` alone, so every other fold runs a default.
#[derive(Debug, Clone, Copy)]
pub struct FoldrOnly;

impl TypeConstructor for FoldrOnly {
    type Of<A: Value> = Vec<A>;
}

impl Foldable for FoldrOnly {
    fn foldr<A: Value, B: Value>(
        fa: &Vec<A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        fa.iter().rev().cloned().fold(initial, |b, a| function(a, b))
    }
}
