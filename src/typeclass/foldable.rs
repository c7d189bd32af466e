//! Foldable type class - reducing a structure to a summary value.
//!
//! Any one of [`fold_map`](Foldable::fold_map), [`foldl`](Foldable::foldl)
//! and [`foldr`](Foldable::foldr) is a minimal complete definition. The three
//! defaults form a cycle:
//!
//! - `fold_map` via `foldl`,
//! - `foldl` via `foldr`, threading an [`Endo`] accumulator,
//! - `foldr` via `fold_map` into the [`Endo`] monoid.
//!
//! Defaults are correct but slower than direct definitions, and every call to
//! one emits a `debug` event on the `lawful::performance` target. Instances
//! should supply `foldl`, `foldr`, `to_iter` and `length` directly.
//!
//! Folding takes the structure by reference and hands elements to the fold
//! function by value (cloned).
//!
//! # Laws
//!
//! ```text
//! fold_map(xs, f) == fold(map(xs, f))                    -- when also a Functor
//! ```
//!
//! Every operation an instance overrides must agree with its default.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Foldable;
//! use lawful::types::{List, ListKind};
//!
//! let words = List::from(vec!["a", "b", "c"]);
//! let nested = ListKind::foldr(&words, String::from("x"), |x, acc| format!("({x}+{acc})"));
//! assert_eq!(nested, "(a+(b+(c+x)))");
//! ```
//!
//! [`Endo`]: super::Endo

use std::ops::Add;

use super::class::{Class, Derivation, Law};
use super::eq::Eq;
use super::higher::{TypeConstructor, Value};
use super::monoid::Monoid;

/// Structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Maps every element into a monoid and combines the results left to
    /// right.
    fn fold_map<A: Value, M: Monoid + Value>(
        fa: &Self::Of<A>,
        function: impl Fn(A) -> M + 'static,
    ) -> M {
        defaults::fold_map::<Self, A, M>(fa, function)
    }

    /// Left-associative fold.
    fn foldl<A: Value, B: Value>(
        fa: &Self::Of<A>,
        initial: B,
        function: impl Fn(B, A) -> B + 'static,
    ) -> B {
        defaults::foldl::<Self, A, B>(fa, initial, function)
    }

    /// Right-associative fold.
    fn foldr<A: Value, B: Value>(
        fa: &Self::Of<A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        defaults::foldr::<Self, A, B>(fa, initial, function)
    }

    /// Combines the elements, which are already monoid values.
    fn fold<M: Monoid + Value>(fa: &Self::Of<M>) -> M {
        Self::fold_map(fa, |m: M| m)
    }

    /// The elements in fold order.
    fn to_iter<A: Value>(fa: &Self::Of<A>) -> std::vec::IntoIter<A> {
        defaults::to_iter::<Self, A>(fa)
    }

    /// Number of elements.
    fn length<A: Value>(fa: &Self::Of<A>) -> usize {
        defaults::length::<Self, A>(fa)
    }

    /// Whether there are no elements.
    fn null<A: Value>(fa: &Self::Of<A>) -> bool {
        defaults::null::<Self, A>(fa)
    }

    /// Adds up the elements, starting from `A::default()`.
    fn sum<A: Value + Add<Output = A> + Default>(fa: &Self::Of<A>) -> A {
        defaults::sum::<Self, A>(fa)
    }

    /// Whether some element equals `value`.
    fn elem<A: Value + Eq>(fa: &Self::Of<A>, value: A) -> bool {
        defaults::elem::<Self, A>(fa, value)
    }

    /// The first element, or `default` when there is none.
    fn head<A: Value>(fa: &Self::Of<A>, default: A) -> A {
        Self::foldr(fa, default, |a, _| a)
    }
}

/// The default bodies of [`Foldable`].
///
/// They are public so that law tests can compare an instance's overrides
/// against them.
pub mod defaults {
    use std::ops::Add;

    use super::Foldable;
    use crate::typeclass::eq::Eq;
    use crate::typeclass::higher::Value;
    use crate::typeclass::monoid::Monoid;
    use crate::typeclass::semigroup::Semigroup;
    use crate::typeclass::wrappers::Endo;

    fn notice<F: ?Sized>(operation: &'static str, via: &'static str) {
        tracing::debug!(
            target: "lawful::performance",
            class = "Foldable",
            operation,
            via,
            instance = std::any::type_name::<F>(),
            "using default implementation"
        );
    }

    /// `fold_map` via `foldl`.
    pub fn fold_map<F: Foldable + ?Sized, A: Value, M: Monoid + Value>(
        fa: &F::Of<A>,
        function: impl Fn(A) -> M + 'static,
    ) -> M {
        notice::<F>("fold_map", "foldl");
        F::foldl(fa, M::empty(), move |accumulator, a| {
            accumulator.append(function(a))
        })
    }

    /// `foldl` via `foldr`: each element becomes a step of an [`Endo`] that
    /// runs the remaining steps after itself.
    pub fn foldl<F: Foldable + ?Sized, A: Value, B: Value>(
        fa: &F::Of<A>,
        initial: B,
        function: impl Fn(B, A) -> B + 'static,
    ) -> B {
        notice::<F>("foldl", "foldr");
        let function = std::rc::Rc::new(function);
        let steps = F::foldr(fa, Endo::empty(), move |a: A, rest: Endo<B>| {
            let function = std::rc::Rc::clone(&function);
            Endo::new(move |b| rest.call(function(b, a.clone())))
        });
        steps.call(initial)
    }

    /// `foldr` via `fold_map` into the [`Endo`] monoid.
    pub fn foldr<F: Foldable + ?Sized, A: Value, B: Value>(
        fa: &F::Of<A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        notice::<F>("foldr", "fold_map");
        let function = std::rc::Rc::new(function);
        let composed = F::fold_map(fa, move |a: A| {
            let function = std::rc::Rc::clone(&function);
            Endo::new(move |b| function(a.clone(), b))
        });
        composed.call(initial)
    }

    /// `to_iter` via `foldl`.
    pub fn to_iter<F: Foldable + ?Sized, A: Value>(fa: &F::Of<A>) -> std::vec::IntoIter<A> {
        notice::<F>("to_iter", "foldl");
        F::foldl(fa, Vec::new(), |mut elements, a| {
            elements.push(a);
            elements
        })
        .into_iter()
    }

    /// `length` via `foldl`.
    pub fn length<F: Foldable + ?Sized, A: Value>(fa: &F::Of<A>) -> usize {
        notice::<F>("length", "foldl");
        F::foldl(fa, 0_usize, |count, _| count + 1)
    }

    /// `null` via `foldl`.
    pub fn null<F: Foldable + ?Sized, A: Value>(fa: &F::Of<A>) -> bool {
        notice::<F>("null", "foldl");
        F::foldl(fa, true, |_, _| false)
    }

    /// `sum` via `foldl`.
    pub fn sum<F: Foldable + ?Sized, A: Value + Add<Output = A> + Default>(fa: &F::Of<A>) -> A {
        notice::<F>("sum", "foldl");
        F::foldl(fa, A::default(), |total, a| total + a)
    }

    /// `elem` via `foldl`.
    pub fn elem<F: Foldable + ?Sized, A: Value + Eq>(fa: &F::Of<A>, value: A) -> bool {
        notice::<F>("elem", "foldl");
        F::foldl(fa, false, move |found, a| found || Eq::eq(&a, &value))
    }
}

/// `F::fold_map` as a free function.
pub fn fold_map<F: Foldable, A: Value, M: Monoid + Value>(
    fa: &F::Of<A>,
    function: impl Fn(A) -> M + 'static,
) -> M {
    F::fold_map(fa, function)
}

/// `F::foldl` as a free function.
pub fn foldl<F: Foldable, A: Value, B: Value>(
    fa: &F::Of<A>,
    initial: B,
    function: impl Fn(B, A) -> B + 'static,
) -> B {
    F::foldl(fa, initial, function)
}

/// `F::foldr` as a free function.
pub fn foldr<F: Foldable, A: Value, B: Value>(
    fa: &F::Of<A>,
    initial: B,
    function: impl Fn(A, B) -> B + 'static,
) -> B {
    F::foldr(fa, initial, function)
}

/// `F::fold` as a free function.
pub fn fold<F: Foldable, M: Monoid + Value>(fa: &F::Of<M>) -> M {
    F::fold(fa)
}

/// `F::length` as a free function.
pub fn length<F: Foldable, A: Value>(fa: &F::Of<A>) -> usize {
    F::length(fa)
}

/// `F::sum` as a free function.
pub fn sum<F: Foldable, A: Value + Add<Output = A> + Default>(fa: &F::Of<A>) -> A {
    F::sum(fa)
}

/// `F::null` as a free function.
pub fn null<F: Foldable, A: Value>(fa: &F::Of<A>) -> bool {
    F::null(fa)
}

/// `F::elem` as a free function.
pub fn elem<F: Foldable, A: Value + Eq>(fa: &F::Of<A>, value: A) -> bool {
    F::elem(fa, value)
}

/// Descriptor of the `Foldable` class.
pub static FOLDABLE: Class = Class {
    name: "Foldable",
    superclasses: &[],
    minimal: &[&["fold_map"], &["foldl"], &["foldr"]],
    defaults: &[
        Derivation::new("fold_map", &["foldl"]),
        Derivation::new("foldl", &["foldr"]),
        Derivation::new("foldr", &["fold_map"]),
        Derivation::new("fold", &["fold_map"]),
        Derivation::new("to_iter", &["foldl"]),
        Derivation::new("length", &["foldl"]),
        Derivation::new("null", &["foldl"]),
        Derivation::new("sum", &["foldl"]),
        Derivation::new("elem", &["foldl"]),
        Derivation::new("head", &["foldr"]),
    ],
    laws: &[
        Law::new("fold_map_consistency", "fold_map(xs, f) == fold(map(xs, f))"),
        Law::new(
            "fold_map_default_consistency",
            "fold_map(xs, f) == default fold_map(xs, f)",
        ),
        Law::new("foldl_consistency", "foldl(xs, z, f) == default foldl(xs, z, f)"),
        Law::new("foldr_consistency", "foldr(xs, z, f) == default foldr(xs, z, f)"),
        Law::new("length_consistency", "length(xs) == default length(xs)"),
        Law::new("null_consistency", "null(xs) == default null(xs)"),
        Law::new("sum_consistency", "sum(xs) == default sum(xs)"),
        Law::new("elem_consistency", "elem(xs, x) == default elem(xs, x)"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::fixtures::{FoldrOnly, VecKind};
    use crate::typeclass::{Sum, Semigroup};
    use rstest::rstest;

    #[rstest]
    fn fold_map_combines_left_to_right() {
        let words = vec!["a", "b", "c"];
        assert_eq!(fold_map::<VecKind, _, _>(&words, String::from), "abc");
        assert_eq!(fold_map::<FoldrOnly, _, _>(&words, String::from), "abc");
    }

    #[rstest]
    fn foldl_from_foldr_keeps_left_association() {
        let digits = vec![1, 2, 3];
        let nested = foldl::<FoldrOnly, _, _>(&digits, String::from("z"), |acc, x| {
            format!("({acc}+{x})")
        });
        assert_eq!(nested, "(((z+1)+2)+3)");
    }

    #[rstest]
    fn foldr_from_fold_map_keeps_right_association() {
        let digits = vec![1, 2, 3];
        let nested = defaults::foldr::<VecKind, _, _>(&digits, String::from("z"), |x, acc| {
            format!("({x}+{acc})")
        });
        assert_eq!(nested, "(1+(2+(3+z)))");
    }

    #[rstest]
    #[case(vec![], 0, true)]
    #[case(vec![4, 5], 2, false)]
    fn length_and_null(#[case] values: Vec<i32>, #[case] expected: usize, #[case] empty: bool) {
        assert_eq!(length::<FoldrOnly, _>(&values), expected);
        assert_eq!(null::<FoldrOnly, _>(&values), empty);
    }

    #[rstest]
    fn sum_elem_and_head() {
        let values = vec![3, 4, 5];
        assert_eq!(sum::<FoldrOnly, _>(&values), 12);
        assert!(elem::<FoldrOnly, _>(&values, 4));
        assert!(!elem::<FoldrOnly, _>(&values, 9));
        assert_eq!(FoldrOnly::head(&values, 0), 3);
        assert_eq!(FoldrOnly::head(&Vec::new(), 0), 0);
    }

    #[rstest]
    fn fold_uses_the_monoid() {
        let values = vec![Sum(1), Sum(2)];
        assert_eq!(fold::<VecKind, _>(&values), Sum(1).append(Sum(2)));
    }

    #[rstest]
    fn to_iter_preserves_order() {
        let collected: Vec<i32> = FoldrOnly::to_iter(&vec![1, 2, 3]).collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }
}
