//! Bind type class - sequencing dependent computations.
//!
//! `bind` and `join` are defined in terms of each other, so an instance
//! supplies `map` and one of them.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! bind(bind(x, f), g) == bind(x, |a| bind(f(a), g))
//! ```
//!
//! # Default `apply`
//!
//! `Bind` declares an `apply` default via `bind` and `map` that shadows
//! `Apply`'s. Instances pick it up by delegating `Apply::apply` to
//! [`Bind::apply_via_bind`].

use super::apply::{APPLY, Apply};
use super::class::{Class, Derivation, Law};
use super::higher::Value;
use crate::function::Function;

/// Apply functors that can flatten a nested context.
pub trait Bind: Apply {
    /// Runs `function` on every value of `fa` and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Bind;
    /// use lawful::types::{List, ListKind};
    ///
    /// let result = ListKind::bind(List::from(vec![1, 2]), |x: i32| List::from(vec![x, x * 10]));
    /// assert_eq!(result, List::from(vec![1, 10, 2, 20]));
    /// ```
    fn bind<A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(A) -> Self::Of<B> + 'static,
    ) -> Self::Of<B> {
        Self::join(Self::map(fa, function))
    }

    /// Flattens one level of nesting.
    fn join<A: Value>(ffa: Self::Of<Self::Of<A>>) -> Self::Of<A> {
        Self::bind(ffa, |fa| fa)
    }

    /// The default `apply`, expressed through `bind` and `map`.
    fn apply_via_bind<A: Value, B: Value>(
        fa: Self::Of<A>,
        ff: Self::Of<Function<A, B>>,
    ) -> Self::Of<B> {
        Self::bind(ff, move |function: Function<A, B>| {
            Self::map(fa.clone(), move |a| function.call(a))
        })
    }
}

/// `F::bind` as a free function.
pub fn bind<F: Bind, A: Value, B: Value>(
    fa: F::Of<A>,
    function: impl Fn(A) -> F::Of<B> + 'static,
) -> F::Of<B> {
    F::bind(fa, function)
}

/// `F::join` as a free function.
pub fn join<F: Bind, A: Value>(ffa: F::Of<F::Of<A>>) -> F::Of<A> {
    F::join(ffa)
}

/// Descriptor of the `Bind` class.
pub static BIND: Class = Class {
    name: "Bind",
    superclasses: &[&APPLY],
    minimal: &[&["map", "bind"], &["map", "join"]],
    defaults: &[
        Derivation::new("bind", &["join", "map"]),
        Derivation::new("join", &["bind"]),
        Derivation::new("apply", &["bind", "map"]),
    ],
    laws: &[
        Law::new(
            "associativity",
            "bind(bind(x, f), g) == bind(x, |a| bind(f(a), g))",
        ),
        Law::new(
            "apply_consistency",
            "apply(x, fs) == bind(fs, |f| map(x, f))",
        ),
        Law::new("join_consistency", "join(x) == bind(x, id)"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::fixtures::VecKind;
    use rstest::rstest;

    #[rstest]
    fn bind_is_concat_map() {
        let result = bind::<VecKind, _, _>(vec![1, 2, 3], |x: i32| vec![x; x as usize]);
        assert_eq!(result, vec![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn join_flattens() {
        assert_eq!(join::<VecKind, _>(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
    }

    #[rstest]
    fn apply_via_bind_agrees_with_apply() {
        let functions = vec![Function::new(|x: i32| x + 1), Function::new(|x: i32| x * 2)];
        assert_eq!(
            VecKind::apply_via_bind(vec![5, 6], functions.clone()),
            VecKind::apply(vec![5, 6], functions)
        );
    }
}
