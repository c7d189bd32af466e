//! Applicative type class - lifting pure values into a context.
//!
//! # Laws
//!
//! ```text
//! apply(v, pure(id)) == v                                    -- identity
//! apply(pure(x), pure(f)) == pure(f(x))                      -- homomorphism
//! apply(pure(y), u) == apply(u, pure(|f| f(y)))              -- interchange
//! apply(apply(w, v), u) == apply(w, apply(v, map(u, compose)))  -- composition
//! ```
//!
//! # Default `map`
//!
//! `map(x, f) == apply(x, pure(f))`. Rust gives a supertrait method no
//! default from a subtrait, so an instance that wants this body delegates
//! `Functor::map` to [`Applicative::map_via_apply`].

use super::apply::{APPLY, Apply};
use super::class::{Class, Derivation, Law};
use super::higher::Value;
use crate::function::Function;

/// Apply functors with a `pure` injection.
pub trait Applicative: Apply {
    /// Lifts a value into the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Applicative;
    /// use lawful::types::{List, ListKind};
    ///
    /// assert_eq!(ListKind::pure(1), List::from(vec![1]));
    /// ```
    fn pure<A: Value>(value: A) -> Self::Of<A>;

    /// The default `map`, expressed through `apply` and `pure`.
    fn map_via_apply<A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Self::Of<B> {
        Self::apply(fa, Self::pure(Function::new(function)))
    }
}

/// `F::pure` as a free function.
pub fn pure<F: Applicative, A: Value>(value: A) -> F::Of<A> {
    F::pure(value)
}

/// Descriptor of the `Applicative` class.
pub static APPLICATIVE: Class = Class {
    name: "Applicative",
    superclasses: &[&APPLY],
    minimal: &[&["pure"]],
    defaults: &[Derivation::new("map", &["apply", "pure"])],
    laws: &[
        Law::new("identity", "apply(v, pure(id)) == v"),
        Law::new("homomorphism", "apply(pure(x), pure(f)) == pure(f(x))"),
        Law::new("interchange", "apply(pure(y), u) == apply(u, pure(|f| f(y)))"),
        Law::new(
            "composition",
            "apply(apply(w, v), u) == apply(w, apply(v, map(u, compose)))",
        ),
        Law::new("map_consistency", "map(x, f) == apply(x, pure(f))"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::fixtures::VecKind;
    use crate::typeclass::{Functor, IdentityKind, Identity};
    use rstest::rstest;

    #[rstest]
    fn pure_builds_a_singleton() {
        assert_eq!(pure::<VecKind, _>(7), vec![7]);
        assert_eq!(IdentityKind::pure("x"), Identity("x"));
    }

    #[rstest]
    fn map_via_apply_agrees_with_map() {
        let values = vec![1, 2, 3];
        assert_eq!(
            VecKind::map_via_apply(values.clone(), |x: i32| x - 1),
            VecKind::map(values, |x| x - 1)
        );
    }
}
