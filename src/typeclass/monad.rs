//! Monad type class - the join of Applicative and Bind.
//!
//! Every type that is both [`Applicative`] and [`Bind`] is a `Monad`; the
//! blanket implementation below makes that automatic.
//!
//! # Laws
//!
//! ```text
//! bind(pure(a), f) == f(a)      -- left identity
//! bind(m, pure) == m            -- right identity
//! ```
//!
//! Associativity is inherited from [`Bind`].
//!
//! # Default `map`
//!
//! `Monad` supplies `map(x, f) == bind(x, |a| pure(f(a)))`. It shadows
//! `Applicative`'s `map` via `apply`, which breaks the `map`/`apply` cycle for
//! instances that only supply `pure` and `bind`:
//!
//! ```rust
//! use lawful::typeclass::{Functor, Monad};
//! use lawful::types::{Maybe, MaybeKind};
//!
//! let mapped = MaybeKind::map_via_bind(Maybe::Just(2), |x: i32| x + 1);
//! assert_eq!(mapped, MaybeKind::map(Maybe::Just(2), |x| x + 1));
//! ```

use super::applicative::{APPLICATIVE, Applicative};
use super::bind::{BIND, Bind};
use super::class::{Class, Derivation, Law};
use super::higher::Value;

/// Applicatives with dependent sequencing.
pub trait Monad: Applicative + Bind {
    /// The default `map`, expressed through `bind` and `pure`.
    fn map_via_bind<A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Self::Of<B> {
        Self::bind(fa, move |a| Self::pure(function(a)))
    }
}

impl<M: Applicative + Bind> Monad for M {}

/// Descriptor of the `Monad` class.
pub static MONAD: Class = Class {
    name: "Monad",
    superclasses: &[&APPLICATIVE, &BIND],
    minimal: &[],
    defaults: &[Derivation::new("map", &["bind", "pure"])],
    laws: &[
        Law::new("left_identity", "bind(pure(a), f) == f(a)"),
        Law::new("right_identity", "bind(m, pure) == m"),
        Law::new("map_consistency", "map(x, f) == bind(x, |a| pure(f(a)))"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::fixtures::VecKind;
    use crate::typeclass::Functor;
    use rstest::rstest;

    fn is_monad<M: Monad>() {}

    #[rstest]
    fn applicative_binds_are_monads() {
        is_monad::<VecKind>();
        is_monad::<crate::typeclass::IdentityKind>();
    }

    #[rstest]
    fn map_via_bind_agrees_with_map() {
        assert_eq!(
            VecKind::map_via_bind(vec![1, 2], |x: i32| x * 3),
            VecKind::map(vec![1, 2], |x| x * 3)
        );
    }

    #[rstest]
    fn left_identity_on_vectors() {
        let f = |x: i32| vec![x, x + 1];
        assert_eq!(VecKind::bind(VecKind::pure(4), f), f(4));
    }
}
