//! Type class traits and their descriptors.
//!
//! ## The hierarchy
//!
//! ```text
//! Eq ── Hashable
//! Semigroup ── Commutative
//!           └─ Monoid
//! Functor ── Apply ── Applicative ──┐
//!                 └── Bind ─────────┴─ Monad
//! Functor + Contravariant ── Profunctor ── Cartesian
//!                                       └─ Cocartesian
//! Functor + Foldable ── Traversable
//! PatternMatchable
//! ```
//!
//! ## Higher-kinded types emulation
//!
//! Rust has no `F<_>` generic parameter. Classes over type constructors are
//! implemented on zero-sized witness types ([`TypeConstructor`]) and their
//! operations are static functions: `MaybeKind::map(value, f)`. Classes over
//! plain types (`Eq`, `Semigroup`, `Monoid`) are ordinary traits on the type.
//!
//! ## Descriptors
//!
//! Every trait is paired with a static [`Class`] (`FUNCTOR`, `MONAD`, ...)
//! listing its minimal complete definitions, defaults and laws. [`CLASSES`]
//! enumerates them all.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Monoid, Semigroup, Sum};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().append(value.clone()), value);
//! assert_eq!(Sum::concat(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! ```
//!
//! ```rust
//! use lawful::typeclass::{Applicative, Apply};
//! use lawful::types::{Maybe, MaybeKind};
//!
//! let x: Maybe<i32> = MaybeKind::pure(42);
//! assert_eq!(x, Maybe::Just(42));
//! assert_eq!(MaybeKind::lift2(x, Maybe::Just(1), |a, b| a + b), Maybe::Just(43));
//! ```

mod applicative;
mod apply;
mod bind;
mod class;
mod contravariant;
mod eq;
mod foldable;
mod functor;
mod hashable;
mod higher;
mod identity;
mod monad;
mod monoid;
mod pattern;
mod profunctor;
mod semigroup;
mod traversable;
mod wrappers;

#[cfg(test)]
pub(crate) mod fixtures;

pub use applicative::{APPLICATIVE, Applicative, pure};
pub use apply::{APPLY, Apply, apply, lift2};
pub use bind::{BIND, Bind, bind, join};
pub use class::{Class, Derivation, Instance, Law, Resolution};
pub use contravariant::{CONTRAVARIANT, Contravariant};
pub use eq::{EQ, Eq};
pub use foldable::{
    FOLDABLE, Foldable, defaults, elem, fold, fold_map, foldl, foldr, length, null, sum,
};
pub use functor::{FUNCTOR, Functor, map, replace};
pub use hashable::{HASHABLE, Hashable};
pub use higher::{TypeConstructor, TypeConstructor2, Value};
pub use identity::{Identity, IdentityKind};
pub use monad::{MONAD, Monad};
pub use monoid::{MONOID, Monoid};
pub use pattern::{Handlers, PATTERN_MATCHABLE, PatternMatchable};
pub use profunctor::{CARTESIAN, COCARTESIAN, Cartesian, Cocartesian, PROFUNCTOR, Profunctor};
pub use semigroup::{COMMUTATIVE, Commutative, SEMIGROUP, Semigroup};
pub use traversable::{TRAVERSABLE, Traversable, sequence, traverse};
pub use wrappers::{All, Any, Endo, Sum};

pub(crate) use identity::INSTANCES;

/// `append` as a free function.
pub fn append<S: Semigroup>(x: S, y: S) -> S {
    x.append(y)
}

/// Every class descriptor, superclasses before subclasses.
pub static CLASSES: &[&Class] = &[
    &EQ,
    &HASHABLE,
    &SEMIGROUP,
    &COMMUTATIVE,
    &MONOID,
    &FUNCTOR,
    &CONTRAVARIANT,
    &APPLY,
    &APPLICATIVE,
    &BIND,
    &MONAD,
    &PROFUNCTOR,
    &CARTESIAN,
    &COCARTESIAN,
    &FOLDABLE,
    &TRAVERSABLE,
    &PATTERN_MATCHABLE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn superclasses_are_listed_first() {
        for (index, class) in CLASSES.iter().enumerate() {
            for parent in class.superclasses {
                let position = CLASSES.iter().position(|c| std::ptr::eq(*c, *parent));
                assert!(position.is_some_and(|p| p < index), "{} before {}", parent.name, class.name);
            }
        }
    }

    #[rstest]
    fn every_default_names_known_operations() {
        for class in CLASSES {
            let operations = class.operations();
            for default in class.defaults {
                for dependency in default.via {
                    assert!(
                        operations.contains(dependency),
                        "{}: {} via unknown {}",
                        class.name,
                        default.operation,
                        dependency
                    );
                }
            }
        }
    }

    #[rstest]
    fn free_append_delegates() {
        assert_eq!(append(Sum(1), Sum(2)), Sum(3));
    }
}
