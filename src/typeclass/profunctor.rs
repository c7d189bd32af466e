//! Profunctor, Cartesian and Cocartesian type classes.
//!
//! A profunctor `P<A, B>` consumes `A` and produces `B`: it is contravariant
//! in its first parameter and covariant in its second. Plain functions are
//! the canonical example. Cartesian profunctors can additionally be lifted
//! through a product (a pair), Cocartesian ones through a sum ([`Either`]).
//! Profunctor optics are built from exactly these three capabilities.
//!
//! # Laws
//!
//! ```text
//! dimap(p, id, id) == p
//! dimap(p, f . g, h . i) == dimap(dimap(p, f, i), g, h)
//!
//! dimap(first(h), |a| (a, ()), |(b, _)| b) == h           -- Cartesian unit
//! dimap(first(first(h)), lassoc, rassoc) == first(h)      -- Cartesian associativity
//! ```
//!
//! The Cocartesian laws mirror the Cartesian ones over `Either`, with the
//! empty type [`Infallible`](std::convert::Infallible) standing in for `()`.
//!
//! [`Either`]: crate::control::Either

use super::class::{Class, Derivation, Law};
use super::contravariant::CONTRAVARIANT;
use super::functor::FUNCTOR;
use super::higher::{TypeConstructor2, Value};
use crate::control::Either;

/// Two-parameter constructors contravariant in the first parameter and
/// covariant in the second.
///
/// An instance supplies `dimap`, or both `map` and `contramap`.
pub trait Profunctor: TypeConstructor2 {
    /// Pre-composes `before` and post-composes `after`.
    fn dimap<A: Value, B: Value, C: Value, D: Value>(
        p: Self::Of<A, B>,
        before: impl Fn(C) -> A + 'static,
        after: impl Fn(B) -> D + 'static,
    ) -> Self::Of<C, D> {
        Self::map(Self::contramap(p, before), after)
    }

    /// Post-composes `after` on the output side.
    fn map<A: Value, B: Value, D: Value>(
        p: Self::Of<A, B>,
        after: impl Fn(B) -> D + 'static,
    ) -> Self::Of<A, D> {
        Self::dimap(p, |a: A| a, after)
    }

    /// Pre-composes `before` on the input side.
    fn contramap<A: Value, B: Value, C: Value>(
        p: Self::Of<A, B>,
        before: impl Fn(C) -> A + 'static,
    ) -> Self::Of<C, B> {
        Self::dimap(p, before, |b: B| b)
    }
}

/// Profunctors that can be lifted through a pair.
///
/// `first` and `second` are defined from each other by swapping the pair.
pub trait Cartesian: Profunctor {
    /// Runs `p` on the first component, passing the second through.
    fn first<A: Value, B: Value, C: Value>(p: Self::Of<A, B>) -> Self::Of<(A, C), (B, C)> {
        Self::dimap(Self::second::<A, B, C>(p), swap, swap)
    }

    /// Runs `p` on the second component, passing the first through.
    fn second<A: Value, B: Value, C: Value>(p: Self::Of<A, B>) -> Self::Of<(C, A), (C, B)> {
        Self::dimap(Self::first::<A, B, C>(p), swap, swap)
    }
}

/// Profunctors that can be lifted through a sum.
///
/// `left` and `right` are defined from each other by flipping the `Either`
/// on both sides of the lifted profunctor.
pub trait Cocartesian: Profunctor {
    /// Runs `p` on `Left` values, passing `Right` values through.
    fn left<A: Value, B: Value, C: Value>(
        p: Self::Of<A, B>,
    ) -> Self::Of<Either<A, C>, Either<B, C>> {
        Self::dimap(Self::right::<A, B, C>(p), Either::swap, Either::swap)
    }

    /// Runs `p` on `Right` values, passing `Left` values through.
    fn right<A: Value, B: Value, C: Value>(
        p: Self::Of<A, B>,
    ) -> Self::Of<Either<C, A>, Either<C, B>> {
        Self::dimap(Self::left::<A, B, C>(p), Either::swap, Either::swap)
    }
}

fn swap<A, B>((a, b): (A, B)) -> (B, A) {
    (b, a)
}

/// Descriptor of the `Profunctor` class.
pub static PROFUNCTOR: Class = Class {
    name: "Profunctor",
    superclasses: &[&FUNCTOR, &CONTRAVARIANT],
    minimal: &[&["dimap"], &["map", "contramap"]],
    defaults: &[
        Derivation::new("dimap", &["map", "contramap"]),
        Derivation::new("map", &["dimap"]),
        Derivation::new("contramap", &["dimap"]),
    ],
    laws: &[
        Law::new("identity", "dimap(p, id, id) == p"),
        Law::new(
            "composition",
            "dimap(p, f . g, h . i) == dimap(dimap(p, f, i), g, h)",
        ),
    ],
};

/// Descriptor of the `Cartesian` class.
pub static CARTESIAN: Class = Class {
    name: "Cartesian",
    superclasses: &[&PROFUNCTOR],
    minimal: &[&["first"], &["second"]],
    defaults: &[
        Derivation::new("first", &["second", "dimap"]),
        Derivation::new("second", &["first", "dimap"]),
    ],
    laws: &[
        Law::new("unit", "dimap(first(h), |a| (a, ()), |(b, _)| b) == h"),
        Law::new("associativity", "dimap(first(first(h)), lassoc, rassoc) == first(h)"),
    ],
};

/// Descriptor of the `Cocartesian` class.
pub static COCARTESIAN: Class = Class {
    name: "Cocartesian",
    superclasses: &[&PROFUNCTOR],
    minimal: &[&["left"], &["right"]],
    defaults: &[
        Derivation::new("left", &["right", "dimap"]),
        Derivation::new("right", &["left", "dimap"]),
    ],
    laws: &[
        Law::new("unit", "dimap(left(h), Left, |e| e.fold(id, absurd)) == h"),
        Law::new("associativity", "dimap(left(left(h)), lassoc, rassoc) == left(h)"),
    ],
};
