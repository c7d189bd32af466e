//! Eq type class - lawful equality.
//!
//! # Laws
//!
//! ```text
//! eq(x, x)                                   -- reflexivity
//! eq(x, y) => eq(y, x)                       -- symmetry
//! eq(x, y) && eq(y, z) => eq(x, z)           -- transitivity
//! eq(x, y) => eq(f(x), f(y))                 -- substitutivity
//! neq(x, y) == !eq(x, y)                     -- negation
//! ```
//!
//! `eq` and `neq` are defined in terms of each other, so an instance supplies
//! either. The trait shares its name with [`std::cmp::Eq`]; call the methods
//! through the trait path (`Eq::eq(&x, &y)`) where both are in scope.
//!
//! Functions, `Endo` and lenses have no decidable equality and are not `Eq`.
//! The law harness compares them with test equality instead.

use super::class::{Class, Derivation, Law};
use super::wrappers::{All, Any, Sum};

/// Types with a lawful equality.
pub trait Eq {
    /// Whether two values are equal.
    fn eq(&self, other: &Self) -> bool {
        !self.neq(other)
    }

    /// Whether two values differ.
    fn neq(&self, other: &Self) -> bool {
        !self.eq(other)
    }
}

macro_rules! structural_eq {
    ($($type:ty),* $(,)?) => {
        $(
            impl Eq for $type {
                #[inline]
                fn eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

structural_eq!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String, Sum,
    All, Any,
);

impl Eq for str {
    fn eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<A: Eq, B: Eq> Eq for (A, B) {
    fn eq(&self, other: &Self) -> bool {
        Eq::eq(&self.0, &other.0) && Eq::eq(&self.1, &other.1)
    }
}

impl<A: Eq> Eq for Vec<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(x, y)| Eq::eq(x, y))
    }
}

impl<A: Eq> Eq for Option<A> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(x), Some(y)) => Eq::eq(x, y),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: Eq + ?Sized> Eq for Box<A> {
    fn eq(&self, other: &Self) -> bool {
        Eq::eq(&**self, &**other)
    }
}

/// Descriptor of the `Eq` class.
pub static EQ: Class = Class {
    name: "Eq",
    superclasses: &[],
    minimal: &[&["eq"], &["neq"]],
    defaults: &[Derivation::new("eq", &["neq"]), Derivation::new("neq", &["eq"])],
    laws: &[
        Law::new("reflexivity", "eq(x, x)"),
        Law::new("symmetry", "eq(x, y) => eq(y, x)"),
        Law::new("transitivity", "eq(x, y) && eq(y, z) => eq(x, z)"),
        Law::new("substitutivity", "eq(x, y) => eq(f(x), f(y))"),
        Law::new("negation", "neq(x, y) == !eq(x, y)"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct Parity(u8);

    impl Eq for Parity {
        fn neq(&self, other: &Self) -> bool {
            self.0 % 2 != other.0 % 2
        }
    }

    #[rstest]
    fn eq_is_derived_from_neq() {
        assert!(Eq::eq(&Parity(1), &Parity(3)));
        assert!(!Eq::eq(&Parity(1), &Parity(2)));
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    fn structural_eq_matches_partial_eq(#[case] x: i32, #[case] y: i32, #[case] expected: bool) {
        assert_eq!(Eq::eq(&x, &y), expected);
        assert_eq!(Eq::neq(&x, &y), !expected);
    }

    #[rstest]
    fn vectors_compare_elementwise() {
        assert!(Eq::eq(&vec![1, 2], &vec![1, 2]));
        assert!(!Eq::eq(&vec![1, 2], &vec![1]));
    }
}
