//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! append(append(x, y), z) == append(x, append(y, z))
//! ```
//!
//! ## Commutativity (for [`Commutative`] only)
//!
//! ```text
//! append(x, y) == append(y, x)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! assert_eq!(hello.append(String::from("World!")), "Hello, World!");
//! ```

use super::class::{Class, Law};

/// A type with an associative binary operation.
pub trait Semigroup: Sized {
    /// Combines two values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum(1).append(Sum(2)), Sum(3));
    /// ```
    #[must_use]
    fn append(self, other: Self) -> Self;

    /// Combines a value with itself `count` times, or returns `None` for a
    /// count of zero since a semigroup has no identity.
    #[must_use]
    fn append_n(self, count: usize) -> Option<Self>
    where
        Self: Clone,
    {
        if count == 0 {
            return None;
        }
        Some((1..count).fold(self.clone(), |accumulator, _| {
            accumulator.append(self.clone())
        }))
    }
}

/// A semigroup whose operation is commutative.
///
/// This is a marker: the claim is checked by the commutativity law.
pub trait Commutative: Semigroup {}

impl Semigroup for String {
    fn append(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Semigroup for () {
    fn append(self, (): Self) -> Self {}
}

impl Commutative for () {}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn append(self, other: Self) -> Self {
        (self.0.append(other.0), self.1.append(other.1))
    }
}

impl<A: Commutative, B: Commutative> Commutative for (A, B) {}

/// Descriptor of the `Semigroup` class.
pub static SEMIGROUP: Class = Class {
    name: "Semigroup",
    superclasses: &[],
    minimal: &[&["append"]],
    defaults: &[],
    laws: &[Law::new(
        "associativity",
        "append(append(x, y), z) == append(x, append(y, z))",
    )],
};

/// Descriptor of the `Commutative` class.
pub static COMMUTATIVE: Class = Class {
    name: "Commutative",
    superclasses: &[&SEMIGROUP],
    minimal: &[],
    defaults: &[],
    laws: &[Law::new("commutativity", "append(x, y) == append(y, x)")],
};
