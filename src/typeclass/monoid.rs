//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! append(empty(), x) == x        -- left identity
//! append(x, empty()) == x        -- right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Monoid, Semigroup};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().append(value.clone()), value);
//! ```

use super::class::{Class, Derivation, Law};
use super::semigroup::{SEMIGROUP, Semigroup};

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element of [`Semigroup::append`].
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::concat([Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// ```
    fn concat<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .fold(Self::empty(), |accumulator, value| accumulator.append(value))
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

/// Descriptor of the `Monoid` class.
pub static MONOID: Class = Class {
    name: "Monoid",
    superclasses: &[&SEMIGROUP],
    minimal: &[&["empty"]],
    defaults: &[Derivation::new("concat", &["empty", "append"])],
    laws: &[
        Law::new("left_identity", "append(empty(), x) == x"),
        Law::new("right_identity", "append(x, empty()) == x"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn concat_of_nothing_is_empty() {
        assert_eq!(String::concat(Vec::new()), "");
    }

    #[rstest]
    fn concat_joins_in_order() {
        let words = vec![String::from("a"), String::from("b"), String::from("c")];
        assert_eq!(String::concat(words), "abc");
    }
}
