//! Monoid atoms: newtypes giving a carrier a specific monoid.
//!
//! # Available Wrappers
//!
//! - [`Sum`]: integers under addition (identity: 0)
//! - [`All`]: booleans under conjunction (identity: `true`)
//! - [`Any`]: booleans under disjunction (identity: `false`)
//! - [`Endo`]: endofunctions under composition (identity: the identity function)
//!
//! Text under concatenation is `String` itself, see [`Semigroup`].
//!
//! `Sum` wraps on overflow, which keeps `append` total and associative.

use std::fmt;

use super::higher::Value;
use super::monoid::Monoid;
use super::semigroup::{Commutative, Semigroup};
use crate::function::Function;

// =============================================================================
// Sum Wrapper
// =============================================================================

/// Integers under addition.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).append(Sum(5)), Sum(8));
/// assert_eq!(Sum::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum(pub i64);

impl Sum {
    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for Sum {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Semigroup for Sum {
    fn append(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }
}

impl Commutative for Sum {}

impl Monoid for Sum {
    fn empty() -> Self {
        Self(0)
    }
}

// =============================================================================
// All / Any Wrappers
// =============================================================================

/// Booleans under conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct All(pub bool);

impl Semigroup for All {
    fn append(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Commutative for All {}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

/// Booleans under disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any(pub bool);

impl Semigroup for Any {
    fn append(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl Commutative for Any {}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

// =============================================================================
// Endo Wrapper
// =============================================================================

/// Endofunctions under composition.
///
/// `append(f, g)` runs `g` first, then `f`. Endofunctions have no decidable
/// equality; the law harness compares them on sampled inputs.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Endo, Semigroup};
///
/// let increment = Endo::new(|x: i32| x + 1);
/// let double = Endo::new(|x: i32| x * 2);
/// assert_eq!(increment.append(double).call(5), 11);
/// ```
pub struct Endo<A>(pub Function<A, A>);

impl<A: Value> Endo<A> {
    /// Wraps a closure.
    pub fn new(function: impl Fn(A) -> A + 'static) -> Self {
        Self(Function::new(function))
    }

    /// Runs the endofunction.
    pub fn call(&self, value: A) -> A {
        self.0.call(value)
    }
}

impl<A> Clone for Endo<A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A> fmt::Debug for Endo<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Endo").field(&self.0).finish()
    }
}

impl<A: Value> Semigroup for Endo<A> {
    fn append(self, other: Self) -> Self {
        Self(other.0.then(self.0))
    }
}

impl<A: Value> Monoid for Endo<A> {
    fn empty() -> Self {
        Self(Function::identity())
    }
}
