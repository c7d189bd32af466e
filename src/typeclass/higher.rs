//! Higher-kinded type emulation through witness types.
//!
//! Rust has no `F<_>` generic parameter. Every type constructor is therefore
//! reified as a zero-sized *witness* (for example [`MaybeKind`]) that
//! implements [`TypeConstructor`]; applying the witness to an element type is
//! the generic associated type `Of<A>`. Class operations are ordinary static
//! functions on the witness, so generic code takes the witness as a type
//! parameter. This is dictionary passing: the same convention makes
//! `fold_map::<M>` take its monoid and `traverse::<G>` take its applicative
//! explicitly.
//!
//! Two-parameter constructors such as functions and lenses are profunctors and
//! use [`TypeConstructor2`].
//!
//! # Example
//!
//! ```rust
//! use lawful::typeclass::{TypeConstructor, Value};
//! use lawful::types::{Maybe, MaybeKind};
//!
//! fn nothing<F: TypeConstructor, A: Value>() -> Option<F::Of<A>> {
//!     None
//! }
//!
//! let value: Option<Maybe<i32>> = nothing::<MaybeKind, i32>();
//! assert!(value.is_none());
//! ```
//!
//! [`MaybeKind`]: crate::types::MaybeKind

use std::fmt::Debug;

/// Anything that can live inside a type constructor.
///
/// Values are immutable once constructed, so cloning is how a value is shared
/// between two branches of a computation. `Debug` is required because law
/// counter-examples are rendered from it.
pub trait Value: Clone + Debug + 'static {}

impl<T: Clone + Debug + 'static> Value for T {}

/// A witness for a one-parameter type constructor.
///
/// # Laws
///
/// A witness carries no data. Every implementation in this crate is a
/// zero-sized `Copy` type.
pub trait TypeConstructor: 'static {
    /// The constructor applied to `A`.
    type Of<A: Value>: Value;
}

/// A witness for a two-parameter type constructor, contravariant in the first
/// parameter and covariant in the second when it is a profunctor.
pub trait TypeConstructor2: 'static {
    /// The constructor applied to `A` and `B`.
    type Of<A: Value, B: Value>: Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, Copy)]
    struct VecKind;

    impl TypeConstructor for VecKind {
        type Of<A: Value> = Vec<A>;
    }

    #[rstest]
    fn witness_applies_element_type() {
        fn build<F: TypeConstructor>(value: F::Of<i32>) -> F::Of<i32> {
            value
        }

        assert_eq!(build::<VecKind>(vec![1, 2]), vec![1, 2]);
    }

    #[rstest]
    fn value_is_implemented_for_plain_data() {
        fn assert_value<T: Value>() {}
        assert_value::<i32>();
        assert_value::<String>();
        assert_value::<Vec<(bool, char)>>();
    }
}
