//! # lawful
//!
//! Lawful algebraic abstractions for Rust.
//!
//! ## Overview
//!
//! - **Type classes**: Eq, Semigroup, Monoid, Functor, Apply, Applicative,
//!   Bind, Monad, Foldable, Traversable, Contravariant and the Profunctor
//!   family, each paired with a descriptor listing its minimal complete
//!   definitions, defaults and laws.
//! - **Instance catalog**: Maybe, Either, List, `LinkedList`, Dictionary,
//!   Identity, Function, composition and monad transformers.
//! - **Functions**: a shared `Function` type, dynamically curried functions
//!   and the `curry!` macro.
//! - **Optics**: adapters, lenses and prisms as profunctor-polymorphic
//!   values, with derive macros for records and sum types.
//! - **Testing**: a proptest harness checking every law of every class
//!   against an instance.
//!
//! ## Feature Flags
//!
//! - `typeclass`: the class traits, [`Function`](function::Function) and
//!   [`Either`](control::Either)
//! - `types`: the instance catalog
//! - `optics`: profunctor optics
//! - `derive`: `#[derive(Lenses, Prisms, PatternMatchable)]`
//! - `testing`: the law harness
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use lawful::prelude::*;
//!
//! let halves = ListKind::traverse::<MaybeKind, i32, i32>(List::from(vec![4, 8]), |x| {
//!     if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing }
//! });
//! assert_eq!(halves, Maybe::Just(List::from(vec![2, 4])));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the class traits, the data types and the optics.
///
/// # Usage
///
/// ```rust
/// use lawful::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "typeclass")]
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::function::{Function, FunctionArrow, FunctionKind, OpKind};

    #[cfg(feature = "types")]
    pub use crate::types::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use crate::{Lenses, PatternMatchable, Prisms};
}

pub mod error;

pub use error::{Error, Result};

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod function;

#[cfg(feature = "types")]
pub mod types;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "testing")]
pub mod testing;

#[cfg(feature = "derive")]
pub use lawful_derive::{Lenses, PatternMatchable, Prisms};

// Witnesses carry no data.
#[cfg(feature = "types")]
static_assertions::assert_eq_size!(types::MaybeKind, ());
#[cfg(feature = "types")]
static_assertions::assert_eq_size!(types::ListKind, ());
#[cfg(feature = "types")]
static_assertions::assert_eq_size!(types::DictionaryKind<String>, ());
#[cfg(feature = "typeclass")]
static_assertions::assert_eq_size!(function::FunctionArrow, ());
#[cfg(feature = "typeclass")]
static_assertions::assert_impl_all!(typeclass::IdentityKind: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn errors_render_their_context() {
        let error = Error::MissingHandler {
            constructor: "Nothing",
        };
        assert_eq!(error.to_string(), "no handler supplied for constructor `Nothing`");
    }
}
