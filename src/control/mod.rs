//! Control structures.
//!
//! - [`Either`]: a value of one of two types, with right-biased class
//!   instances on [`EitherKind`]. It is also the sum type that Cocartesian
//!   profunctors and prisms are lifted through.

mod either;

pub use either::{Either, EitherKind, either};

pub(crate) use either::INSTANCES;
