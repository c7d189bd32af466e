//! PatternMatchable type class - uniform elimination of sum types.
//!
//! Rust's own `match` is the everyday way to take a sum type apart. This class
//! adds a *dynamic* elimination form: handlers are registered per constructor
//! name and the value dispatches on its tag. A match must be total; a missing
//! handler is reported as [`Error::MissingHandler`] even when the value at hand
//! would not need it.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Handlers, PatternMatchable};
//! use lawful::types::Maybe;
//!
//! let describe = |value: Maybe<i32>| {
//!     value.match_with(
//!         Handlers::new()
//!             .on("Nothing", |_| String::from("nothing"))
//!             .on("Just", |just: Maybe<i32>| format!("just {}", just.unwrap_or(0))),
//!     )
//! };
//! assert_eq!(describe(Maybe::Just(3)).unwrap(), "just 3");
//! assert_eq!(describe(Maybe::Nothing).unwrap(), "nothing");
//! ```

use std::fmt;

use super::class::Class;
use crate::error::{Error, Result};

/// Sum types with a finite set of named constructors.
pub trait PatternMatchable: Sized {
    /// Names of every constructor, in declaration order.
    const CONSTRUCTORS: &'static [&'static str];

    /// The constructor this value was built with.
    fn constructor(&self) -> &'static str;

    /// Dispatches to the handler registered for this value's constructor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingHandler`] naming the first constructor without
    /// a handler.
    fn match_with<R>(self, handlers: Handlers<'_, Self, R>) -> Result<R> {
        handlers.dispatch(self)
    }
}

/// One handler per constructor, keyed by constructor name.
pub struct Handlers<'a, T, R> {
    table: Vec<(&'static str, Box<dyn FnOnce(T) -> R + 'a>)>,
}

impl<'a, T: PatternMatchable, R> Handlers<'a, T, R> {
    /// An empty handler table.
    pub fn new() -> Self {
        Self { table: Vec::new() }
    }

    /// Registers the handler for `constructor`, replacing any previous one.
    #[must_use]
    pub fn on(mut self, constructor: &'static str, handler: impl FnOnce(T) -> R + 'a) -> Self {
        self.table.retain(|(name, _)| *name != constructor);
        self.table.push((constructor, Box::new(handler)));
        self
    }

    fn dispatch(self, value: T) -> Result<R> {
        if let Some(constructor) = T::CONSTRUCTORS
            .iter()
            .copied()
            .find(|constructor| !self.table.iter().any(|(name, _)| *name == *constructor))
        {
            return Err(Error::MissingHandler { constructor });
        }

        let tag = value.constructor();
        let handler = self
            .table
            .into_iter()
            .find_map(|(name, handler)| (name == tag).then_some(handler))
            .ok_or(Error::MissingHandler { constructor: tag })?;
        Ok(handler(value))
    }
}

impl<T: PatternMatchable, R> Default for Handlers<'_, T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> fmt::Debug for Handlers<'_, T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.table.iter().map(|(name, _)| *name).collect();
        formatter.debug_struct("Handlers").field("constructors", &names).finish()
    }
}

/// Descriptor of the `PatternMatchable` class.
pub static PATTERN_MATCHABLE: Class = Class {
    name: "PatternMatchable",
    superclasses: &[],
    minimal: &[&["match"]],
    defaults: &[],
    laws: &[],
};
