//! Error type shared by the class kernel, the instance catalog and the
//! function machinery.
//!
//! The algebraic layer is total: `map`, `apply`, `bind`, `append` and friends
//! never fail on lawful input. Errors only arise at the edges where a value is
//! assembled dynamically:
//!
//! - an instance declaration that does not cover a minimal complete definition,
//! - a pattern match that is missing a handler,
//! - currying a callable with no parameters, or over-applying a curried
//!   function whose result cannot take more arguments.

/// Errors raised by the kernel and the dynamic function layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operation in a minimal complete definition is neither supplied by
    /// the instance nor derivable from what it supplies.
    #[error("`{operation}` is not implemented for `{type_name}`")]
    NotImplemented {
        /// The operation that could not be resolved.
        operation: &'static str,
        /// The data type whose instance is incomplete.
        type_name: &'static str,
    },

    /// A `match` was given no handler for one of the constructors.
    #[error("no handler supplied for constructor `{constructor}`")]
    MissingHandler {
        /// The constructor without a handler.
        constructor: &'static str,
    },

    /// Only callables taking at least one argument can be curried.
    #[error("cannot curry a callable of arity {arity}")]
    InvalidArity {
        /// The arity that was rejected.
        arity: usize,
    },

    /// A curried function was over-applied but its result is not callable.
    #[error("result is not callable but {leftover} argument(s) remain")]
    NotCallable {
        /// Number of arguments that could not be applied.
        leftover: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Error::NotImplemented { operation: "map", type_name: "Maybe" },
        "`map` is not implemented for `Maybe`"
    )]
    #[case(
        Error::MissingHandler { constructor: "Nothing" },
        "no handler supplied for constructor `Nothing`"
    )]
    #[case(Error::InvalidArity { arity: 0 }, "cannot curry a callable of arity 0")]
    #[case(
        Error::NotCallable { leftover: 2 },
        "result is not callable but 2 argument(s) remain"
    )]
    fn error_display(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
