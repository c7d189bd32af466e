//! Dynamically-typed curried functions with arity and signature metadata.
//!
//! A [`Curried`] wraps a callable of arity `n` together with the arguments
//! accumulated so far (`k < n` of them). Calling it with `m` more arguments:
//!
//! - `k + m < n`: returns a new `Curried` holding the extended arguments;
//! - `k + m == n`: runs the callable on all `n` arguments;
//! - `k + m > n`: runs the callable on the first `n - k`, then applies the
//!   result (which must itself be a function) to the remaining arguments.
//!
//! Arguments and results are [`Dynamic`] values so that functions of any arity
//! share one type. Arity and parameter names come from an explicit
//! [`Signature`] attached at construction.
//!
//! # Examples
//!
//! ```rust
//! use lawful::function::{Curried, Dynamic, Signature};
//!
//! let concat = Curried::new(Signature::new("concat", ["a", "b", "c"]), |arguments| {
//!     let text: String = arguments.iter().filter_map(Dynamic::as_text).collect();
//!     Ok(Dynamic::Text(text))
//! })?;
//!
//! let result = concat
//!     .call([Dynamic::from("a")])?
//!     .call([Dynamic::from("b")])?
//!     .call([Dynamic::from("c")])?;
//! assert_eq!(result, Dynamic::from("abc"));
//! # Ok::<(), lawful::Error>(())
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::{Error, Result};

/// A dynamically-typed value passed to and returned from [`Curried`].
#[derive(Debug, Clone, PartialEq)]
pub enum Dynamic {
    /// The unit value.
    Unit,
    /// A boolean.
    Boolean(bool),
    /// An integer.
    Integer(i64),
    /// A string.
    Text(String),
    /// A list of values.
    List(Vec<Dynamic>),
    /// A curried function.
    Function(Box<Curried>),
}

impl Dynamic {
    /// The text payload, if this is `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The integer payload, if this is `Integer`.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Applies this value to `arguments` if it is a function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotCallable`] when the value is not a function and
    /// arguments remain, and propagates errors from the call itself.
    pub fn call(self, arguments: impl IntoIterator<Item = Self>) -> Result<Self> {
        match self {
            Self::Function(function) => function.call(arguments),
            other => {
                let leftover = arguments.into_iter().count();
                if leftover == 0 {
                    Ok(other)
                } else {
                    Err(Error::NotCallable { leftover })
                }
            }
        }
    }
}

impl From<&str> for Dynamic {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Dynamic {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Dynamic {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Dynamic {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Curried> for Dynamic {
    fn from(value: Curried) -> Self {
        Self::Function(Box::new(value))
    }
}

/// Metadata describing the callable behind a [`Curried`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Short name.
    pub name: String,
    /// Fully qualified name.
    pub qualified_name: String,
    /// Module the callable is defined in.
    pub module: String,
    /// Documentation string.
    pub doc: Option<String>,
    /// Positional parameter names; the arity is their count.
    pub parameters: Vec<String>,
}

impl Signature {
    /// A signature with the given name and parameters, placed in this crate's
    /// root module.
    pub fn new<I, S>(name: &str, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_owned(),
            qualified_name: name.to_owned(),
            module: module_path!().to_owned(),
            doc: None,
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the module, prefixing the qualified name with it.
    #[must_use]
    pub fn in_module(mut self, module: &str) -> Self {
        self.qualified_name = format!("{module}::{}", self.name);
        self.module = module.to_owned();
        self
    }

    /// Attaches a documentation string.
    #[must_use]
    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = Some(doc.to_owned());
        self
    }

    /// Number of positional parameters.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

type Body = Rc<dyn Fn(&[Dynamic]) -> Result<Dynamic>>;

/// A curried function of fixed arity over [`Dynamic`] values.
#[derive(Clone)]
pub struct Curried {
    signature: Rc<Signature>,
    body: Body,
    arguments: SmallVec<[Dynamic; 4]>,
}

/// Outcome of applying arguments to a [`Curried`] without forcing a result.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// Not enough arguments yet.
    Partial(Curried),
    /// The callable ran.
    Complete(Dynamic),
}

impl Applied {
    /// Collapses the outcome into a single value.
    pub fn into_dynamic(self) -> Dynamic {
        match self {
            Self::Partial(function) => Dynamic::Function(Box::new(function)),
            Self::Complete(value) => value,
        }
    }
}

impl Curried {
    /// Curries `body` under `signature`.
    ///
    /// `body` always receives exactly `signature.arity()` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArity`] when the signature has no parameters.
    pub fn new(
        signature: Signature,
        body: impl Fn(&[Dynamic]) -> Result<Dynamic> + 'static,
    ) -> Result<Self> {
        if signature.arity() == 0 {
            return Err(Error::InvalidArity { arity: 0 });
        }
        Ok(Self {
            signature: Rc::new(signature),
            body: Rc::new(body),
            arguments: SmallVec::new(),
        })
    }

    /// Wraps an existing curried function as a fresh one whose arity is the
    /// number of arguments `function` still expects.
    pub fn wrap(function: Self) -> Self {
        let parameters = function.signature.parameters[function.arguments.len()..].to_vec();
        let signature = Signature {
            parameters,
            ..(*function.signature).clone()
        };
        let inner = function;
        Self {
            signature: Rc::new(signature),
            body: Rc::new(move |arguments: &[Dynamic]| {
                inner.call(arguments.iter().cloned())
            }),
            arguments: SmallVec::new(),
        }
    }

    /// The full signature of the underlying callable.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Arity of the underlying callable.
    pub fn arity(&self) -> usize {
        self.signature.arity()
    }

    /// Number of arguments still expected.
    pub fn remaining(&self) -> usize {
        self.arity() - self.arguments.len()
    }

    /// Arguments accumulated so far.
    pub fn arguments(&self) -> &[Dynamic] {
        &self.arguments
    }

    /// Short name of the underlying callable.
    pub fn name(&self) -> &str {
        &self.signature.name
    }

    /// Qualified name of the underlying callable.
    pub fn qualified_name(&self) -> &str {
        &self.signature.qualified_name
    }

    /// Module of the underlying callable.
    pub fn module(&self) -> &str {
        &self.signature.module
    }

    /// Documentation of the underlying callable.
    pub fn doc(&self) -> Option<&str> {
        self.signature.doc.as_deref()
    }

    /// Applies `arguments`, reporting whether the callable ran.
    ///
    /// # Errors
    ///
    /// Propagates errors from the callable, and returns
    /// [`Error::NotCallable`] when over-applying a callable whose result is
    /// not a function.
    pub fn apply(&self, arguments: impl IntoIterator<Item = Dynamic>) -> Result<Applied> {
        let mut collected = self.arguments.clone();
        let mut incoming = arguments.into_iter();
        let arity = self.arity();

        collected.extend(incoming.by_ref().take(arity - self.arguments.len()));
        if collected.len() < arity {
            tracing::trace!(name = %self.signature.name, applied = collected.len(), arity, "partial application");
            return Ok(Applied::Partial(Self {
                signature: Rc::clone(&self.signature),
                body: Rc::clone(&self.body),
                arguments: collected,
            }));
        }

        let result = (self.body)(&collected)?;
        let leftover: Vec<Dynamic> = incoming.collect();
        if leftover.is_empty() {
            Ok(Applied::Complete(result))
        } else {
            result.call(leftover).map(Applied::Complete)
        }
    }

    /// Applies `arguments` and returns either the result or the partially
    /// applied function.
    ///
    /// # Errors
    ///
    /// See [`Curried::apply`].
    pub fn call(&self, arguments: impl IntoIterator<Item = Dynamic>) -> Result<Dynamic> {
        self.apply(arguments).map(Applied::into_dynamic)
    }

    /// Binds `receiver` as the first argument, the way a method is bound to
    /// the instance it is accessed through.
    ///
    /// # Errors
    ///
    /// See [`Curried::apply`].
    pub fn bind_receiver(&self, receiver: Dynamic) -> Result<Dynamic> {
        self.call([receiver])
    }
}

impl PartialEq for Curried {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body) && self.arguments == other.arguments
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("name", &self.signature.qualified_name)
            .field("arity", &self.arity())
            .field("arguments", &self.arguments)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn concat3() -> Curried {
        Curried::new(Signature::new("concat3", ["a", "b", "c"]), |arguments| {
            Ok(Dynamic::Text(
                arguments.iter().filter_map(Dynamic::as_text).collect(),
            ))
        })
        .expect("arity is three")
    }

    fn adder() -> Curried {
        Curried::new(Signature::new("add", ["x"]), |arguments| {
            let x = arguments[0].as_integer().unwrap_or_default();
            let add_x = Curried::new(Signature::new("add_x", ["y"]), move |rest| {
                Ok(Dynamic::Integer(x + rest[0].as_integer().unwrap_or_default()))
            })?;
            Ok(Dynamic::from(add_x))
        })
        .expect("arity is one")
    }

    #[rstest]
    fn one_argument_at_a_time(concat3: Curried) {
        let result = concat3
            .call([Dynamic::from("a")])
            .and_then(|f| f.call([Dynamic::from("b")]))
            .and_then(|f| f.call([Dynamic::from("c")]));
        assert_eq!(result, Ok(Dynamic::from("abc")));
    }

    #[rstest]
    fn all_arguments_at_once(concat3: Curried) {
        let result = concat3.call(["x", "y", "z"].map(Dynamic::from));
        assert_eq!(result, Ok(Dynamic::from("xyz")));
    }

    #[rstest]
    fn wrapping_a_partial_application(concat3: Curried) {
        let partial = match concat3.apply([Dynamic::from("a")]) {
            Ok(Applied::Partial(function)) => function,
            other => panic!("expected a partial application, got {other:?}"),
        };
        let rewrapped = Curried::wrap(partial);
        assert_eq!(rewrapped.arity(), 2);
        assert_eq!(rewrapped.signature().parameters, vec!["b", "c"]);

        let result = rewrapped
            .call([Dynamic::from("b")])
            .and_then(|f| f.call([Dynamic::from("c")]));
        assert_eq!(result, Ok(Dynamic::from("abc")));
    }

    #[rstest]
    fn over_application_feeds_the_result() {
        let result = adder().call([Dynamic::Integer(1), Dynamic::Integer(2)]);
        assert_eq!(result, Ok(Dynamic::Integer(3)));
    }

    #[rstest]
    fn over_application_of_a_non_function_fails(concat3: Curried) {
        let result = concat3.call(["a", "b", "c", "d"].map(Dynamic::from));
        assert_eq!(result, Err(Error::NotCallable { leftover: 1 }));
    }

    #[rstest]
    fn zero_arity_is_rejected() {
        let result = Curried::new(Signature::new("nothing", Vec::<String>::new()), |_| {
            Ok(Dynamic::Unit)
        });
        assert_eq!(result.err(), Some(Error::InvalidArity { arity: 0 }));
    }

    #[rstest]
    fn metadata_is_preserved(concat3: Curried) {
        let documented = Curried::new(
            Signature::new("concat3", ["a", "b", "c"])
                .in_module("strings")
                .with_doc("Concatenates three strings."),
            |_| Ok(Dynamic::Unit),
        )
        .expect("arity is three");
        assert_eq!(documented.qualified_name(), "strings::concat3");
        assert_eq!(documented.module(), "strings");
        assert_eq!(documented.doc(), Some("Concatenates three strings."));

        let partial = concat3.call([Dynamic::from("a")]);
        match partial {
            Ok(Dynamic::Function(function)) => {
                assert_eq!(function.name(), "concat3");
                assert_eq!(function.remaining(), 2);
                assert_eq!(function.arguments(), &[Dynamic::from("a")]);
            }
            other => panic!("expected a function, got {other:?}"),
        }
    }

    #[rstest]
    fn bind_receiver_prepends_the_instance(concat3: Curried) {
        let bound = concat3.bind_receiver(Dynamic::from("self."));
        let result = bound.and_then(|f| f.call(["m", "()"].map(Dynamic::from)));
        assert_eq!(result, Ok(Dynamic::from("self.m()")));
    }
}
