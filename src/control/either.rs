//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. Its class instances live on the
//! witness [`EitherKind<L>`], which fixes the left type and is right-biased:
//! `map`, `apply` and `bind` act on `Right` values and pass any `Left` through
//! untouched.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::{Either, EitherKind};
//! use lawful::typeclass::Bind;
//!
//! let parse = |text: &str| -> Either<String, i32> {
//!     text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
//! };
//!
//! let halved = EitherKind::bind(parse("42"), |n: i32| Either::Right(n / 2));
//! assert_eq!(halved, Either::Right(21));
//!
//! let failed = EitherKind::bind(parse("x"), |n: i32| Either::Right(n / 2));
//! assert_eq!(failed, Either::Left(String::from("not a number: x")));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::function::Function;
use crate::typeclass::{
    Applicative, Apply, Bind, EQ, Eq, FOLDABLE, Foldable, Functor, Instance, MONAD,
    PATTERN_MATCHABLE, PatternMatchable, TRAVERSABLE, Traversable, TypeConstructor, Value,
};

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant; a short-circuiting failure for the monad.
    Left(L),
    /// The right variant; the value the monad operates on.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// The left value, or `default` for a `Right`.
    #[inline]
    pub fn from_left(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    /// The right value, or `default` for a `Left`.
    #[inline]
    pub fn from_right(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Transforms the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::Left("oops");
    /// assert_eq!(failure.map_left(str::len), Either::Left(4));
    /// ```
    pub fn map_left<T>(self, function: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right value.
    pub fn map_right<T>(self, function: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms whichever value is present.
    pub fn bimap<T, U>(
        self,
        left_function: impl FnOnce(L) -> T,
        right_function: impl FnOnce(R) -> U,
    ) -> Either<T, U> {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the `Either` by handling both cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right(String::from("hello"));
    /// let described = right.fold(|n| format!("number {n}"), |s| format!("text {s}"));
    /// assert_eq!(described, "text hello");
    /// ```
    pub fn fold<T>(
        self,
        left_function: impl FnOnce(L) -> T,
        right_function: impl FnOnce(R) -> T,
    ) -> T {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<A> Either<A, A> {
    /// The value, whichever side holds it.
    #[inline]
    pub fn into_inner(self) -> A {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

/// Eliminates an `Either` with one function per side.
///
/// ```rust
/// use lawful::control::{either, Either};
///
/// let value: Either<i32, &str> = Either::Left(3);
/// assert_eq!(either(|n: i32| n * 2, |s: &str| s.len() as i32, value), 6);
/// ```
pub fn either<L, R, T>(
    left_function: impl FnOnce(L) -> T,
    right_function: impl FnOnce(R) -> T,
    value: Either<L, R>,
) -> T {
    value.fold(left_function, right_function)
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)` and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)` and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L: Eq, R: Eq> Eq for Either<L, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Left(x), Self::Left(y)) => Eq::eq(x, y),
            (Self::Right(x), Self::Right(y)) => Eq::eq(x, y),
            _ => false,
        }
    }
}

impl<L, R> PatternMatchable for Either<L, R> {
    const CONSTRUCTORS: &'static [&'static str] = &["Left", "Right"];

    fn constructor(&self) -> &'static str {
        match self {
            Self::Left(_) => "Left",
            Self::Right(_) => "Right",
        }
    }
}

// =============================================================================
// Right-biased instances: EitherKind<L>
// =============================================================================

/// Witness for `Either<L, _>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EitherKind<L>(PhantomData<fn() -> L>);

impl<L: Value> TypeConstructor for EitherKind<L> {
    type Of<A: Value> = Either<L, A>;
}

impl<L: Value> Functor for EitherKind<L> {
    fn map<A: Value, B: Value>(fa: Either<L, A>, function: impl Fn(A) -> B + 'static) -> Either<L, B> {
        fa.map_right(function)
    }
}

impl<L: Value> Apply for EitherKind<L> {
    fn apply<A: Value, B: Value>(
        fa: Either<L, A>,
        ff: Either<L, Function<A, B>>,
    ) -> Either<L, B> {
        match ff {
            Either::Left(value) => Either::Left(value),
            Either::Right(function) => fa.map_right(|a| function.call(a)),
        }
    }
}

impl<L: Value> Applicative for EitherKind<L> {
    fn pure<A: Value>(value: A) -> Either<L, A> {
        Either::Right(value)
    }
}

impl<L: Value> Bind for EitherKind<L> {
    fn bind<A: Value, B: Value>(
        fa: Either<L, A>,
        function: impl Fn(A) -> Either<L, B> + 'static,
    ) -> Either<L, B> {
        match fa {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => function(value),
        }
    }
}

impl<L: Value> Foldable for EitherKind<L> {
    fn foldl<A: Value, B: Value>(
        fa: &Either<L, A>,
        initial: B,
        function: impl Fn(B, A) -> B + 'static,
    ) -> B {
        match fa {
            Either::Left(_) => initial,
            Either::Right(value) => function(initial, value.clone()),
        }
    }

    fn foldr<A: Value, B: Value>(
        fa: &Either<L, A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        match fa {
            Either::Left(_) => initial,
            Either::Right(value) => function(value.clone(), initial),
        }
    }

    fn length<A: Value>(fa: &Either<L, A>) -> usize {
        usize::from(fa.is_right())
    }
}

impl<L: Value> Traversable for EitherKind<L> {
    fn traverse<G: Applicative, A: Value, B: Value>(
        ta: Either<L, A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Either<L, B>> {
        match ta {
            Either::Left(value) => G::pure(Either::Left(value)),
            Either::Right(value) => G::map(function(value), Either::Right),
        }
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("Either", &MONAD, &["map", "apply", "pure", "bind"]),
    Instance::new("Either", &FOLDABLE, &["foldl", "foldr", "length"]),
    Instance::new("Either", &TRAVERSABLE, &["map", "foldl", "foldr", "traverse"]),
    Instance::new("Either", &EQ, &["eq"]),
    Instance::new("Either", &PATTERN_MATCHABLE, &["match"]),
];
