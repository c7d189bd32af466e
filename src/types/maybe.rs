//! Maybe type - an optional value as a sum type.
//!
//! `Maybe<A>` is `Nothing` or `Just(A)`. It is the library's own optional type
//! so that every class instance can be declared on it; it converts freely to
//! and from [`Option`].
//!
//! # Class memberships
//!
//! | Class | Notes |
//! |---|---|
//! | Functor, Applicative, Monad | on [`MaybeKind`]; `Nothing` short-circuits |
//! | Foldable, Traversable | zero or one element |
//! | Semigroup, Monoid | when `A` is a semigroup; `empty()` is `Nothing` |
//! | Eq, Hashable | element-wise |
//! | PatternMatchable | constructors `Nothing` and `Just` |
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Monoid, Semigroup};
//! use lawful::types::Maybe;
//!
//! let total = Maybe::Just(String::from("a")).append(Maybe::Nothing).append(Maybe::Just(String::from("b")));
//! assert_eq!(total, Maybe::Just(String::from("ab")));
//! assert_eq!(Maybe::<String>::empty(), Maybe::Nothing);
//! ```

use crate::function::Function;
use crate::typeclass::{
    Applicative, Apply, Bind, Commutative, EQ, Eq, FOLDABLE, Foldable, Functor, Instance, MONAD,
    MONOID, Monoid, PATTERN_MATCHABLE, PatternMatchable, Semigroup, TRAVERSABLE, Traversable,
    TypeConstructor, Value,
};

/// An optional value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value. A payload-free singleton.
    #[default]
    Nothing,
    /// A value.
    Just(A),
}

impl<A> Maybe<A> {
    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// The value, or `default` for `Nothing`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Borrows the value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Eliminates the `Maybe`: `default` for `Nothing`, `function(a)` for
    /// `Just(a)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::types::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).maybe(0, |x| x * 2), 6);
    /// assert_eq!(Maybe::Nothing.maybe(0, |x: i32| x * 2), 0);
    /// ```
    pub fn maybe<B>(self, default: B, function: impl FnOnce(A) -> B) -> B {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default,
        }
    }

    /// Converts into an [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.into()
    }
}

/// [`Maybe::maybe`] as a free function.
pub fn maybe<A, B>(default: B, function: impl FnOnce(A) -> B, value: Maybe<A>) -> B {
    value.maybe(default, function)
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<A: Eq> Eq for Maybe<A> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Just(x), Self::Just(y)) => Eq::eq(x, y),
            (Self::Nothing, Self::Nothing) => true,
            _ => false,
        }
    }
}

impl<A: Semigroup> Semigroup for Maybe<A> {
    fn append(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(x), Self::Just(y)) => Self::Just(x.append(y)),
            (Self::Just(x), Self::Nothing) | (Self::Nothing, Self::Just(x)) => Self::Just(x),
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}

impl<A: Commutative> Commutative for Maybe<A> {}

impl<A: Semigroup> Monoid for Maybe<A> {
    fn empty() -> Self {
        Self::Nothing
    }
}

impl<A> PatternMatchable for Maybe<A> {
    const CONSTRUCTORS: &'static [&'static str] = &["Nothing", "Just"];

    fn constructor(&self) -> &'static str {
        match self {
            Self::Nothing => "Nothing",
            Self::Just(_) => "Just",
        }
    }
}

/// Witness for [`Maybe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MaybeKind;

impl TypeConstructor for MaybeKind {
    type Of<A: Value> = Maybe<A>;
}

impl Functor for MaybeKind {
    fn map<A: Value, B: Value>(fa: Maybe<A>, function: impl Fn(A) -> B + 'static) -> Maybe<B> {
        match fa {
            Maybe::Just(value) => Maybe::Just(function(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl Apply for MaybeKind {
    fn apply<A: Value, B: Value>(fa: Maybe<A>, ff: Maybe<Function<A, B>>) -> Maybe<B> {
        match (ff, fa) {
            (Maybe::Just(function), Maybe::Just(value)) => Maybe::Just(function.call(value)),
            _ => Maybe::Nothing,
        }
    }
}

impl Applicative for MaybeKind {
    fn pure<A: Value>(value: A) -> Maybe<A> {
        Maybe::Just(value)
    }
}

impl Bind for MaybeKind {
    fn bind<A: Value, B: Value>(
        fa: Maybe<A>,
        function: impl Fn(A) -> Maybe<B> + 'static,
    ) -> Maybe<B> {
        match fa {
            Maybe::Just(value) => function(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    fn join<A: Value>(ffa: Maybe<Maybe<A>>) -> Maybe<A> {
        ffa.unwrap_or(Maybe::Nothing)
    }
}

impl Foldable for MaybeKind {
    fn foldl<A: Value, B: Value>(
        fa: &Maybe<A>,
        initial: B,
        function: impl Fn(B, A) -> B + 'static,
    ) -> B {
        match fa {
            Maybe::Just(value) => function(initial, value.clone()),
            Maybe::Nothing => initial,
        }
    }

    fn foldr<A: Value, B: Value>(
        fa: &Maybe<A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        match fa {
            Maybe::Just(value) => function(value.clone(), initial),
            Maybe::Nothing => initial,
        }
    }

    fn to_iter<A: Value>(fa: &Maybe<A>) -> std::vec::IntoIter<A> {
        match fa {
            Maybe::Just(value) => vec![value.clone()].into_iter(),
            Maybe::Nothing => Vec::new().into_iter(),
        }
    }

    fn length<A: Value>(fa: &Maybe<A>) -> usize {
        usize::from(fa.is_just())
    }

    fn null<A: Value>(fa: &Maybe<A>) -> bool {
        fa.is_nothing()
    }
}

impl Traversable for MaybeKind {
    fn traverse<G: Applicative, A: Value, B: Value>(
        ta: Maybe<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Maybe<B>> {
        match ta {
            Maybe::Just(value) => G::map(function(value), Maybe::Just),
            Maybe::Nothing => G::pure(Maybe::Nothing),
        }
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("Maybe", &MONAD, &["map", "apply", "pure", "bind", "join"]),
    Instance::new("Maybe", &FOLDABLE, &["foldl", "foldr", "to_iter", "length", "null"]),
    Instance::new("Maybe", &TRAVERSABLE, &["map", "foldl", "foldr", "traverse"]),
    Instance::new("Maybe", &MONOID, &["append", "empty"]),
    Instance::new("Maybe", &EQ, &["eq"]),
    Instance::new("Maybe", &PATTERN_MATCHABLE, &["match"]),
];
