//! Functions taking their whole argument bundle at once.
//!
//! An [`Uncurried`] is called with one bundle (typically a tuple) and never
//! partially applied. `map`, `apply` and `bind` pass the *same* bundle to
//! every function involved, which makes `UncurriedKind<Args>` a reader monad
//! over the bundle.
//!
//! ```rust
//! use lawful::function::{Uncurried, UncurriedKind};
//! use lawful::typeclass::Functor;
//!
//! let area = Uncurried::new(|(width, height): (i32, i32)| width * height);
//! let doubled = UncurriedKind::map(area, |a| a * 2);
//! assert_eq!(doubled.call((3, 4)), 24);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::Function;
use crate::typeclass::{
    Applicative, Apply, Bind, Commutative, Functor, Instance, Monoid, Semigroup,
    TypeConstructor, Value, MONAD, MONOID,
};

/// A function over an argument bundle.
pub struct Uncurried<Args, B> {
    body: Rc<dyn Fn(Args) -> B>,
}

impl<Args, B> Uncurried<Args, B> {
    /// Wraps a closure taking the whole bundle.
    pub fn new(body: impl Fn(Args) -> B + 'static) -> Self {
        Self {
            body: Rc::new(body),
        }
    }

    /// Calls the function with a bundle.
    #[inline]
    pub fn call(&self, arguments: Args) -> B {
        (self.body)(arguments)
    }
}

impl<A: 'static, B: 'static, C: 'static> Uncurried<(A, B), C> {
    /// Adapts a binary closure to take a pair.
    pub fn from_binary(body: impl Fn(A, B) -> C + 'static) -> Self {
        Self::new(move |(a, b)| body(a, b))
    }
}

impl<Args, B> Clone for Uncurried<Args, B> {
    fn clone(&self) -> Self {
        Self {
            body: Rc::clone(&self.body),
        }
    }
}

impl<Args, B> fmt::Debug for Uncurried<Args, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Uncurried(<closure>)")
    }
}

/// Witness for `Uncurried<Args, _>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UncurriedKind<Args>(PhantomData<fn(Args)>);

impl<Args: Value> TypeConstructor for UncurriedKind<Args> {
    type Of<A: Value> = Uncurried<Args, A>;
}

impl<Args: Value> Functor for UncurriedKind<Args> {
    fn map<A: Value, B: Value>(
        fa: Uncurried<Args, A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Uncurried<Args, B> {
        Uncurried::new(move |arguments| function(fa.call(arguments)))
    }
}

impl<Args: Value> Apply for UncurriedKind<Args> {
    fn apply<A: Value, B: Value>(
        fa: Uncurried<Args, A>,
        ff: Uncurried<Args, Function<A, B>>,
    ) -> Uncurried<Args, B> {
        Uncurried::new(move |arguments: Args| ff.call(arguments.clone()).call(fa.call(arguments)))
    }
}

impl<Args: Value> Applicative for UncurriedKind<Args> {
    fn pure<A: Value>(value: A) -> Uncurried<Args, A> {
        Uncurried::new(move |_| value.clone())
    }
}

impl<Args: Value> Bind for UncurriedKind<Args> {
    fn bind<A: Value, B: Value>(
        fa: Uncurried<Args, A>,
        function: impl Fn(A) -> Uncurried<Args, B> + 'static,
    ) -> Uncurried<Args, B> {
        Uncurried::new(move |arguments: Args| function(fa.call(arguments.clone())).call(arguments))
    }
}

impl<Args: Value, B: Semigroup + 'static> Semigroup for Uncurried<Args, B> {
    fn append(self, other: Self) -> Self {
        Self::new(move |arguments: Args| self.call(arguments.clone()).append(other.call(arguments)))
    }
}

impl<Args: Value, B: Commutative + 'static> Commutative for Uncurried<Args, B> {}

impl<Args: Value, B: Monoid + 'static> Monoid for Uncurried<Args, B> {
    fn empty() -> Self {
        Self::new(|_| B::empty())
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("Uncurried", &MONAD, &["map", "apply", "pure", "bind"]),
    Instance::new("Uncurried", &MONOID, &["append", "empty"]),
];
