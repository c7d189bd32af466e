//! First-class functions and their algebra.
//!
//! [`Function`] is a shared, cloneable `A -> B` closure with an optional name.
//! It is the value that containers of functions hold (`apply` takes an
//! `F::Of<Function<A, B>>`), and it instantiates three families of classes
//! through three witnesses:
//!
//! | Witness | `Of` | Classes |
//! |---|---|---|
//! | [`FunctionKind<X>`] | `Function<X, A>` | Functor, Apply, Applicative, Bind, Monad (the reader monad) |
//! | [`OpKind<R>`] | `Function<A, R>` | Contravariant |
//! | [`FunctionArrow`] | `Function<A, B>` | Profunctor, Cartesian, Cocartesian |
//!
//! When the codomain is a semigroup (monoid), so is the function, pointwise.
//!
//! The submodules add the dynamically-typed [`Curried`] function with arity
//! and signature metadata, the argument-bundle [`Uncurried`] function, and the
//! statically-typed [`curry!`](crate::curry) macro.
//!
//! # Examples
//!
//! ```rust
//! use lawful::function::{Function, FunctionKind};
//! use lawful::typeclass::{Applicative, Bind, Functor};
//!
//! let length = Function::new(|text: String| text.len());
//! let doubled = FunctionKind::map(length, |n| n * 2);
//! assert_eq!(doubled.call(String::from("abc")), 6);
//!
//! let pair = FunctionKind::bind(Function::new(|x: i32| x + 1), |y| {
//!     Function::new(move |x: i32| (x, y))
//! });
//! assert_eq!(pair.call(1), (1, 2));
//! assert_eq!(FunctionKind::<i32>::pure("constant").call(9), "constant");
//! ```

mod curried;
mod curry_macro;
mod uncurried;

pub use curried::{Applied, Curried, Dynamic, Signature};
pub use uncurried::{Uncurried, UncurriedKind};

pub(crate) use uncurried::INSTANCES as UNCURRIED_INSTANCES;

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::control::Either;
use crate::typeclass::{
    Applicative, Apply, Bind, Cartesian, Cocartesian, Commutative, Contravariant, Functor,
    Instance, Monoid, Profunctor, Semigroup, TypeConstructor, TypeConstructor2, Value,
    APPLICATIVE, CARTESIAN, COCARTESIAN, CONTRAVARIANT, MONAD, MONOID, PROFUNCTOR, SEMIGROUP,
};

/// A shared unary function.
///
/// Cloning a `Function` clones a reference-counted pointer to the same
/// closure.
pub struct Function<A, B> {
    body: Rc<dyn Fn(A) -> B>,
    name: Option<Rc<str>>,
}

impl<A, B> Function<A, B> {
    /// Wraps a closure.
    pub fn new(body: impl Fn(A) -> B + 'static) -> Self {
        Self {
            body: Rc::new(body),
            name: None,
        }
    }

    /// Wraps a closure and records a name for `Debug` output.
    pub fn named(name: &str, body: impl Fn(A) -> B + 'static) -> Self {
        Self {
            body: Rc::new(body),
            name: Some(Rc::from(name)),
        }
    }

    /// Calls the function.
    #[inline]
    pub fn call(&self, argument: A) -> B {
        (self.body)(argument)
    }

    /// The recorded name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<A: 'static, B: 'static> Function<A, B> {
    /// Runs `self`, then `next` on its result.
    #[must_use]
    pub fn then<C: 'static>(self, next: Function<B, C>) -> Function<A, C> {
        Function::new(move |argument| next.call(self.call(argument)))
    }

    /// Runs `previous`, then `self` on its result.
    #[must_use]
    pub fn after<Z: 'static>(self, previous: Function<Z, A>) -> Function<Z, B> {
        previous.then(self)
    }
}

impl<A: 'static> Function<A, A> {
    /// The identity function.
    pub fn identity() -> Self {
        Self::named("identity", |argument| argument)
    }
}

impl<A: 'static, B: Clone + 'static> Function<A, B> {
    /// The function ignoring its argument and returning `value`.
    pub fn constant(value: B) -> Self {
        Self::named("constant", move |_| value.clone())
    }
}

impl<A, B> Clone for Function<A, B> {
    fn clone(&self) -> Self {
        Self {
            body: Rc::clone(&self.body),
            name: self.name.clone(),
        }
    }
}

impl<A, B> fmt::Debug for Function<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(formatter, "Function({name})"),
            None => formatter.write_str("Function(<closure>)"),
        }
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Composes two functions: `compose(g, f)(x) == g(f(x))`.
pub fn compose<A: 'static, B: 'static, C: 'static>(
    outer: Function<B, C>,
    inner: Function<A, B>,
) -> Function<A, C> {
    inner.then(outer)
}

/// The identity function on values.
#[inline]
pub const fn identity<A>(value: A) -> A {
    value
}

/// A function returning `value` whatever it is given.
pub fn constant<A: 'static, B: Clone + 'static>(value: B) -> Function<A, B> {
    Function::constant(value)
}

/// Swaps the arguments of a curried binary function.
pub fn flip<A: Value, B: Value, C: 'static>(
    function: Function<A, Function<B, C>>,
) -> Function<B, Function<A, C>> {
    Function::named("flip", move |second: B| {
        let function = function.clone();
        Function::new(move |first: A| function.call(first).call(second.clone()))
    })
}

// =============================================================================
// Reader monad: FunctionKind<X>
// =============================================================================

/// Witness for `Function<X, _>`: functions out of a fixed input type.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionKind<X>(PhantomData<fn(X)>);

impl<X: Value> TypeConstructor for FunctionKind<X> {
    type Of<A: Value> = Function<X, A>;
}

impl<X: Value> Functor for FunctionKind<X> {
    fn map<A: Value, B: Value>(
        fa: Function<X, A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Function<X, B> {
        Function::new(move |input| function(fa.call(input)))
    }
}

impl<X: Value> Apply for FunctionKind<X> {
    fn apply<A: Value, B: Value>(
        fa: Function<X, A>,
        ff: Function<X, Function<A, B>>,
    ) -> Function<X, B> {
        Function::new(move |input: X| ff.call(input.clone()).call(fa.call(input)))
    }
}

impl<X: Value> Applicative for FunctionKind<X> {
    fn pure<A: Value>(value: A) -> Function<X, A> {
        Function::constant(value)
    }
}

impl<X: Value> Bind for FunctionKind<X> {
    fn bind<A: Value, B: Value>(
        fa: Function<X, A>,
        function: impl Fn(A) -> Function<X, B> + 'static,
    ) -> Function<X, B> {
        Function::new(move |input: X| function(fa.call(input.clone())).call(input))
    }
}

// =============================================================================
// Contravariant: OpKind<R>
// =============================================================================

/// Witness for `Function<_, R>`: functions into a fixed output type.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpKind<R>(PhantomData<fn() -> R>);

impl<R: Value> TypeConstructor for OpKind<R> {
    type Of<A: Value> = Function<A, R>;
}

impl<R: Value> Contravariant for OpKind<R> {
    fn contramap<A: Value, B: Value>(
        fa: Function<A, R>,
        function: impl Fn(B) -> A + 'static,
    ) -> Function<B, R> {
        Function::new(move |input| fa.call(function(input)))
    }
}

// =============================================================================
// Profunctor: FunctionArrow
// =============================================================================

/// Witness for `Function<_, _>` as a profunctor.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionArrow;

impl TypeConstructor2 for FunctionArrow {
    type Of<A: Value, B: Value> = Function<A, B>;
}

impl Profunctor for FunctionArrow {
    fn dimap<A: Value, B: Value, C: Value, D: Value>(
        p: Function<A, B>,
        before: impl Fn(C) -> A + 'static,
        after: impl Fn(B) -> D + 'static,
    ) -> Function<C, D> {
        Function::new(move |input| after(p.call(before(input))))
    }
}

impl Cartesian for FunctionArrow {
    fn first<A: Value, B: Value, C: Value>(p: Function<A, B>) -> Function<(A, C), (B, C)> {
        Function::new(move |(a, c): (A, C)| (p.call(a), c))
    }

    fn second<A: Value, B: Value, C: Value>(p: Function<A, B>) -> Function<(C, A), (C, B)> {
        Function::new(move |(c, a): (C, A)| (c, p.call(a)))
    }
}

impl Cocartesian for FunctionArrow {
    fn left<A: Value, B: Value, C: Value>(
        p: Function<A, B>,
    ) -> Function<Either<A, C>, Either<B, C>> {
        Function::new(move |either: Either<A, C>| match either {
            Either::Left(a) => Either::Left(p.call(a)),
            Either::Right(c) => Either::Right(c),
        })
    }

    fn right<A: Value, B: Value, C: Value>(
        p: Function<A, B>,
    ) -> Function<Either<C, A>, Either<C, B>> {
        Function::new(move |either: Either<C, A>| match either {
            Either::Left(c) => Either::Left(c),
            Either::Right(a) => Either::Right(p.call(a)),
        })
    }
}

// =============================================================================
// Pointwise Semigroup / Monoid
// =============================================================================

impl<X: Value, B: Semigroup + 'static> Semigroup for Function<X, B> {
    fn append(self, other: Self) -> Self {
        Self::new(move |input: X| self.call(input.clone()).append(other.call(input)))
    }
}

impl<X: Value, B: Commutative + 'static> Commutative for Function<X, B> {}

/// The codomain's identity is fixed by the type `B`, so no monoid needs to be
/// passed alongside the function value.
impl<X: Value, B: Monoid + 'static> Monoid for Function<X, B> {
    fn empty() -> Self {
        Self::new(|_| B::empty())
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("Function", &MONAD, &["map", "apply", "pure", "bind"]),
    Instance::new("Function", &APPLICATIVE, &["map", "apply", "pure"]),
    Instance::new("Function", &CONTRAVARIANT, &["contramap"]),
    Instance::new("Function", &PROFUNCTOR, &["dimap"]),
    Instance::new("Function", &CARTESIAN, &["dimap", "first", "second"]),
    Instance::new("Function", &COCARTESIAN, &["dimap", "left", "right"]),
    Instance::new("Function", &SEMIGROUP, &["append"]),
    Instance::new("Function", &MONOID, &["append", "empty"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn compose_runs_inner_first() {
        let composed = compose(Function::new(|x: i32| x * 10), Function::new(|x: i32| x + 1));
        assert_eq!(composed.call(1), 20);
    }

    #[rstest]
    fn flip_swaps_arguments() {
        let subtract = Function::new(|x: i32| Function::new(move |y: i32| x - y));
        assert_eq!(flip(subtract).call(1).call(10), 9);
    }

    #[rstest]
    fn reader_apply_shares_the_input() {
        let add = Function::new(|x: i32| Function::new(move |y: i32| x + y));
        let double = Function::new(|x: i32| x * 2);
        assert_eq!(FunctionKind::apply(double, add).call(3), 9);
    }

    #[rstest]
    fn reader_lift2_combines_two_readers() {
        let result = FunctionKind::lift2(
            Function::new(|x: i32| x + 1),
            Function::new(|x: i32| x * 2),
            |a, b| a * b,
        );
        assert_eq!(result.call(3), 24);
    }

    #[rstest]
    fn contramap_precomposes() {
        let length = Function::new(|text: String| text.len());
        let counted = OpKind::contramap(length, |n: usize| "x".repeat(n));
        assert_eq!(counted.call(4), 4);
    }

    #[rstest]
    fn dimap_wraps_both_sides() {
        let p = Function::new(|x: i32| x * 2);
        let wrapped = FunctionArrow::dimap(p, |text: String| text.len() as i32, |x| x + 1);
        assert_eq!(wrapped.call(String::from("abc")), 7);
    }

    #[rstest]
    fn first_and_left_lift_through_structure() {
        let p = Function::new(|x: i32| x + 1);
        assert_eq!(FunctionArrow::first::<i32, i32, char>(p.clone()).call((1, 'a')), (2, 'a'));
        assert_eq!(
            FunctionArrow::left::<i32, i32, char>(p.clone()).call(Either::Right('a')),
            Either::Right('a')
        );
        assert_eq!(
            FunctionArrow::right::<i32, i32, char>(p).call(Either::Right(1)),
            Either::Right(2)
        );
    }

    #[rstest]
    fn pointwise_semigroup() {
        let f = Function::new(|x: i64| Sum(x));
        let g = Function::new(|x: i64| Sum(x * 10));
        assert_eq!(f.append(g).call(2), Sum(22));
        assert_eq!(Function::<i64, Sum>::empty().call(5), Sum(0));
    }

    #[rstest]
    fn debug_shows_the_name() {
        assert_eq!(format!("{:?}", Function::<i32, i32>::identity()), "Function(identity)");
        assert_eq!(format!("{:?}", Function::new(|x: i32| x)), "Function(<closure>)");
    }

    #[rstest]
    fn instances_are_complete() {
        for instance in INSTANCES {
            assert!(instance.validate().is_ok(), "{instance:?}");
        }
    }
}
