//! Apply type class - applying functions inside a context.
//!
//! `Apply` adds `apply` to [`Functor`]. Functions inside a context are
//! [`Function`] values, so a context of functions is an ordinary
//! `F::Of<Function<A, B>>`.
//!
//! `apply(values, functions)` and `apply_to(functions, values)` are the same
//! operation with flipped arguments; each has a default in terms of the
//! other, so an instance supplies one of them.
//!
//! # Laws
//!
//! ## Composition
//!
//! ```text
//! apply(apply(w, v), u) == apply(w, apply(v, map(u, compose)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::function::Function;
//! use lawful::typeclass::Apply;
//! use lawful::types::{List, ListKind};
//!
//! let functions = List::from(vec![
//!     Function::new(|x: i32| x + 10),
//!     Function::new(|x: i32| x + 100),
//! ]);
//! let applied = ListKind::apply(List::from(vec![1, 2]), functions);
//! assert_eq!(applied, List::from(vec![11, 12, 101, 102]));
//! ```

use std::rc::Rc;

use super::class::{Class, Derivation, Law};
use super::functor::{FUNCTOR, Functor};
use super::higher::Value;
use crate::function::Function;

/// Functors that can apply a contained function to a contained value.
pub trait Apply: Functor {
    /// Applies the functions in `ff` to the values in `fa`.
    fn apply<A: Value, B: Value>(fa: Self::Of<A>, ff: Self::Of<Function<A, B>>) -> Self::Of<B> {
        Self::apply_to(ff, fa)
    }

    /// [`Apply::apply`] with the function context first.
    fn apply_to<A: Value, B: Value>(ff: Self::Of<Function<A, B>>, fa: Self::Of<A>) -> Self::Of<B> {
        Self::apply(fa, ff)
    }

    /// Combines two contexts with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Apply;
    /// use lawful::types::{Maybe, MaybeKind};
    ///
    /// let sum = MaybeKind::lift2(Maybe::Just(1), Maybe::Just(2), |x: i32, y: i32| x + y);
    /// assert_eq!(sum, Maybe::Just(3));
    /// ```
    fn lift2<A: Value, B: Value, C: Value>(
        fa: Self::Of<A>,
        fb: Self::Of<B>,
        function: impl Fn(A, B) -> C + 'static,
    ) -> Self::Of<C> {
        let function = Rc::new(function);
        let partial = Self::map(fa, move |a: A| {
            let function = Rc::clone(&function);
            Function::new(move |b: B| function(a.clone(), b))
        });
        Self::apply(fb, partial)
    }

    /// Sequences two contexts, keeping the values of the first.
    fn apply_first<A: Value, B: Value>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<A> {
        Self::apply_to(Self::map(fa, Function::<B, A>::constant), fb)
    }

    /// Sequences two contexts, keeping the values of the second.
    fn apply_second<A: Value, B: Value>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<B> {
        Self::apply_to(Self::replace(Function::<B, B>::identity(), fa), fb)
    }
}

/// `F::apply` as a free function.
pub fn apply<F: Apply, A: Value, B: Value>(
    fa: F::Of<A>,
    ff: F::Of<Function<A, B>>,
) -> F::Of<B> {
    F::apply(fa, ff)
}

/// `F::lift2` as a free function.
pub fn lift2<F: Apply, A: Value, B: Value, C: Value>(
    fa: F::Of<A>,
    fb: F::Of<B>,
    function: impl Fn(A, B) -> C + 'static,
) -> F::Of<C> {
    F::lift2(fa, fb, function)
}

/// Descriptor of the `Apply` class.
pub static APPLY: Class = Class {
    name: "Apply",
    superclasses: &[&FUNCTOR],
    minimal: &[&["map", "apply"], &["map", "apply_to"]],
    defaults: &[
        Derivation::new("apply", &["apply_to"]),
        Derivation::new("apply_to", &["apply"]),
        Derivation::new("apply_first", &["apply_to", "map"]),
        Derivation::new("apply_second", &["apply_to", "replace"]),
        Derivation::new("lift2", &["map", "apply"]),
    ],
    laws: &[
        Law::new(
            "composition",
            "apply(apply(w, v), u) == apply(w, apply(v, map(u, compose)))",
        ),
        Law::new("apply_to_consistency", "apply_to(fs, x) == apply(x, fs)"),
        Law::new("apply_first_consistency", "apply_first(x, y) == lift2(x, y, |a, _| a)"),
        Law::new("apply_second_consistency", "apply_second(x, y) == lift2(x, y, |_, b| b)"),
    ],
};
