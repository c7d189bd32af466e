//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(fa, |x| g(f(x))) == map(map(fa, f), g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Functor;
//! use lawful::types::{Maybe, MaybeKind};
//!
//! let transformed = MaybeKind::map(Maybe::Just(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Maybe::Just(String::from("5")));
//!
//! let nothing = MaybeKind::map(Maybe::<i32>::Nothing, |n| n + 1);
//! assert_eq!(nothing, Maybe::Nothing);
//! ```

use super::class::{Class, Derivation, Law};
use super::higher::{TypeConstructor, Value};
use crate::function::Function;

/// Types that can have a function mapped over their contents.
///
/// `map` is the only required operation.
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value inside `fa`.
    fn map<A: Value, B: Value>(fa: Self::Of<A>, function: impl Fn(A) -> B + 'static)
    -> Self::Of<B>;

    /// Replaces every value inside `fa` with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Functor;
    /// use lawful::types::{List, ListKind};
    ///
    /// let replaced = ListKind::replace('x', List::from(vec![1, 2, 3]));
    /// assert_eq!(replaced, List::from(vec!['x', 'x', 'x']));
    /// ```
    fn replace<A: Value, B: Value>(value: B, fa: Self::Of<A>) -> Self::Of<B> {
        Self::map(fa, move |_| value.clone())
    }

    /// Calls every function inside `functions` with `argument`.
    fn flap<A: Value, B: Value>(functions: Self::Of<Function<A, B>>, argument: A) -> Self::Of<B> {
        Self::map(functions, move |function| function.call(argument.clone()))
    }
}

/// `F::map` as a free function.
pub fn map<F: Functor, A: Value, B: Value>(
    fa: F::Of<A>,
    function: impl Fn(A) -> B + 'static,
) -> F::Of<B> {
    F::map(fa, function)
}

/// `F::replace` as a free function.
pub fn replace<F: Functor, A: Value, B: Value>(value: B, fa: F::Of<A>) -> F::Of<B> {
    F::replace(value, fa)
}

/// Descriptor of the `Functor` class.
pub static FUNCTOR: Class = Class {
    name: "Functor",
    superclasses: &[],
    minimal: &[&["map"]],
    defaults: &[
        Derivation::new("replace", &["map"]),
        Derivation::new("flap", &["map"]),
    ],
    laws: &[
        Law::new("identity", "map(x, id) == x"),
        Law::new("composition", "map(x, g . f) == map(map(x, f), g)"),
        Law::new("replace_consistency", "replace(b, x) == map(x, |_| b)"),
        Law::new("flap_consistency", "flap(fs, a) == map(fs, |f| f(a))"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::fixtures::VecKind;
    use rstest::rstest;

    #[rstest]
    fn map_transforms_every_element() {
        assert_eq!(map::<VecKind, _, _>(vec![1, 2, 3], |x: i32| x * 2), vec![2, 4, 6]);
    }

    #[rstest]
    fn replace_keeps_the_shape() {
        assert_eq!(replace::<VecKind, _, _>("x", vec![1, 2]), vec!["x", "x"]);
        assert_eq!(VecKind::replace::<i32, &str>("x", vec![]), Vec::<&str>::new());
    }

    #[rstest]
    fn flap_feeds_one_argument_to_many_functions() {
        let functions = vec![Function::new(|x: i32| x + 1), Function::new(|x: i32| x * 10)];
        assert_eq!(VecKind::flap(functions, 3), vec![4, 30]);
    }
}
