//! Contravariant type class - mapping over the input side.
//!
//! # Laws
//!
//! ```text
//! contramap(fa, |x| x) == fa                              -- identity
//! contramap(fa, |x| f(g(x))) == contramap(contramap(fa, f), g)  -- composition
//! ```
//!
//! Composition is reversed with respect to [`Functor`](super::Functor): the
//! function applied last to `fa` runs first on the input.

use super::class::{Class, Derivation, Law};
use super::higher::{TypeConstructor, Value};

/// Types consuming values, which can be adapted by pre-composition.
pub trait Contravariant: TypeConstructor {
    /// Adapts `fa` to consume `B` by first converting with `function`.
    fn contramap<A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(B) -> A + 'static,
    ) -> Self::Of<B>;

    /// Adapts `fa` to ignore its input and always consume `value`.
    fn contrareplace<A: Value, B: Value>(value: A, fa: Self::Of<A>) -> Self::Of<B> {
        Self::contramap(fa, move |_| value.clone())
    }
}

/// Descriptor of the `Contravariant` class.
pub static CONTRAVARIANT: Class = Class {
    name: "Contravariant",
    superclasses: &[],
    minimal: &[&["contramap"]],
    defaults: &[Derivation::new("contrareplace", &["contramap"])],
    laws: &[
        Law::new("identity", "contramap(x, id) == x"),
        Law::new("composition", "contramap(x, f . g) == contramap(contramap(x, f), g)"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{Function, OpKind};
    use rstest::rstest;

    #[rstest]
    fn contramap_runs_the_adapter_first() {
        let is_positive = Function::new(|x: i64| x > 0);
        let on_length = OpKind::contramap(is_positive, |text: String| text.len() as i64);
        assert!(on_length.call(String::from("a")));
        assert!(!on_length.call(String::new()));
    }

    #[rstest]
    fn contrareplace_ignores_the_input() {
        let double = Function::new(|x: i32| x * 2);
        let constant = OpKind::contrareplace::<i32, &str>(21, double);
        assert_eq!(constant.call("ignored"), 42);
    }
}
