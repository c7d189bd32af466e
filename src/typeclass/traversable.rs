//! Traversable type class - swapping a structure with an applicative layer.
//!
//! The applicative is passed explicitly as the witness type parameter `G`.
//! `traverse` and `sequence` are defined in terms of each other:
//!
//! ```text
//! traverse(x, f) == sequence(map(x, f))
//! sequence(x) == traverse(x, id)
//! ```
//!
//! # Laws
//!
//! ```text
//! t(traverse(x, f)) == traverse(x, t . f)                  -- naturality
//! traverse::<Identity>(x, Identity) == Identity(x)          -- identity
//! traverse::<Compose<F, G>>(x, Compose . map(g) . f)
//!     == Compose(map(traverse(x, f), |y| traverse(y, g)))   -- composition
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Traversable;
//! use lawful::types::{List, ListKind, Maybe, MaybeKind};
//!
//! let halves = ListKind::traverse::<MaybeKind, i32, i32>(List::from(vec![2, 4]), |x| {
//!     if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing }
//! });
//! assert_eq!(halves, Maybe::Just(List::from(vec![1, 2])));
//! ```

use super::applicative::Applicative;
use super::class::{Class, Derivation, Law};
use super::foldable::{FOLDABLE, Foldable};
use super::functor::{FUNCTOR, Functor};
use super::higher::Value;

/// Functors that can be traversed with an applicative effect.
pub trait Traversable: Functor + Foldable {
    /// Maps every element to an effect and collects the results inside a
    /// single effect.
    fn traverse<G: Applicative, A: Value, B: Value>(
        ta: Self::Of<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Self::Of<B>> {
        Self::sequence::<G, B>(Self::map(ta, function))
    }

    /// Turns a structure of effects into an effect of a structure.
    fn sequence<G: Applicative, A: Value>(tga: Self::Of<G::Of<A>>) -> G::Of<Self::Of<A>> {
        Self::traverse::<G, G::Of<A>, A>(tga, |ga| ga)
    }
}

/// `T::traverse` as a free function.
pub fn traverse<T: Traversable, G: Applicative, A: Value, B: Value>(
    ta: T::Of<A>,
    function: impl Fn(A) -> G::Of<B> + 'static,
) -> G::Of<T::Of<B>> {
    T::traverse::<G, A, B>(ta, function)
}

/// `T::sequence` as a free function.
pub fn sequence<T: Traversable, G: Applicative, A: Value>(
    tga: T::Of<G::Of<A>>,
) -> G::Of<T::Of<A>> {
    T::sequence::<G, A>(tga)
}

/// Descriptor of the `Traversable` class.
pub static TRAVERSABLE: Class = Class {
    name: "Traversable",
    superclasses: &[&FUNCTOR, &FOLDABLE],
    minimal: &[&["traverse"], &["sequence"]],
    defaults: &[
        Derivation::new("traverse", &["sequence", "map"]),
        Derivation::new("sequence", &["traverse"]),
    ],
    laws: &[
        Law::new("naturality", "t(traverse(x, f)) == traverse(x, t . f)"),
        Law::new("identity", "traverse(x, Identity) == Identity(x)"),
        Law::new(
            "composition",
            "traverse(x, Compose . map(g) . f) == Compose(map(traverse(x, f), traverse(g)))",
        ),
        Law::new("sequence_consistency", "sequence(x) == traverse(x, id)"),
        Law::new("traverse_consistency", "traverse(x, f) == sequence(map(x, f))"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::fixtures::VecKind;
    use crate::typeclass::{Identity, IdentityKind};
    use rstest::rstest;

    #[rstest]
    fn traverse_through_identity_rebuilds_the_structure() {
        let result = traverse::<VecKind, IdentityKind, _, _>(vec![1, 2, 3], |x: i32| Identity(x * 2));
        assert_eq!(result, Identity(vec![2, 4, 6]));
    }

    #[rstest]
    fn sequence_of_vectors_is_the_cartesian_product() {
        let result = sequence::<VecKind, VecKind, _>(vec![vec![1, 2], vec![3]]);
        assert_eq!(result, vec![vec![1, 3], vec![2, 3]]);
    }

    #[rstest]
    fn sequence_of_an_empty_structure_is_pure() {
        let result = sequence::<VecKind, VecKind, i32>(vec![]);
        assert_eq!(result, vec![Vec::<i32>::new()]);
    }
}
