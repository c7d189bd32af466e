//! The instance catalog: concrete data types and their class memberships.
//!
//! | Type | Witness | Classes |
//! |---|---|---|
//! | [`Maybe`] | [`MaybeKind`] | Monad, Traversable, Monoid, Eq, PatternMatchable |
//! | [`List`] | [`ListKind`] | Monad, Traversable, Monoid, Eq |
//! | [`LinkedList`] | [`LinkedListKind`] | Monad, Foldable, Monoid, Eq, PatternMatchable |
//! | [`Dictionary`] | [`DictionaryKind`] | Apply, Traversable, Monoid, Eq |
//! | [`Composed`] | [`ComposeKind`] | Applicative, Traversable |
//! | [`Lens`] | [`LensKind`] | Profunctor, Cartesian |
//! | `Composed` | [`MaybeT`], [`IdentityT`] | Monad |
//!
//! [`Identity`](crate::typeclass::Identity),
//! [`Either`](crate::control::Either) and
//! [`Function`](crate::function::Function) live in their own modules and are
//! listed by [`catalog`] as well.
//!
//! # Examples
//!
//! ```rust
//! use lawful::types::catalog;
//!
//! assert!(catalog().iter().all(|instance| instance.validate().is_ok()));
//! assert!(catalog().iter().any(|instance| instance.type_name == "LinkedList"));
//! ```

mod compose;
mod dictionary;
mod lens;
mod linked_list;
mod list;
mod maybe;
mod transformer;

pub use compose::{ComposeKind, Composed};
pub use dictionary::{Dictionary, DictionaryKind, Key};
pub use lens::{Lens, LensKind};
pub use linked_list::{Iter, LinkedList, LinkedListKind, Thunk};
pub use list::{List, ListKind};
pub use maybe::{Maybe, MaybeKind, maybe};
pub use transformer::{IdentityT, MaybeT, Transformed, Transformer};

use crate::typeclass::Instance;

/// Every instance declaration in the crate.
pub fn catalog() -> Vec<Instance> {
    [
        crate::typeclass::INSTANCES,
        crate::control::INSTANCES,
        crate::function::INSTANCES,
        crate::function::UNCURRIED_INSTANCES,
        maybe::INSTANCES,
        list::INSTANCES,
        linked_list::INSTANCES,
        dictionary::INSTANCES,
        compose::INSTANCES,
        transformer::INSTANCES,
        lens::INSTANCES,
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_declared_instance_validates() {
        for instance in catalog() {
            assert!(instance.validate().is_ok(), "{instance:?}");
        }
    }

    #[rstest]
    #[case("Maybe", "Monad")]
    #[case("List", "Traversable")]
    #[case("Dictionary", "Apply")]
    #[case("Lens", "Cartesian")]
    #[case("MaybeT", "Monad")]
    fn catalog_lists_memberships(#[case] type_name: &str, #[case] class: &str) {
        assert!(
            catalog()
                .iter()
                .any(|instance| instance.type_name == type_name && instance.class.name == class)
        );
    }

    #[rstest]
    fn dictionary_is_not_applicative() {
        assert!(
            !catalog()
                .iter()
                .any(|instance| instance.type_name == "Dictionary"
                    && instance.class.refines(&crate::typeclass::APPLICATIVE))
        );
    }
}
