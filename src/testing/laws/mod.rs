//! Ready-made law checks, one module per class.
//!
//! Each law is a generic function named after the law, parameterised by the
//! instance under test (a plain type, or a witness plus an element type):
//!
//! ```rust
//! use lawful::testing::laws::{functor, monoid};
//! use lawful::types::MaybeKind;
//!
//! functor::composition::<MaybeKind, i32>().unwrap();
//! monoid::left_identity::<String>().unwrap();
//! ```
//!
//! [`law_suite!`](crate::law_suite) turns a list of instances into one
//! `#[test]` per law.

mod algebra;
#[path = "foldable.rs"]
mod foldable_laws;
#[path = "functor.rs"]
mod functor_laws;
#[path = "profunctor.rs"]
mod profunctor_laws;

pub use algebra::{commutative, eq, hashable, monoid, semigroup};
pub use foldable_laws::{foldable, traversable};
pub use functor_laws::{applicative, apply, bind, contravariant, functor, monad};
pub use profunctor_laws::{cartesian, cocartesian, profunctor};

/// The laws checked here for every class, as `(class, laws)`.
///
/// `law_suite!` expands exactly these names.
pub const CHECKED: &[(&str, &[&str])] = &[
    (
        "Eq",
        &["reflexivity", "symmetry", "transitivity", "substitutivity", "negation"],
    ),
    ("Hashable", &["consistency"]),
    ("Semigroup", &["associativity"]),
    ("Commutative", &["commutativity"]),
    ("Monoid", &["left_identity", "right_identity"]),
    (
        "Functor",
        &["identity", "composition", "replace_consistency", "flap_consistency"],
    ),
    ("Contravariant", &["identity", "composition"]),
    (
        "Apply",
        &[
            "composition",
            "apply_to_consistency",
            "apply_first_consistency",
            "apply_second_consistency",
        ],
    ),
    (
        "Applicative",
        &["identity", "homomorphism", "interchange", "composition", "map_consistency"],
    ),
    ("Bind", &["associativity", "apply_consistency", "join_consistency"]),
    ("Monad", &["left_identity", "right_identity", "map_consistency"]),
    ("Profunctor", &["identity", "composition"]),
    ("Cartesian", &["unit", "associativity"]),
    ("Cocartesian", &["unit", "associativity"]),
    (
        "Foldable",
        &[
            "fold_map_consistency",
            "fold_map_default_consistency",
            "foldl_consistency",
            "foldr_consistency",
            "length_consistency",
            "null_consistency",
            "sum_consistency",
            "elem_consistency",
        ],
    ),
    (
        "Traversable",
        &["naturality", "identity", "composition", "sequence_consistency", "traverse_consistency"],
    ),
];
