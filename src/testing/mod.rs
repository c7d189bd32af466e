//! Property-based law checking.
//!
//! Every class descriptor lists its laws; this module checks them against
//! instances on randomly drawn inputs, built on proptest.
//!
//! - [`sample`]: strategies for every data type, and [`SampleKind`] for
//!   sampling type constructors from an element strategy.
//! - [`EqTest`]: equality that may sample, so that functions, lenses and
//!   containers of functions can sit on either side of a law.
//! - [`Profile`]: the `dev` and `ci` driver settings, picked from
//!   `LAWFUL_PROFILE`.
//! - [`laws`]: one function per law.
//! - [`law_suite!`](crate::law_suite): generates a `#[test]` per law for a
//!   list of instances.
//!
//! # Examples
//!
//! ```rust
//! use lawful::testing::laws::{applicative, monad};
//! use lawful::types::ListKind;
//!
//! applicative::interchange::<ListKind, i32>().unwrap();
//! monad::left_identity::<ListKind, i32>().unwrap();
//! ```
//!
//! A failed law reports the shrunk counter-example:
//!
//! ```rust
//! use lawful::testing::{Profile, verify_with};
//! use lawful::typeclass::SEMIGROUP;
//! use proptest::arbitrary::any;
//!
//! let triples = any::<(i8, i8, i8)>();
//! let subtraction = verify_with(Profile::Ci, &SEMIGROUP, "associativity", triples, |(x, y, z), _| {
//!     x.wrapping_sub(y).wrapping_sub(z) == x.wrapping_sub(y.wrapping_sub(z))
//! });
//! assert!(subtraction.is_err());
//! ```

mod draw;
mod eq_test;
pub mod laws;
mod profile;
pub mod sample;
mod verify;

pub use draw::{Draw, functions};
pub use eq_test::{EqTest, PROBES};
pub use profile::{
    CASES_VARIABLE, DEFAULT_CASES, DeadlineExceeded, PROFILE_VARIABLE, Profile, UnknownProfile,
};
pub use sample::{MAX_LENGTH, SampleKind, SampleKind2, sample};
pub use verify::{LawViolation, verify, verify_with};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}

/// Generates one `#[test]` per law for each listed instance.
///
/// The first identifier prefixes the generated test names; each following
/// entry names a class and the type arguments of its law functions in
/// [`laws`]:
///
/// ```rust,ignore
/// lawful::law_suite! {
///     maybe;
///     eq: [Maybe<i32>];
///     monoid: [Maybe<String>];
///     monad: [MaybeKind, i32];
///     traversable: [MaybeKind, i32];
/// }
/// ```
///
/// expands to tests such as `prop_maybe_monad_left_identity`, each of which
/// panics with the [`LawViolation`] if the law fails.
#[macro_export]
macro_rules! law_suite {
    (@class $prefix:ident eq $types:tt) => {
        $crate::law_suite!(@emit $prefix eq $types
            reflexivity symmetry transitivity substitutivity negation);
    };
    (@class $prefix:ident hashable $types:tt) => {
        $crate::law_suite!(@emit $prefix hashable $types consistency);
    };
    (@class $prefix:ident semigroup $types:tt) => {
        $crate::law_suite!(@emit $prefix semigroup $types associativity);
    };
    (@class $prefix:ident commutative $types:tt) => {
        $crate::law_suite!(@emit $prefix commutative $types commutativity);
    };
    (@class $prefix:ident monoid $types:tt) => {
        $crate::law_suite!(@emit $prefix monoid $types left_identity right_identity);
    };
    (@class $prefix:ident functor $types:tt) => {
        $crate::law_suite!(@emit $prefix functor $types
            identity composition replace_consistency flap_consistency);
    };
    (@class $prefix:ident contravariant $types:tt) => {
        $crate::law_suite!(@emit $prefix contravariant $types identity composition);
    };
    (@class $prefix:ident apply $types:tt) => {
        $crate::law_suite!(@emit $prefix apply $types
            composition apply_to_consistency apply_first_consistency apply_second_consistency);
    };
    (@class $prefix:ident applicative $types:tt) => {
        $crate::law_suite!(@emit $prefix applicative $types
            identity homomorphism interchange composition map_consistency);
    };
    (@class $prefix:ident bind $types:tt) => {
        $crate::law_suite!(@emit $prefix bind $types
            associativity apply_consistency join_consistency);
    };
    (@class $prefix:ident monad $types:tt) => {
        $crate::law_suite!(@emit $prefix monad $types
            left_identity right_identity map_consistency);
    };
    (@class $prefix:ident profunctor $types:tt) => {
        $crate::law_suite!(@emit $prefix profunctor $types identity composition);
    };
    (@class $prefix:ident cartesian $types:tt) => {
        $crate::law_suite!(@emit $prefix cartesian $types unit associativity);
    };
    (@class $prefix:ident cocartesian $types:tt) => {
        $crate::law_suite!(@emit $prefix cocartesian $types unit associativity);
    };
    (@class $prefix:ident foldable $types:tt) => {
        $crate::law_suite!(@emit $prefix foldable $types
            fold_map_consistency fold_map_default_consistency foldl_consistency
            foldr_consistency length_consistency null_consistency sum_consistency
            elem_consistency);
    };
    (@class $prefix:ident traversable $types:tt) => {
        $crate::law_suite!(@emit $prefix traversable $types
            naturality identity composition sequence_consistency traverse_consistency);
    };

    (@emit $prefix:ident $class:ident $types:tt) => {};
    (@emit $prefix:ident $class:ident [$($ty:ty),+] $law:ident $($rest:ident)*) => {
        $crate::testing::__private::paste! {
            #[test]
            fn [<prop_ $prefix _ $class _ $law>]() {
                if let ::std::result::Result::Err(violation) =
                    $crate::testing::laws::$class::$law::<$($ty),+>()
                {
                    ::std::panic!("{violation}");
                }
            }
        }
        $crate::law_suite!(@emit $prefix $class [$($ty),+] $($rest)*);
    };

    ($prefix:ident; $($class:ident : [$($ty:ty),+ $(,)?]);+ $(;)?) => {
        $(
            $crate::law_suite!(@class $prefix $class [$($ty),+]);
        )+
    };
}
