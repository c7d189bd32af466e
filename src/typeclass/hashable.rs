//! Hashable type class - hashing consistent with equality.
//!
//! # Laws
//!
//! ```text
//! eq(x, y) => hash(x) == hash(y)
//! ```
//!
//! The hash is computed with the Fx hasher, which is deterministic across runs.
//! The law harness relies on that: sampled functions look their outputs up by
//! the hash of the input.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use super::class::{Class, Law};
use super::eq::EQ;

/// Types with a hash consistent with their equality.
pub trait Hashable {
    /// A deterministic 64-bit hash.
    fn hash_value(&self) -> u64;
}

impl<T: Hash + ?Sized> Hashable for T {
    fn hash_value(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Descriptor of the `Hashable` class.
pub static HASHABLE: Class = Class {
    name: "Hashable",
    superclasses: &[&EQ],
    minimal: &[&["hash"]],
    defaults: &[],
    laws: &[Law::new("consistency", "eq(x, y) => hash(x) == hash(y)")],
};
