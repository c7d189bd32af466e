//! Dictionary type - an unordered map from hashable keys to values.
//!
//! `Dictionary<K, V>` is a functor in its values. It is `Apply` by key
//! intersection but not `Applicative`: no key-less `pure` exists. When the
//! values form a semigroup, dictionaries form a monoid under union, combining
//! the values of shared keys.
//!
//! Iteration order is unspecified. Folds over a dictionary should use a
//! commutative monoid, and traversals an applicative whose effects commute,
//! for the result not to depend on it.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Semigroup, Sum};
//! use lawful::types::{Dictionary, Maybe};
//!
//! let left = Dictionary::from_iter([("a", Sum(1)), ("b", Sum(2))]);
//! let right = Dictionary::from_iter([("b", Sum(10))]);
//! let merged = left.append(right);
//! assert_eq!(merged.lookup(&"b"), Maybe::Just(Sum(12)));
//! ```

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::function::Function;
use crate::typeclass::{
    APPLY, Apply, Applicative, Commutative, EQ, Eq, FOLDABLE, Foldable, Functor, Instance, MONOID,
    Monoid, Semigroup, TRAVERSABLE, Traversable, TypeConstructor, Value,
};
use crate::types::Maybe;

/// Bound on dictionary keys.
pub trait Key: Value + Hash + std::cmp::Eq {}

impl<K: Value + Hash + std::cmp::Eq> Key for K {}

/// An unordered map from keys to values.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "K: serde::Serialize + Hash + std::cmp::Eq, V: serde::Serialize",
            deserialize = "K: serde::Deserialize<'de> + Hash + std::cmp::Eq, V: serde::Deserialize<'de>"
        )
    )
)]
pub struct Dictionary<K, V> {
    entries: FxHashMap<K, V>,
}

impl<K: Hash + std::cmp::Eq, V> Dictionary<K, V> {
    /// The empty dictionary.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `key` has an entry.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// A dictionary with `key` bound to `value`, replacing any previous
    /// binding.
    #[must_use]
    pub fn insert(mut self, key: K, value: V) -> Self {
        self.entries.insert(key, value);
        self
    }

    /// Iterates over the entries in unspecified order.
    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterates over the keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Iterates over the values in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Union keeping the left value for shared keys.
    #[must_use]
    pub fn append_first(mut self, other: Self) -> Self {
        for (key, value) in other.entries {
            self.entries.entry(key).or_insert(value);
        }
        self
    }

    /// Union keeping the right value for shared keys.
    #[must_use]
    pub fn append_second(mut self, other: Self) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

impl<K: Hash + std::cmp::Eq, V: Clone> Dictionary<K, V> {
    /// The value bound to `key`.
    pub fn lookup(&self, key: &K) -> Maybe<V> {
        self.entries.get(key).cloned().into()
    }
}

impl<K: Hash + std::cmp::Eq, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A pre-rendered key.
struct Rendered(String);

impl fmt::Debug for Rendered {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

// Entries are printed sorted by their rendered key, so equal dictionaries
// print alike whatever their insertion history.
impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(Rendered, &V)> = self
            .entries
            .iter()
            .map(|(key, value)| (Rendered(format!("{key:?}")), value))
            .collect();
        entries.sort_by(|(left, _), (right, _)| left.0.cmp(&right.0));
        formatter.write_str("Dictionary")?;
        formatter.debug_map().entries(entries).finish()
    }
}

impl<K: Hash + std::cmp::Eq, V: PartialEq> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + std::cmp::Eq, V: std::cmp::Eq> std::cmp::Eq for Dictionary<K, V> {}

impl<K: Hash + std::cmp::Eq, V> FromIterator<(K, V)> for Dictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V> IntoIterator for Dictionary<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Hash + std::cmp::Eq, V: Eq> Eq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.entries.get(key).is_some_and(|v| Eq::eq(value, v)))
    }
}

impl<K: Hash + std::cmp::Eq, V: Semigroup> Semigroup for Dictionary<K, V> {
    fn append(mut self, other: Self) -> Self {
        for (key, value) in other.entries {
            let combined = match self.entries.remove(&key) {
                Some(existing) => existing.append(value),
                None => value,
            };
            self.entries.insert(key, combined);
        }
        self
    }
}

impl<K: Hash + std::cmp::Eq, V: Commutative> Commutative for Dictionary<K, V> {}

impl<K: Hash + std::cmp::Eq, V: Semigroup> Monoid for Dictionary<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

/// Witness for `Dictionary<K, _>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryKind<K>(PhantomData<fn() -> K>);

impl<K: Key> TypeConstructor for DictionaryKind<K> {
    type Of<A: Value> = Dictionary<K, A>;
}

impl<K: Key> Functor for DictionaryKind<K> {
    fn map<A: Value, B: Value>(
        fa: Dictionary<K, A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Dictionary<K, B> {
        fa.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

impl<K: Key> Apply for DictionaryKind<K> {
    /// Applies each function to the value under the same key. Keys present
    /// on one side only are dropped.
    fn apply<A: Value, B: Value>(
        fa: Dictionary<K, A>,
        ff: Dictionary<K, Function<A, B>>,
    ) -> Dictionary<K, B> {
        let mut values = fa.entries;
        ff.into_iter()
            .filter_map(|(key, function)| {
                values
                    .remove(&key)
                    .map(|value| (key, function.call(value)))
            })
            .collect()
    }
}

impl<K: Key> Foldable for DictionaryKind<K> {
    fn foldl<A: Value, B: Value>(
        fa: &Dictionary<K, A>,
        initial: B,
        function: impl Fn(B, A) -> B + 'static,
    ) -> B {
        fa.values().cloned().fold(initial, function)
    }

    fn foldr<A: Value, B: Value>(
        fa: &Dictionary<K, A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        let values: Vec<A> = fa.values().cloned().collect();
        values
            .into_iter()
            .rev()
            .fold(initial, |accumulator, value| function(value, accumulator))
    }

    fn length<A: Value>(fa: &Dictionary<K, A>) -> usize {
        fa.len()
    }

    fn null<A: Value>(fa: &Dictionary<K, A>) -> bool {
        fa.is_empty()
    }
}

impl<K: Key> Traversable for DictionaryKind<K> {
    /// Accumulates entries left to right into `pure(empty)`.
    fn traverse<G: Applicative, A: Value, B: Value>(
        ta: Dictionary<K, A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Dictionary<K, B>> {
        ta.into_iter()
            .fold(G::pure(Dictionary::new()), |accumulator, (key, value)| {
                G::lift2(accumulator, function(value), move |entries: Dictionary<K, B>, b| {
                    entries.insert(key.clone(), b)
                })
            })
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("Dictionary", &APPLY, &["map", "apply"]),
    Instance::new("Dictionary", &FOLDABLE, &["foldl", "foldr", "length", "null"]),
    Instance::new("Dictionary", &TRAVERSABLE, &["map", "foldl", "foldr", "traverse"]),
    Instance::new("Dictionary", &MONOID, &["append", "empty"]),
    Instance::new("Dictionary", &EQ, &["eq"]),
];
