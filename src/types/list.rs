//! List type - a finite ordered sequence.
//!
//! `List<A>` is an immutable sequence. It is the list monad: `pure(x)` is
//! `[x]`, `bind` is concat-map, and `apply` runs every function (outer loop)
//! on every value (inner loop). Under `append` it is the free monoid.
//!
//! # Examples
//!
//! ```rust
//! use lawful::function::Function;
//! use lawful::typeclass::{Apply, Foldable};
//! use lawful::types::{List, ListKind};
//!
//! let applied = ListKind::apply(
//!     List::from(vec![1, 2]),
//!     List::from(vec![Function::new(|x: i32| x + 10), Function::new(|x: i32| x + 100)]),
//! );
//! assert_eq!(applied, List::from(vec![11, 12, 101, 102]));
//!
//! let words = List::from(vec!["a", "b", "c"]);
//! let nested = ListKind::foldr(&words, String::from("x"), |x, acc| format!("({x}+{acc})"));
//! assert_eq!(nested, "(a+(b+(c+x)))");
//! ```

use std::fmt;

use crate::function::Function;
use crate::typeclass::{
    Applicative, Apply, Bind, EQ, Eq, FOLDABLE, Foldable, Functor, Instance, MONAD, MONOID,
    Monoid, Semigroup, TRAVERSABLE, Traversable, TypeConstructor, Value,
};
use crate::types::Maybe;

/// A finite ordered sequence.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<A> {
    elements: Vec<A>,
}

impl<A> List<A> {
    /// The empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// A one-element list.
    pub fn singleton(value: A) -> Self {
        Self {
            elements: vec![value],
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates by reference.
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.elements.iter()
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &self.elements
    }
}

impl<A: Clone> List<A> {
    /// The last element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::types::{List, Maybe};
    ///
    /// assert_eq!(List::from(vec![1, 2, 3]).last(), Maybe::Just(3));
    /// assert_eq!(List::<i32>::new().last(), Maybe::Nothing);
    /// ```
    pub fn last(&self) -> Maybe<A> {
        self.elements.last().cloned().into()
    }

    /// The first element.
    pub fn first(&self) -> Maybe<A> {
        self.elements.first().cloned().into()
    }

    /// A new list with `value` appended at the end.
    #[must_use]
    pub fn snoc(&self, value: A) -> Self {
        let mut elements = self.elements.clone();
        elements.push(value);
        Self { elements }
    }
}

impl<A> Default for List<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: fmt::Debug> fmt::Debug for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("List")?;
        formatter.debug_list().entries(&self.elements).finish()
    }
}

impl<A> From<Vec<A>> for List<A> {
    fn from(elements: Vec<A>) -> Self {
        Self { elements }
    }
}

impl<A> From<List<A>> for Vec<A> {
    fn from(list: List<A>) -> Self {
        list.elements
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<A> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<A: Eq> Eq for List<A> {
    fn eq(&self, other: &Self) -> bool {
        Eq::eq(&self.elements, &other.elements)
    }
}

impl<A> Semigroup for List<A> {
    fn append(mut self, other: Self) -> Self {
        self.elements.extend(other.elements);
        self
    }
}

impl<A> Monoid for List<A> {
    fn empty() -> Self {
        Self::new()
    }
}

/// Witness for [`List`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ListKind;

impl TypeConstructor for ListKind {
    type Of<A: Value> = List<A>;
}

impl Functor for ListKind {
    fn map<A: Value, B: Value>(fa: List<A>, function: impl Fn(A) -> B + 'static) -> List<B> {
        fa.into_iter().map(function).collect()
    }
}

impl Apply for ListKind {
    fn apply<A: Value, B: Value>(fa: List<A>, ff: List<Function<A, B>>) -> List<B> {
        let mut elements = Vec::with_capacity(ff.len() * fa.len());
        for function in &ff {
            elements.extend(fa.iter().map(|value| function.call(value.clone())));
        }
        List { elements }
    }
}

impl Applicative for ListKind {
    fn pure<A: Value>(value: A) -> List<A> {
        List::singleton(value)
    }
}

impl Bind for ListKind {
    fn bind<A: Value, B: Value>(fa: List<A>, function: impl Fn(A) -> List<B> + 'static) -> List<B> {
        fa.into_iter().flat_map(function).collect()
    }

    fn join<A: Value>(ffa: List<List<A>>) -> List<A> {
        ffa.into_iter().flatten().collect()
    }
}

impl Foldable for ListKind {
    fn fold_map<A: Value, M: Monoid + Value>(
        fa: &List<A>,
        function: impl Fn(A) -> M + 'static,
    ) -> M {
        M::concat(fa.iter().cloned().map(function))
    }

    fn foldl<A: Value, B: Value>(
        fa: &List<A>,
        initial: B,
        function: impl Fn(B, A) -> B + 'static,
    ) -> B {
        fa.iter().cloned().fold(initial, function)
    }

    fn foldr<A: Value, B: Value>(
        fa: &List<A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        fa.iter()
            .rev()
            .cloned()
            .fold(initial, |accumulator, value| function(value, accumulator))
    }

    fn to_iter<A: Value>(fa: &List<A>) -> std::vec::IntoIter<A> {
        fa.elements.clone().into_iter()
    }

    fn length<A: Value>(fa: &List<A>) -> usize {
        fa.len()
    }

    fn null<A: Value>(fa: &List<A>) -> bool {
        fa.is_empty()
    }

    fn elem<A: Value + Eq>(fa: &List<A>, value: A) -> bool {
        fa.iter().any(|element| Eq::eq(element, &value))
    }
}

impl Traversable for ListKind {
    fn traverse<G: Applicative, A: Value, B: Value>(
        ta: List<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<List<B>> {
        ListKind::foldl(&ta, G::pure(List::new()), move |accumulator, value| {
            G::lift2(accumulator, function(value), |mut list: List<B>, element| {
                list.elements.push(element);
                list
            })
        })
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("List", &MONAD, &["map", "apply", "pure", "bind", "join"]),
    Instance::new(
        "List",
        &FOLDABLE,
        &["fold_map", "foldl", "foldr", "to_iter", "length", "null", "elem"],
    ),
    Instance::new("List", &TRAVERSABLE, &["map", "foldl", "foldr", "traverse"]),
    Instance::new("List", &MONOID, &["append", "empty"]),
    Instance::new("List", &EQ, &["eq"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use crate::types::MaybeKind;
    use rstest::rstest;

    #[rstest]
    fn apply_runs_functions_in_the_outer_loop() {
        let functions = List::from(vec![
            Function::new(|x: i32| x + 10),
            Function::new(|x: i32| x + 100),
        ]);
        assert_eq!(
            ListKind::apply(List::from(vec![1, 2]), functions),
            List::from(vec![11, 12, 101, 102])
        );
    }

    #[rstest]
    fn foldr_nests_to_the_right() {
        let words = List::from(vec!["a", "b", "c"]);
        let nested = ListKind::foldr(&words, String::from("x"), |x, acc| format!("({x}+{acc})"));
        assert_eq!(nested, "(a+(b+(c+x)))");
    }

    #[rstest]
    fn foldl_nests_to_the_left() {
        let words = List::from(vec!["a", "b"]);
        let nested = ListKind::foldl(&words, String::from("x"), |acc, x| format!("({acc}+{x})"));
        assert_eq!(nested, "((x+a)+b)");
    }

    #[rstest]
    fn bind_is_concat_map() {
        let result = ListKind::bind(List::from(vec![1, 2]), |x: i32| List::from(vec![x; 2]));
        assert_eq!(result, List::from(vec![1, 1, 2, 2]));
    }

    #[rstest]
    #[case(vec![2, 4], Maybe::Just(List::from(vec![1, 2])))]
    #[case(vec![2, 3], Maybe::Nothing)]
    #[case(vec![], Maybe::Just(List::new()))]
    fn traverse_with_maybe(#[case] input: Vec<i32>, #[case] expected: Maybe<List<i32>>) {
        let halves = ListKind::traverse::<MaybeKind, i32, i32>(List::from(input), |x| {
            if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing }
        });
        assert_eq!(halves, expected);
    }

    #[rstest]
    fn sequence_of_lists_keeps_left_to_right_order() {
        let nested = List::from(vec![List::from(vec![1, 2]), List::from(vec![3, 4])]);
        let expected = List::from(vec![
            List::from(vec![1, 3]),
            List::from(vec![1, 4]),
            List::from(vec![2, 3]),
            List::from(vec![2, 4]),
        ]);
        assert_eq!(ListKind::sequence::<ListKind, i32>(nested), expected);
    }

    #[rstest]
    fn foldable_helpers() {
        let values = List::from(vec![1, 2, 3]);
        assert_eq!(ListKind::length(&values), 3);
        assert_eq!(ListKind::sum(&values), 6);
        assert!(ListKind::elem(&values, 2));
        assert!(!ListKind::null(&values));
        assert_eq!(ListKind::fold_map(&values, |x: i32| Sum(i64::from(x))), Sum(6));
        assert_eq!(values.last(), Maybe::Just(3));
    }

    #[rstest]
    fn monoid_concatenates() {
        let joined = List::from(vec![1]).append(List::from(vec![2, 3]));
        assert_eq!(joined, List::from(vec![1, 2, 3]));
        assert_eq!(List::<i32>::empty(), List::new());
    }

    #[rstest]
    fn debug_is_prefixed() {
        assert_eq!(format!("{:?}", List::from(vec![1, 2])), "List[1, 2]");
    }

    #[rstest]
    fn instances_are_complete() {
        for instance in INSTANCES {
            assert!(instance.validate().is_ok(), "{instance:?}");
        }
    }
}
