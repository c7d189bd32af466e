//! Lazy cons list.
//!
//! A [`LinkedList`] is either empty or a head together with a *thunk* that
//! produces the tail on demand. Tails are recomputed rather than memoized, so
//! holding the head of an infinite list never retains the part already
//! walked.
//!
//! # Laziness and stack use
//!
//! - `map`, `take`, `scanl`, `append` and `bind` build their result lazily
//!   and work on infinite lists.
//! - `drop`, `foldl`, `length` and equality walk the list in a loop, in
//!   constant stack.
//! - `foldr` is strict: it collects the list first and diverges on an
//!   infinite one.
//! - [`LinkedList::foldr_lazy`] passes the fold of the rest as a [`Thunk`].
//!   Returning that same thunk continues the walk iteratively, ignoring it
//!   stops early, and wrapping it in a new thunk defers it.
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//! use lawful::types::{LinkedList, Thunk};
//!
//! let running = LinkedList::repeat(1_u64).scanl(|acc, x| acc + x);
//! assert_eq!(running.drop(10_000).head(0), 10_001);
//!
//! let big = LinkedList::iterate(|x: u64| x + 1, 1).map(|x| x > 100_000);
//! let found = big.foldr_lazy(
//!     |x, rest: Thunk<bool>| if x { Rc::new(|| true) } else { rest },
//!     Rc::new(|| false),
//! );
//! assert!(found);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::function::Function;
use crate::typeclass::{
    Applicative, Apply, Bind, EQ, Eq, FOLDABLE, Foldable, Functor, Instance, MONAD, MONOID,
    Monoid, PATTERN_MATCHABLE, PatternMatchable, Semigroup, TypeConstructor, Value,
};

/// A deferred computation of a `B`.
pub type Thunk<B> = Rc<dyn Fn() -> B>;

enum Node<A> {
    Nil,
    Cons(A, Thunk<LinkedList<A>>),
}

/// A lazy, possibly infinite, cons list.
pub struct LinkedList<A> {
    node: Rc<Node<A>>,
}

impl<A> LinkedList<A> {
    /// The empty list.
    pub fn new() -> Self {
        Self {
            node: Rc::new(Node::Nil),
        }
    }

    /// A list whose tail is produced by `tail` when needed.
    ///
    /// `tail` runs again every time the tail is forced.
    pub fn cons(head: A, tail: impl Fn() -> Self + 'static) -> Self {
        Self {
            node: Rc::new(Node::Cons(head, Rc::new(tail))),
        }
    }

    /// Returns `true` for the empty list.
    pub fn is_empty(&self) -> bool {
        matches!(*self.node, Node::Nil)
    }
}

impl<A: Value> LinkedList<A> {
    /// Prepends `head` to an existing list.
    #[must_use]
    pub fn prepend(head: A, tail: Self) -> Self {
        Self::cons(head, move || tail.clone())
    }

    /// The head and the forced tail, or `None` for the empty list.
    pub fn uncons(&self) -> Option<(A, Self)> {
        match &*self.node {
            Node::Nil => None,
            Node::Cons(head, tail) => Some((head.clone(), tail())),
        }
    }

    /// The first element, or `default` for the empty list.
    pub fn head(&self, default: A) -> A {
        match &*self.node {
            Node::Nil => default,
            Node::Cons(head, _) => head.clone(),
        }
    }

    /// Everything but the first element; the empty list stays empty.
    ///
    /// Forces the tail thunk, rerunning it on every call.
    #[must_use]
    pub fn tail(&self) -> Self {
        match &*self.node {
            Node::Nil => Self::new(),
            Node::Cons(_, tail) => tail(),
        }
    }

    /// `start`, `function(start)`, `function(function(start))`, ...
    ///
    /// Forcing a tail twice calls `function` twice; nothing is memoized.
    pub fn iterate(function: impl Fn(A) -> A + 'static, start: A) -> Self {
        Self::iterate_shared(Rc::new(function), start)
    }

    fn iterate_shared(function: Rc<dyn Fn(A) -> A>, start: A) -> Self {
        Self::cons(start.clone(), move || {
            Self::iterate_shared(Rc::clone(&function), function(start.clone()))
        })
    }

    /// `value` forever.
    pub fn repeat(value: A) -> Self {
        Self::cons(value.clone(), move || Self::repeat(value.clone()))
    }

    /// `value`, `count` times.
    pub fn replicate(count: usize, value: A) -> Self {
        Self::repeat(value).take(count)
    }

    fn from_shared(elements: Rc<[A]>, index: usize) -> Self {
        match elements.get(index) {
            None => Self::new(),
            Some(value) => {
                let value = value.clone();
                Self::cons(value, move || Self::from_shared(Rc::clone(&elements), index + 1))
            }
        }
    }

    /// The first `count` elements.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count == 0 {
            return Self::new();
        }
        match &*self.node {
            Node::Nil => Self::new(),
            Node::Cons(head, tail) => {
                let tail = Rc::clone(tail);
                Self::cons(head.clone(), move || tail().take(count - 1))
            }
        }
    }

    /// Everything after the first `count` elements.
    #[must_use]
    pub fn drop(&self, count: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..count {
            let next = match &*current.node {
                Node::Nil => break,
                Node::Cons(_, tail) => tail(),
            };
            current = next;
        }
        current
    }

    /// Running accumulation: the first element, then `function(acc, x)` for
    /// each later element `x`.
    ///
    /// Accumulators are not cached: forcing the same tail twice reruns
    /// `function` for it.
    ///
    /// ```rust
    /// use lawful::types::LinkedList;
    ///
    /// let sums = LinkedList::from_iter(vec![1, 2, 3, 4]).scanl(|acc, x| acc + x);
    /// assert_eq!(sums.iter().collect::<Vec<_>>(), vec![1, 3, 6, 10]);
    /// ```
    #[must_use]
    pub fn scanl(&self, function: impl Fn(A, A) -> A + 'static) -> Self {
        match &*self.node {
            Node::Nil => Self::new(),
            Node::Cons(head, tail) => Self::scan_from(head.clone(), tail(), Rc::new(function)),
        }
    }

    fn scan_from(accumulator: A, rest: Self, function: Rc<dyn Fn(A, A) -> A>) -> Self {
        Self::cons(accumulator.clone(), move || match &*rest.node {
            Node::Nil => Self::new(),
            Node::Cons(head, tail) => Self::scan_from(
                function(accumulator.clone(), head.clone()),
                tail(),
                Rc::clone(&function),
            ),
        })
    }

    /// Applies `function` to every element, lazily.
    pub fn map<B: Value>(&self, function: impl Fn(A) -> B + 'static) -> LinkedList<B> {
        self.map_shared(Rc::new(function))
    }

    fn map_shared<B: Value>(&self, function: Rc<dyn Fn(A) -> B>) -> LinkedList<B> {
        match &*self.node {
            Node::Nil => LinkedList::new(),
            Node::Cons(head, tail) => {
                let tail = Rc::clone(tail);
                let mapped = function(head.clone());
                LinkedList::cons(mapped, move || tail().map_shared(Rc::clone(&function)))
            }
        }
    }

    fn append_lazy(&self, other: Thunk<Self>) -> Self {
        match &*self.node {
            Node::Nil => other(),
            Node::Cons(head, tail) => {
                let tail = Rc::clone(tail);
                Self::cons(head.clone(), move || tail().append_lazy(Rc::clone(&other)))
            }
        }
    }

    fn bind_shared<B: Value>(&self, function: Rc<dyn Fn(A) -> LinkedList<B>>) -> LinkedList<B> {
        match &*self.node {
            Node::Nil => LinkedList::new(),
            Node::Cons(head, tail) => {
                let tail = Rc::clone(tail);
                let rest_function = Rc::clone(&function);
                let rest: Thunk<LinkedList<B>> =
                    Rc::new(move || tail().bind_shared(Rc::clone(&rest_function)));
                function(head.clone()).append_lazy(rest)
            }
        }
    }

    /// Iterates over the elements, forcing tails as it goes.
    pub fn iter(&self) -> Iter<A> {
        Iter {
            current: self.clone(),
        }
    }

    /// Left fold in a loop.
    pub fn foldl<B>(&self, initial: B, function: impl Fn(B, A) -> B) -> B {
        self.iter().fold(initial, function)
    }

    /// Strict right fold. Diverges on an infinite list.
    pub fn foldr<B>(&self, initial: B, function: impl Fn(A, B) -> B) -> B {
        let elements: Vec<A> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(initial, |accumulator, value| function(value, accumulator))
    }

    /// Right fold with a lazy accumulator.
    ///
    /// `combine(x, rest)` receives the fold of the elements after `x` as a
    /// thunk. Returning `rest` itself moves on to the next element without
    /// growing the stack; returning any other thunk ends the walk and that
    /// thunk is forced for the result.
    pub fn foldr_lazy<B: 'static>(
        &self,
        combine: impl Fn(A, Thunk<B>) -> Thunk<B> + 'static,
        initial: Thunk<B>,
    ) -> B {
        Self::foldr_lazy_shared(self.clone(), Rc::new(combine), initial)
    }

    fn foldr_lazy_shared<B: 'static>(
        list: Self,
        combine: Rc<dyn Fn(A, Thunk<B>) -> Thunk<B>>,
        initial: Thunk<B>,
    ) -> B {
        let mut current = list;
        loop {
            let (head, tail) = match &*current.node {
                Node::Nil => return initial(),
                Node::Cons(head, tail) => (head.clone(), tail()),
            };

            let rest: Thunk<B> = {
                let tail = tail.clone();
                let combine = Rc::clone(&combine);
                let initial = Rc::clone(&initial);
                Rc::new(move || {
                    Self::foldr_lazy_shared(tail.clone(), Rc::clone(&combine), Rc::clone(&initial))
                })
            };

            let result = combine(head, Rc::clone(&rest));
            if !Rc::ptr_eq(&result, &rest) {
                return result();
            }
            current = tail;
        }
    }

    /// Number of elements, counted in a loop.
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

impl<A> Clone for LinkedList<A> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<A> Default for LinkedList<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists are possibly infinite; at most the first ten elements are shown.
impl<A: Value> fmt::Debug for LinkedList<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SHOWN: usize = 10;

        formatter.write_str("LinkedList")?;
        let mut list = formatter.debug_list();
        let mut iter = self.iter();
        for value in iter.by_ref().take(SHOWN) {
            list.entry(&value);
        }
        if iter.next().is_some() {
            list.entry(&format_args!(".."));
        }
        list.finish()
    }
}

impl<A: Value> FromIterator<A> for LinkedList<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::from_shared(iter.into_iter().collect(), 0)
    }
}

/// Iterator over a [`LinkedList`].
pub struct Iter<A> {
    current: LinkedList<A>,
}

impl<A: Value> Iterator for Iter<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let (head, tail) = self.current.uncons()?;
        self.current = tail;
        Some(head)
    }
}

impl<A: Value + PartialEq> PartialEq for LinkedList<A> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if x == y => {}
                _ => return false,
            }
        }
    }
}

impl<A: Value + Eq> Eq for LinkedList<A> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if Eq::eq(&x, &y) => {}
                _ => return false,
            }
        }
    }
}

impl<A: Value> Semigroup for LinkedList<A> {
    fn append(self, other: Self) -> Self {
        self.append_lazy(Rc::new(move || other.clone()))
    }
}

impl<A: Value> Monoid for LinkedList<A> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<A> PatternMatchable for LinkedList<A> {
    const CONSTRUCTORS: &'static [&'static str] = &["Nil", "Cons"];

    fn constructor(&self) -> &'static str {
        match *self.node {
            Node::Nil => "Nil",
            Node::Cons(..) => "Cons",
        }
    }
}

/// Witness for [`LinkedList`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedListKind;

impl TypeConstructor for LinkedListKind {
    type Of<A: Value> = LinkedList<A>;
}

impl Functor for LinkedListKind {
    fn map<A: Value, B: Value>(
        fa: LinkedList<A>,
        function: impl Fn(A) -> B + 'static,
    ) -> LinkedList<B> {
        fa.map(function)
    }
}

impl Apply for LinkedListKind {
    fn apply<A: Value, B: Value>(
        fa: LinkedList<A>,
        ff: LinkedList<Function<A, B>>,
    ) -> LinkedList<B> {
        ff.bind_shared(Rc::new(move |function: Function<A, B>| {
            fa.map(move |value| function.call(value))
        }))
    }
}

impl Applicative for LinkedListKind {
    fn pure<A: Value>(value: A) -> LinkedList<A> {
        LinkedList::prepend(value, LinkedList::new())
    }
}

impl Bind for LinkedListKind {
    fn bind<A: Value, B: Value>(
        fa: LinkedList<A>,
        function: impl Fn(A) -> LinkedList<B> + 'static,
    ) -> LinkedList<B> {
        fa.bind_shared(Rc::new(function))
    }
}

impl Foldable for LinkedListKind {
    fn foldl<A: Value, B: Value>(
        fa: &LinkedList<A>,
        initial: B,
        function: impl Fn(B, A) -> B + 'static,
    ) -> B {
        fa.foldl(initial, function)
    }

    fn foldr<A: Value, B: Value>(
        fa: &LinkedList<A>,
        initial: B,
        function: impl Fn(A, B) -> B + 'static,
    ) -> B {
        fa.foldr(initial, function)
    }

    fn to_iter<A: Value>(fa: &LinkedList<A>) -> std::vec::IntoIter<A> {
        fa.iter().collect::<Vec<_>>().into_iter()
    }

    fn length<A: Value>(fa: &LinkedList<A>) -> usize {
        fa.len()
    }

    fn null<A: Value>(fa: &LinkedList<A>) -> bool {
        fa.is_empty()
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("LinkedList", &MONAD, &["map", "apply", "pure", "bind"]),
    Instance::new("LinkedList", &FOLDABLE, &["foldl", "foldr", "to_iter", "length", "null"]),
    Instance::new("LinkedList", &MONOID, &["append", "empty"]),
    Instance::new("LinkedList", &EQ, &["eq"]),
    Instance::new("LinkedList", &PATTERN_MATCHABLE, &["match"]),
];
