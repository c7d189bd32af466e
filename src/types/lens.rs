//! The concrete lens profunctor.
//!
//! A [`Lens<S, T, A, B>`] pairs a `view: S -> A` with an `update: (B, S) -> T`.
//! With the focus types `A` and `B` fixed, it is a Cartesian profunctor in
//! `S` and `T` through the witness [`LensKind<A, B>`]:
//!
//! ```text
//! dimap(f, g)(L) = Lens(|x| view(f(x)), |b, x| g(update(b, f(x))))
//! first(L)       = Lens(|(x, _)| view(x), |b, (x, y)| (update(b, x), y))
//! ```
//!
//! Running a lens optic at `LensKind` on [`Lens::identity`] turns the optic
//! back into a first-class `Lens` value; see
//! [`to_lens`](crate::optics::to_lens).
//!
//! # Laws
//!
//! For a simple lens (`S == T`, `A == B`):
//!
//! ```text
//! view(update(b, s)) == b            -- put-get
//! update(view(s), s) == s            -- get-put
//! update(c, update(b, s)) == update(c, s)  -- put-put
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::types::Lens;
//!
//! let first = Lens::new(|pair: (i32, char)| pair.0, |value: i64, pair: (i32, char)| (value, pair.1));
//! assert_eq!(first.view((1, 'a')), 1);
//! assert_eq!(first.update(10, (1, 'a')), (10_i64, 'a'));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::typeclass::{
    CARTESIAN, Cartesian, Instance, PROFUNCTOR, Profunctor, TypeConstructor2, Value,
};

/// A getter and a (possibly type-changing) setter.
pub struct Lens<S, T, A, B> {
    view: Rc<dyn Fn(S) -> A>,
    update: Rc<dyn Fn(B, S) -> T>,
}

impl<S, T, A, B> Lens<S, T, A, B> {
    /// Builds a lens from its two halves.
    pub fn new(
        view: impl Fn(S) -> A + 'static,
        update: impl Fn(B, S) -> T + 'static,
    ) -> Self {
        Self {
            view: Rc::new(view),
            update: Rc::new(update),
        }
    }

    /// The focus of `source`.
    #[inline]
    pub fn view(&self, source: S) -> A {
        (self.view)(source)
    }

    /// `source` with its focus replaced by `value`.
    #[inline]
    pub fn update(&self, value: B, source: S) -> T {
        (self.update)(value, source)
    }
}

impl<S: Clone, T, A, B> Lens<S, T, A, B> {
    /// `source` with `function` applied to its focus.
    pub fn modify(&self, source: S, function: impl FnOnce(A) -> B) -> T {
        let focus = self.view(source.clone());
        self.update(function(focus), source)
    }
}

impl<A: 'static, B: 'static> Lens<A, B, A, B> {
    /// The lens whose focus is the whole structure.
    pub fn identity() -> Self {
        Self::new(|source| source, |value, _| value)
    }
}

impl<S, T, A, B> Clone for Lens<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            view: Rc::clone(&self.view),
            update: Rc::clone(&self.update),
        }
    }
}

impl<S, T, A, B> fmt::Debug for Lens<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Lens<{} -> {}>",
            std::any::type_name::<S>(),
            std::any::type_name::<A>()
        )
    }
}

/// Witness for `Lens<_, _, A, B>` as a profunctor.
pub struct LensKind<A, B>(PhantomData<fn() -> (A, B)>);

impl<A, B> Clone for LensKind<A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for LensKind<A, B> {}

impl<A, B> fmt::Debug for LensKind<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LensKind")
    }
}

impl<X: Value, Y: Value> TypeConstructor2 for LensKind<X, Y> {
    type Of<S: Value, T: Value> = Lens<S, T, X, Y>;
}

impl<X: Value, Y: Value> Profunctor for LensKind<X, Y> {
    fn dimap<S: Value, T: Value, C: Value, D: Value>(
        p: Lens<S, T, X, Y>,
        before: impl Fn(C) -> S + 'static,
        after: impl Fn(T) -> D + 'static,
    ) -> Lens<C, D, X, Y> {
        let before = Rc::new(before);
        let view_before = Rc::clone(&before);
        let viewed = p.clone();
        Lens::new(
            move |source: C| viewed.view(view_before(source)),
            move |value: Y, source: C| after(p.update(value, before(source))),
        )
    }
}

impl<X: Value, Y: Value> Cartesian for LensKind<X, Y> {
    fn first<S: Value, T: Value, C: Value>(p: Lens<S, T, X, Y>) -> Lens<(S, C), (T, C), X, Y> {
        let viewed = p.clone();
        Lens::new(
            move |(source, _): (S, C)| viewed.view(source),
            move |value: Y, (source, rest): (S, C)| (p.update(value, source), rest),
        )
    }

    fn second<S: Value, T: Value, C: Value>(p: Lens<S, T, X, Y>) -> Lens<(C, S), (C, T), X, Y> {
        let viewed = p.clone();
        Lens::new(
            move |(_, source): (C, S)| viewed.view(source),
            move |value: Y, (rest, source): (C, S)| (rest, p.update(value, source)),
        )
    }
}

pub(crate) const INSTANCES: &[Instance] = &[
    Instance::new("Lens", &PROFUNCTOR, &["dimap"]),
    Instance::new("Lens", &CARTESIAN, &["dimap", "first", "second"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn first_of_pair() -> Lens<(i32, char), (i32, char), i32, i32> {
        Lens::new(|(x, _): (i32, char)| x, |value: i32, (_, c): (i32, char)| (value, c))
    }

    #[rstest]
    fn identity_focuses_on_everything() {
        let lens = Lens::<i32, i32, i32, i32>::identity();
        assert_eq!(lens.view(4), 4);
        assert_eq!(lens.update(9, 4), 9);
    }

    #[rstest]
    fn dimap_adapts_the_structure() {
        let wrapped = LensKind::dimap(
            first_of_pair(),
            |text: String| (text.len() as i32, 't'),
            |(x, c): (i32, char)| format!("{c}{x}"),
        );
        assert_eq!(wrapped.view(String::from("abc")), 3);
        assert_eq!(wrapped.update(7, String::from("abc")), "t7");
    }

    #[rstest]
    fn first_and_second_carry_the_other_component() {
        let first = LensKind::first::<(i32, char), (i32, char), bool>(first_of_pair());
        assert_eq!(first.view(((1, 'a'), true)), 1);
        assert_eq!(first.update(5, ((1, 'a'), true)), ((5, 'a'), true));

        let second = LensKind::second::<(i32, char), (i32, char), bool>(first_of_pair());
        assert_eq!(second.view((false, (2, 'b'))), 2);
        assert_eq!(second.update(6, (false, (2, 'b'))), (false, (6, 'b')));
    }

    #[rstest]
    fn modify_maps_the_focus() {
        assert_eq!(first_of_pair().modify((3, 'z'), |x| x * 2), (6, 'z'));
    }

    #[rstest]
    fn instances_are_complete() {
        for instance in INSTANCES {
            assert!(instance.validate().is_ok(), "{instance:?}");
        }
    }
}
