//! Lens optics: focusing on a part that is always present.
//!
//! A lens optic runs at any [`Cartesian`] profunctor: the profunctor is
//! lifted through a pair carrying the whole structure alongside the focus,
//! then wrapped by `view` on the way in and `update` on the way out:
//!
//! ```text
//! lens(view, update)(p) = dimap(first(p), |s| (view(s), s), |(b, s)| update(b, s))
//! ```
//!
//! # Laws
//!
//! For a lens built from `view` and `update`:
//!
//! ```text
//! view(update(b, s)) == b
//! update(view(s), s) == s
//! update(c, update(b, s)) == update(c, s)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::optics::{lens, over, set, view};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! let x = lens(|p: Point| p.x, |x: i32, p: Point| Point { x, ..p });
//! let origin = Point { x: 0, y: 0 };
//! assert_eq!(view(&x, Point { x: 3, y: 4 }), 3);
//! assert_eq!(set(&x, 7, origin.clone()), Point { x: 7, y: 0 });
//! assert_eq!(over(&x, |x| x - 1).call(origin), Point { x: -1, y: 0 });
//! ```

use std::fmt;
use std::rc::Rc;

use super::optic::{Optic, OpticAt};
use crate::typeclass::{Cartesian, Value};

/// An optic built from `view: S -> A` and `update: (B, S) -> T`.
pub struct LensOptic<S, T, A, B> {
    view: Rc<dyn Fn(S) -> A>,
    update: Rc<dyn Fn(B, S) -> T>,
}

/// Builds a [`LensOptic`].
pub fn lens<S, T, A, B>(
    view: impl Fn(S) -> A + 'static,
    update: impl Fn(B, S) -> T + 'static,
) -> LensOptic<S, T, A, B> {
    LensOptic {
        view: Rc::new(view),
        update: Rc::new(update),
    }
}

impl<S, T, A, B> Clone for LensOptic<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            view: Rc::clone(&self.view),
            update: Rc::clone(&self.update),
        }
    }
}

impl<S, T, A, B> fmt::Debug for LensOptic<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LensOptic")
    }
}

impl<S: Value, T: Value, A: Value, B: Value> Optic for LensOptic<S, T, A, B> {
    type Source = S;
    type Target = T;
    type Focus = A;
    type Replacement = B;
}

impl<P: Cartesian, S: Value, T: Value, A: Value, B: Value> OpticAt<P> for LensOptic<S, T, A, B> {
    fn run(&self, p: P::Of<A, B>) -> P::Of<S, T> {
        let view = Rc::clone(&self.view);
        let update = Rc::clone(&self.update);
        P::dimap(
            P::first::<A, B, S>(p),
            move |source: S| (view(source.clone()), source),
            move |(value, source): (B, S)| update(value, source),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{over, set, to_lens, view};
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        age: u32,
    }

    fn person(name: &str, age: u32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }

    fn age() -> LensOptic<Person, Person, u32, u32> {
        lens(|p: Person| p.age, |age: u32, p: Person| Person { age, ..p })
    }

    fn head() -> LensOptic<Vec<Person>, Vec<Person>, Person, Person> {
        lens(
            |people: Vec<Person>| people[0].clone(),
            |first: Person, mut people: Vec<Person>| {
                people[0] = first;
                people
            },
        )
    }

    #[rstest]
    fn composed_lenses_reach_nested_fields() {
        let people = vec![person("Alice", 42), person("Bob", 7)];
        let older = over(&head().then(age()), |a| a + 1).call(people);
        assert_eq!(older, vec![person("Alice", 43), person("Bob", 7)]);
    }

    #[rstest]
    fn view_and_set() {
        let alice = person("Alice", 42);
        assert_eq!(view(&age(), alice.clone()), 42);
        assert_eq!(set(&age(), 1, alice), person("Alice", 1));
    }

    #[rstest]
    fn extracted_lens_obeys_put_get() {
        let concrete = to_lens(&head().then(age()));
        let people = vec![person("Carol", 30)];
        assert_eq!(concrete.view(concrete.update(5, people)), 5);
    }

    #[rstest]
    fn type_changing_update() {
        let first = lens(|pair: (i32, char)| pair.0, |text: String, pair: (i32, char)| (text, pair.1));
        let shown = over(&first, |x: i32| x.to_string()).call((12, 'z'));
        assert_eq!(shown, (String::from("12"), 'z'));
    }
}
