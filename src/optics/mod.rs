//! Profunctor optics.
//!
//! An optic is a way of lifting a transformation of a part into a
//! transformation of the whole, uniformly over every profunctor that has the
//! capabilities it needs:
//!
//! | Constructor | Needs | Built from |
//! |---|---|---|
//! | [`adapter`] | [`Profunctor`](crate::typeclass::Profunctor) | `receive: S -> A`, `send: B -> T` |
//! | [`lens`] | [`Cartesian`](crate::typeclass::Cartesian) | `view: S -> A`, `update: (B, S) -> T` |
//! | [`prism`] | [`Cocartesian`](crate::typeclass::Cocartesian) | `matcher: S -> Either<T, A>`, `build: B -> T` |
//!
//! [`OpticAt<P>`] is implemented for every profunctor `P` with the required
//! capability, so one optic value runs as a setter at the function
//! profunctor ([`over`], [`set`]) and as a getter at the concrete lens
//! profunctor ([`view`], [`to_lens`]). Composition is [`Optic::then`]; the
//! outer optic comes first.
//!
//! # Example
//!
//! ```rust
//! use lawful::optics::{Optic, lens, over};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Person { name: String, age: u32 }
//!
//! let first = lens(
//!     |people: Vec<Person>| people[0].clone(),
//!     |person: Person, mut people: Vec<Person>| { people[0] = person; people },
//! );
//! let age = lens(|p: Person| p.age, |age: u32, p: Person| Person { age, ..p });
//!
//! let people = vec![
//!     Person { name: "Alice".into(), age: 42 },
//!     Person { name: "Bob".into(), age: 7 },
//! ];
//! let older = over(&first.then(age), |a| a + 1).call(people);
//! assert_eq!(older[0].age, 43);
//! assert_eq!(older[1].age, 7);
//! ```

mod adapter;
mod lens;
mod optic;
mod prism;

pub use adapter::{Adapter, adapter};
pub use lens::{LensOptic, lens};
pub use optic::{Optic, OpticAt, Then, over, set, to_lens, view};
pub use prism::{PrismOptic, prism};
