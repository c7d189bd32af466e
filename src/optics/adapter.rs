//! Adapters: optics over an isomorphism-like pair of conversions.
//!
//! An adapter converts the whole into the focus on the way in and the new
//! focus into the new whole on the way out. It needs only a [`Profunctor`].

use std::fmt;
use std::rc::Rc;

use super::optic::{Optic, OpticAt};
use crate::typeclass::{Profunctor, Value};

/// An optic built from `receive: S -> A` and `send: B -> T`.
pub struct Adapter<S, T, A, B> {
    receive: Rc<dyn Fn(S) -> A>,
    send: Rc<dyn Fn(B) -> T>,
}

/// Builds an [`Adapter`].
///
/// # Examples
///
/// ```rust
/// use lawful::optics::{adapter, over};
///
/// let swapped = adapter(|(n, c): (i32, char)| (c, n), |(c, n): (char, i32)| (n, c));
/// let bumped = over(&swapped, |(c, n)| (c, n + 1));
/// assert_eq!(bumped.call((1, 'a')), (2, 'a'));
/// ```
pub fn adapter<S, T, A, B>(
    receive: impl Fn(S) -> A + 'static,
    send: impl Fn(B) -> T + 'static,
) -> Adapter<S, T, A, B> {
    Adapter {
        receive: Rc::new(receive),
        send: Rc::new(send),
    }
}

impl<S, T, A, B> Clone for Adapter<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            receive: Rc::clone(&self.receive),
            send: Rc::clone(&self.send),
        }
    }
}

impl<S, T, A, B> fmt::Debug for Adapter<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Adapter")
    }
}

impl<S: Value, T: Value, A: Value, B: Value> Optic for Adapter<S, T, A, B> {
    type Source = S;
    type Target = T;
    type Focus = A;
    type Replacement = B;
}

impl<P: Profunctor, S: Value, T: Value, A: Value, B: Value> OpticAt<P> for Adapter<S, T, A, B> {
    fn run(&self, p: P::Of<A, B>) -> P::Of<S, T> {
        let receive = Rc::clone(&self.receive);
        let send = Rc::clone(&self.send);
        P::dimap(p, move |source| receive(source), move |value| send(value))
    }
}
