//! Test equality.
//!
//! Laws are equations, and some sides of those equations are functions,
//! endofunctions or lenses, which have no decidable equality. [`EqTest`]
//! compares such values observationally: functions are run on a handful of
//! drawn arguments and their results compared in turn. Plain data falls back
//! to [`Eq`]; containers recurse into their elements, so a `Maybe` of
//! functions is compared by running the functions inside.

use std::convert::Infallible;

use proptest::arbitrary::Arbitrary;

use super::draw::Draw;
use crate::control::Either;
use crate::function::{Function, Uncurried};
use crate::typeclass::{All, Any, Endo, Eq, Identity, Sum, TypeConstructor, Value};
use crate::types::{Composed, Dictionary, Key, Lens, LinkedList, List, Maybe};

/// Arguments drawn per function comparison.
pub const PROBES: usize = 8;

/// Equality that may sample.
pub trait EqTest {
    /// Whether `self` and `other` are indistinguishable on the draws of
    /// `draw`.
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool;
}

macro_rules! structural_eq_test {
    ($($type:ty),* $(,)?) => {
        $(
            impl EqTest for $type {
                #[inline]
                fn eq_test(&self, other: &Self, _: &mut Draw) -> bool {
                    Eq::eq(self, other)
                }
            }
        )*
    };
}

structural_eq_test!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String, Sum,
    All, Any,
);

impl EqTest for Infallible {
    fn eq_test(&self, _: &Self, _: &mut Draw) -> bool {
        match *self {}
    }
}

fn sequences_eq_test<'a, A: EqTest + 'a>(
    left: impl ExactSizeIterator<Item = &'a A>,
    right: impl ExactSizeIterator<Item = &'a A>,
    draw: &mut Draw,
) -> bool {
    left.len() == right.len() && left.zip(right).all(|(x, y)| x.eq_test(y, draw))
}

impl<A: EqTest, B: EqTest> EqTest for (A, B) {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        self.0.eq_test(&other.0, draw) && self.1.eq_test(&other.1, draw)
    }
}

impl<A: EqTest> EqTest for Vec<A> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        sequences_eq_test(self.iter(), other.iter(), draw)
    }
}

impl<A: EqTest> EqTest for Option<A> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        match (self, other) {
            (Some(x), Some(y)) => x.eq_test(y, draw),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: EqTest> EqTest for Maybe<A> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        match (self, other) {
            (Maybe::Just(x), Maybe::Just(y)) => x.eq_test(y, draw),
            (Maybe::Nothing, Maybe::Nothing) => true,
            _ => false,
        }
    }
}

impl<L: EqTest, R: EqTest> EqTest for Either<L, R> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        match (self, other) {
            (Either::Left(x), Either::Left(y)) => x.eq_test(y, draw),
            (Either::Right(x), Either::Right(y)) => x.eq_test(y, draw),
            _ => false,
        }
    }
}

impl<A: EqTest> EqTest for Identity<A> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        self.0.eq_test(&other.0, draw)
    }
}

impl<A: EqTest> EqTest for List<A> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        sequences_eq_test(self.iter(), other.iter(), draw)
    }
}

// Sampled linked lists are finite.
impl<A: Value + EqTest> EqTest for LinkedList<A> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        let left: Vec<A> = self.iter().collect();
        let right: Vec<A> = other.iter().collect();
        left.eq_test(&right, draw)
    }
}

impl<K: Key, V: Value + EqTest> EqTest for Dictionary<K, V> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| match other.lookup(key) {
                Maybe::Just(found) => value.eq_test(&found, draw),
                Maybe::Nothing => false,
            })
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A: Value> EqTest for Composed<F, G, A>
where
    F::Of<G::Of<A>>: EqTest,
{
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        self.0.eq_test(&other.0, draw)
    }
}

impl<A: Value + Arbitrary, B: EqTest> EqTest for Function<A, B> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        (0..PROBES).all(|_| match draw.value::<A>() {
            Some(argument) => self
                .call(argument.clone())
                .eq_test(&other.call(argument), draw),
            None => true,
        })
    }
}

impl<A: Value + Arbitrary + EqTest> EqTest for Endo<A> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        self.0.eq_test(&other.0, draw)
    }
}

impl<Args: Value + Arbitrary, B: EqTest> EqTest for Uncurried<Args, B> {
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        (0..PROBES).all(|_| match draw.value::<Args>() {
            Some(arguments) => self
                .call(arguments.clone())
                .eq_test(&other.call(arguments), draw),
            None => true,
        })
    }
}

/// Lenses agree when their views agree on drawn sources and their updates
/// agree on drawn replacements.
impl<S, T, A, B> EqTest for Lens<S, T, A, B>
where
    S: Value + Arbitrary,
    T: EqTest,
    A: EqTest,
    B: Value + Arbitrary,
{
    fn eq_test(&self, other: &Self, draw: &mut Draw) -> bool {
        (0..PROBES).all(|_| match (draw.value::<S>(), draw.value::<B>()) {
            (Some(source), Some(replacement)) => {
                self.view(source.clone()).eq_test(&other.view(source.clone()), draw)
                    && self
                        .update(replacement.clone(), source.clone())
                        .eq_test(&other.update(replacement, source), draw)
            }
            _ => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn functions_compare_by_their_outputs() {
        let mut draw = Draw::from_seed(3);
        let double = Function::new(|x: i32| x.wrapping_mul(2));
        let added = Function::new(|x: i32| x.wrapping_add(x));
        let increment = Function::new(|x: i32| x.wrapping_add(1));
        assert!(double.eq_test(&added, &mut draw));
        assert!(!double.eq_test(&increment, &mut draw));
    }

    #[rstest]
    fn containers_of_functions_recurse() {
        let mut draw = Draw::from_seed(4);
        let negate = || Maybe::Just(Function::new(|x: i64| x.wrapping_neg()));
        assert!(negate().eq_test(&negate(), &mut draw));
        assert!(!negate().eq_test(&Maybe::Nothing, &mut draw));
    }

    #[rstest]
    fn dictionaries_ignore_insertion_order() {
        let mut draw = Draw::from_seed(5);
        let forward: Dictionary<i32, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
        let backward: Dictionary<i32, char> = [(2, 'b'), (1, 'a')].into_iter().collect();
        assert!(forward.eq_test(&backward, &mut draw));
    }

    #[rstest]
    fn lenses_compare_view_and_update() {
        let mut draw = Draw::from_seed(6);
        let first = || Lens::new(|(a, _): (i32, i32)| a, |a: i32, (_, b): (i32, i32)| (a, b));
        let second = Lens::new(|(_, b): (i32, i32)| b, |b: i32, (a, _): (i32, i32)| (a, b));
        assert!(first().eq_test(&first(), &mut draw));
        assert!(!first().eq_test(&second, &mut draw));
    }
}
