//! Laws of the classes over plain types.

use proptest::arbitrary::{Arbitrary, any};
use proptest::strategy::{BoxedStrategy, Strategy};

use crate::typeclass::Value;

/// Pairs that are equal about half of the time, so implications with an
/// equality premise are exercised.
fn pairs<T: Value + Arbitrary>() -> BoxedStrategy<(T, T)> {
    (any::<T>(), any::<T>(), any::<bool>())
        .prop_map(|(x, y, same)| if same { (x.clone(), x) } else { (x, y) })
        .boxed()
}

/// Triples sharing values often enough to exercise transitivity.
fn triples<T: Value + Arbitrary>() -> BoxedStrategy<(T, T, T)> {
    (pairs::<T>(), any::<T>(), any::<bool>())
        .prop_map(|((x, y), z, same)| if same { (x, y.clone(), y) } else { (x, y, z) })
        .boxed()
}

/// Laws of [`Eq`](crate::typeclass::Eq).
pub mod eq {
    use proptest::arbitrary::{Arbitrary, any};

    use super::{pairs, triples};
    use crate::function::Function;
    use crate::testing::{LawViolation, verify};
    use crate::typeclass::{EQ, Eq, Value};

    /// `eq(x, x)`
    pub fn reflexivity<T: Eq + Value + Arbitrary>() -> Result<(), LawViolation> {
        verify(&EQ, "reflexivity", any::<T>(), |x, _| Eq::eq(&x, &x))
    }

    /// `eq(x, y) => eq(y, x)`
    pub fn symmetry<T: Eq + Value + Arbitrary>() -> Result<(), LawViolation> {
        verify(&EQ, "symmetry", pairs::<T>(), |(x, y), _| {
            Eq::eq(&x, &y) == Eq::eq(&y, &x)
        })
    }

    /// `eq(x, y) && eq(y, z) => eq(x, z)`
    pub fn transitivity<T: Eq + Value + Arbitrary>() -> Result<(), LawViolation> {
        verify(&EQ, "transitivity", triples::<T>(), |(x, y, z), _| {
            !(Eq::eq(&x, &y) && Eq::eq(&y, &z)) || Eq::eq(&x, &z)
        })
    }

    /// `eq(x, y) => eq(f(x), f(y))`
    pub fn substitutivity<T: Eq + Value + Arbitrary>() -> Result<(), LawViolation> {
        let strategy = (pairs::<T>(), any::<Function<T, i64>>());
        verify(&EQ, "substitutivity", strategy, |((x, y), f), _| {
            !Eq::eq(&x, &y) || f.call(x) == f.call(y)
        })
    }

    /// `neq(x, y) == !eq(x, y)`
    pub fn negation<T: Eq + Value + Arbitrary>() -> Result<(), LawViolation> {
        verify(&EQ, "negation", pairs::<T>(), |(x, y), _| {
            Eq::neq(&x, &y) == !Eq::eq(&x, &y)
        })
    }
}

/// Laws of [`Hashable`](crate::typeclass::Hashable).
pub mod hashable {
    use proptest::arbitrary::Arbitrary;

    use super::pairs;
    use crate::testing::{LawViolation, verify};
    use crate::typeclass::{Eq, HASHABLE, Hashable, Value};

    /// `eq(x, y) => hash(x) == hash(y)`
    pub fn consistency<T: Eq + Hashable + Value + Arbitrary>() -> Result<(), LawViolation> {
        verify(&HASHABLE, "consistency", pairs::<T>(), |(x, y), _| {
            !Eq::eq(&x, &y) || x.hash_value() == y.hash_value()
        })
    }
}

/// Laws of [`Semigroup`](crate::typeclass::Semigroup).
pub mod semigroup {
    use proptest::arbitrary::{Arbitrary, any};

    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{SEMIGROUP, Semigroup, Value};

    /// `append(append(x, y), z) == append(x, append(y, z))`
    pub fn associativity<S: Semigroup + EqTest + Value + Arbitrary>() -> Result<(), LawViolation> {
        verify(&SEMIGROUP, "associativity", any::<(S, S, S)>(), |(x, y, z), draw| {
            let left = x.clone().append(y.clone()).append(z.clone());
            let right = x.append(y.append(z));
            left.eq_test(&right, draw)
        })
    }
}

/// Laws of [`Commutative`](crate::typeclass::Commutative).
pub mod commutative {
    use proptest::arbitrary::{Arbitrary, any};

    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{COMMUTATIVE, Commutative, Value};

    /// `append(x, y) == append(y, x)`
    pub fn commutativity<S: Commutative + EqTest + Value + Arbitrary>()
    -> Result<(), LawViolation> {
        verify(&COMMUTATIVE, "commutativity", any::<(S, S)>(), |(x, y), draw| {
            x.clone().append(y.clone()).eq_test(&y.append(x), draw)
        })
    }
}

/// Laws of [`Monoid`](crate::typeclass::Monoid).
pub mod monoid {
    use proptest::arbitrary::{Arbitrary, any};

    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{MONOID, Monoid, Value};

    /// `append(empty(), x) == x`
    pub fn left_identity<M: Monoid + EqTest + Value + Arbitrary>() -> Result<(), LawViolation> {
        verify(&MONOID, "left_identity", any::<M>(), |x, draw| {
            M::empty().append(x.clone()).eq_test(&x, draw)
        })
    }

    /// `append(x, empty()) == x`
    pub fn right_identity<M: Monoid + EqTest + Value + Arbitrary>() -> Result<(), LawViolation> {
        verify(&MONOID, "right_identity", any::<M>(), |x, draw| {
            x.clone().append(M::empty()).eq_test(&x, draw)
        })
    }
}
