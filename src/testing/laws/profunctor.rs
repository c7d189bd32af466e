//! Laws of the profunctor classes.

/// Laws of [`Profunctor`](crate::typeclass::Profunctor).
pub mod profunctor {
    use proptest::arbitrary::{Arbitrary, any};
    use proptest::strategy::Strategy;

    use crate::function::Function;
    use crate::testing::sample::SampleKind2;
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{PROFUNCTOR, Profunctor, Value};

    /// `dimap(p, id, id) == p`
    pub fn identity<P, A>() -> Result<(), LawViolation>
    where
        P: Profunctor + SampleKind2,
        A: Value + Arbitrary,
        P::Of<A, A>: EqTest,
    {
        let strategy = P::sample::<A, A>(any::<A>().boxed());
        verify(&PROFUNCTOR, "identity", strategy, |p, draw| {
            P::dimap(p.clone(), |a: A| a, |b: A| b).eq_test(&p, draw)
        })
    }

    /// `dimap(p, f . g, h . i) == dimap(dimap(p, f, i), g, h)`
    pub fn composition<P, A>() -> Result<(), LawViolation>
    where
        P: Profunctor + SampleKind2,
        A: Value + Arbitrary,
        P::Of<A, A>: EqTest,
    {
        let strategy = (
            P::sample::<A, A>(any::<A>().boxed()),
            any::<(Function<A, A>, Function<A, A>)>(),
            any::<(Function<A, A>, Function<A, A>)>(),
        );
        verify(&PROFUNCTOR, "composition", strategy, |(p, (f, g), (h, i)), draw| {
            let before = g.clone().then(f.clone());
            let after = i.clone().then(h.clone());
            let left = P::dimap(
                p.clone(),
                move |c| before.call(c),
                move |b| after.call(b),
            );
            let inner = P::dimap(p, move |c| f.call(c), move |b| i.call(b));
            let right = P::dimap(inner, move |c| g.call(c), move |b| h.call(b));
            left.eq_test(&right, draw)
        })
    }
}

/// Laws of [`Cartesian`](crate::typeclass::Cartesian).
pub mod cartesian {
    use proptest::arbitrary::{Arbitrary, any};
    use proptest::strategy::Strategy;

    use crate::testing::sample::SampleKind2;
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{CARTESIAN, Cartesian, Value};

    /// `dimap(first(h), |a| (a, ()), |(b, _)| b) == h`
    pub fn unit<P, A>() -> Result<(), LawViolation>
    where
        P: Cartesian + SampleKind2,
        A: Value + Arbitrary,
        P::Of<A, A>: EqTest,
    {
        let strategy = P::sample::<A, A>(any::<A>().boxed());
        verify(&CARTESIAN, "unit", strategy, |h, draw| {
            let lifted = P::first::<A, A, ()>(h.clone());
            P::dimap(lifted, |a: A| (a, ()), |(b, ()): (A, ())| b).eq_test(&h, draw)
        })
    }

    /// `dimap(first(first(h)), lassoc, rassoc) == first(h)`
    pub fn associativity<P, A>() -> Result<(), LawViolation>
    where
        P: Cartesian + SampleKind2,
        A: Value + Arbitrary,
        P::Of<(A, (A, A)), (A, (A, A))>: EqTest,
    {
        let strategy = P::sample::<A, A>(any::<A>().boxed());
        verify(&CARTESIAN, "associativity", strategy, |h, draw| {
            let nested = P::first::<(A, A), (A, A), A>(P::first::<A, A, A>(h.clone()));
            let left = P::dimap(
                nested,
                |(a, (c, d)): (A, (A, A))| ((a, c), d),
                |((b, c), d): ((A, A), A)| (b, (c, d)),
            );
            left.eq_test(&P::first::<A, A, (A, A)>(h), draw)
        })
    }
}

/// Laws of [`Cocartesian`](crate::typeclass::Cocartesian).
pub mod cocartesian {
    use std::convert::Infallible;

    use proptest::arbitrary::{Arbitrary, any};
    use proptest::strategy::Strategy;

    use crate::control::Either;
    use crate::testing::sample::SampleKind2;
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{COCARTESIAN, Cocartesian, Value};

    /// `dimap(left(h), Left, |e| e.fold(id, absurd)) == h`
    pub fn unit<P, A>() -> Result<(), LawViolation>
    where
        P: Cocartesian + SampleKind2,
        A: Value + Arbitrary,
        P::Of<A, A>: EqTest,
    {
        let strategy = P::sample::<A, A>(any::<A>().boxed());
        verify(&COCARTESIAN, "unit", strategy, |h, draw| {
            let lifted = P::left::<A, A, Infallible>(h.clone());
            let unwrapped = P::dimap(lifted, Either::Left, |result: Either<A, Infallible>| {
                match result {
                    Either::Left(b) => b,
                    Either::Right(never) => match never {},
                }
            });
            unwrapped.eq_test(&h, draw)
        })
    }

    /// `dimap(left(left(h)), lassoc, rassoc) == left(h)`
    pub fn associativity<P, A>() -> Result<(), LawViolation>
    where
        P: Cocartesian + SampleKind2,
        A: Value + Arbitrary,
        P::Of<Either<A, Either<A, A>>, Either<A, Either<A, A>>>: EqTest,
    {
        let strategy = P::sample::<A, A>(any::<A>().boxed());
        verify(&COCARTESIAN, "associativity", strategy, |h, draw| {
            let nested = P::left::<Either<A, A>, Either<A, A>, A>(P::left::<A, A, A>(h.clone()));
            let left = P::dimap(nested, left_associate::<A>, right_associate::<A>);
            left.eq_test(&P::left::<A, A, Either<A, A>>(h), draw)
        })
    }

    fn left_associate<A>(value: Either<A, Either<A, A>>) -> Either<Either<A, A>, A> {
        match value {
            Either::Left(a) => Either::Left(Either::Left(a)),
            Either::Right(Either::Left(c)) => Either::Left(Either::Right(c)),
            Either::Right(Either::Right(d)) => Either::Right(d),
        }
    }

    fn right_associate<A>(value: Either<Either<A, A>, A>) -> Either<A, Either<A, A>> {
        match value {
            Either::Left(Either::Left(b)) => Either::Left(b),
            Either::Left(Either::Right(c)) => Either::Right(Either::Left(c)),
            Either::Right(d) => Either::Right(Either::Right(d)),
        }
    }
}
