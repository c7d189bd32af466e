//! Laws of the folding classes.

/// Laws of [`Foldable`](crate::typeclass::Foldable).
///
/// Besides `fold_map` agreeing with `fold . map`, every operation an
/// instance may override is compared with the default body it replaces.
pub mod foldable {
    use std::ops::Add;

    use proptest::arbitrary::{Arbitrary, any};
    use proptest::strategy::Strategy;

    use crate::function::Function;
    use crate::testing::sample::{SampleKind, sample};
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{Eq, FOLDABLE, Foldable, Functor, Sum, Value, defaults};
    use crate::types::List;

    fn push<A>(mut elements: Vec<A>, a: A) -> Vec<A> {
        elements.push(a);
        elements
    }

    fn cons<A>(a: A, mut elements: Vec<A>) -> Vec<A> {
        elements.insert(0, a);
        elements
    }

    /// `fold_map(xs, f) == fold(map(xs, f))`
    ///
    /// Folds into [`Sum`], whose order does not matter, since `map` may
    /// rebuild an unordered structure.
    pub fn fold_map_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Foldable + Functor + SampleKind,
        A: Value + Arbitrary,
    {
        let strategy = (sample::<F, A>(), any::<Function<A, Sum>>());
        verify(&FOLDABLE, "fold_map_consistency", strategy, |(xs, f), draw| {
            let g = f.clone();
            let direct = F::fold_map(&xs, move |a| f.call(a));
            let mapped = F::map(xs, move |a| g.call(a));
            direct.eq_test(&F::fold(&mapped), draw)
        })
    }

    /// `fold_map(xs, f) == default fold_map(xs, f)`
    ///
    /// Folds into `List`, so an override visiting elements in another order
    /// than `foldl` fails.
    pub fn fold_map_default_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Foldable + SampleKind,
        A: Value + Arbitrary + EqTest,
    {
        let strategy = (sample::<F, A>(), any::<Function<A, A>>());
        verify(&FOLDABLE, "fold_map_default_consistency", strategy, |(xs, f), draw| {
            let g = f.clone();
            let own = F::fold_map(&xs, move |a| List::singleton(f.call(a)));
            let default =
                defaults::fold_map::<F, A, List<A>>(&xs, move |a| List::singleton(g.call(a)));
            own.eq_test(&default, draw)
        })
    }

    /// `foldl(xs, z, f) == default foldl(xs, z, f)`
    pub fn foldl_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Foldable + SampleKind,
        A: Value + Arbitrary + EqTest,
    {
        verify(&FOLDABLE, "foldl_consistency", sample::<F, A>(), |xs, draw| {
            let own = F::foldl(&xs, Vec::new(), push::<A>);
            own.eq_test(&defaults::foldl::<F, A, _>(&xs, Vec::new(), push::<A>), draw)
        })
    }

    /// `foldr(xs, z, f) == default foldr(xs, z, f)`
    pub fn foldr_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Foldable + SampleKind,
        A: Value + Arbitrary + EqTest,
    {
        verify(&FOLDABLE, "foldr_consistency", sample::<F, A>(), |xs, draw| {
            let own = F::foldr(&xs, Vec::new(), cons::<A>);
            own.eq_test(&defaults::foldr::<F, A, _>(&xs, Vec::new(), cons::<A>), draw)
        })
    }

    /// `length(xs) == default length(xs)`
    pub fn length_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Foldable + SampleKind,
        A: Value + Arbitrary,
    {
        verify(&FOLDABLE, "length_consistency", sample::<F, A>(), |xs, _| {
            F::length(&xs) == defaults::length::<F, A>(&xs)
        })
    }

    /// `null(xs) == default null(xs)`
    pub fn null_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Foldable + SampleKind,
        A: Value + Arbitrary,
    {
        verify(&FOLDABLE, "null_consistency", sample::<F, A>(), |xs, _| {
            F::null(&xs) == defaults::null::<F, A>(&xs)
        })
    }

    /// `sum(xs) == default sum(xs)`
    ///
    /// Elements are drawn from `i8` so that no sum overflows.
    pub fn sum_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Foldable + SampleKind,
        A: Value + From<i8> + Add<Output = A> + Default + Eq,
    {
        let strategy = F::sample(any::<i8>().prop_map(<A as From<i8>>::from).boxed());
        verify(&FOLDABLE, "sum_consistency", strategy, |xs, _| {
            Eq::eq(&F::sum(&xs), &defaults::sum::<F, A>(&xs))
        })
    }

    /// `elem(xs, x) == default elem(xs, x)`
    ///
    /// Half of the probes look for the first element, so hits are as common
    /// as misses.
    pub fn elem_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Foldable + SampleKind,
        A: Value + Arbitrary + Eq,
    {
        let strategy = (sample::<F, A>(), any::<A>(), any::<bool>());
        verify(&FOLDABLE, "elem_consistency", strategy, |(xs, x, present), _| {
            let probe = if present { F::head(&xs, x) } else { x };
            F::elem(&xs, probe.clone()) == defaults::elem::<F, A>(&xs, probe)
        })
    }
}

/// Laws of [`Traversable`](crate::typeclass::Traversable).
pub mod traversable {
    use proptest::arbitrary::{Arbitrary, any};

    use crate::function::{Function, FunctionKind};
    use crate::testing::sample::{SampleKind, sample};
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{Functor, Identity, IdentityKind, TRAVERSABLE, Traversable, Value};
    use crate::types::{ComposeKind, Composed, List, ListKind, Maybe, MaybeKind};

    type ReadingMaybe = ComposeKind<MaybeKind, FunctionKind<i32>>;

    /// The applicative morphism used to check naturality.
    fn to_list<A>(maybe: Maybe<A>) -> List<A> {
        match maybe {
            Maybe::Just(a) => List::from(vec![a]),
            Maybe::Nothing => List::from(Vec::new()),
        }
    }

    /// `to_list(traverse(x, f)) == traverse(x, to_list . f)`
    pub fn naturality<T, A>() -> Result<(), LawViolation>
    where
        T: Traversable + SampleKind,
        A: Value + Arbitrary,
        T::Of<A>: EqTest,
    {
        let strategy = (sample::<T, A>(), any::<Function<A, Maybe<A>>>());
        verify(&TRAVERSABLE, "naturality", strategy, |(x, f), draw| {
            let g = f.clone();
            let left = to_list(T::traverse::<MaybeKind, A, A>(x.clone(), move |a| f.call(a)));
            let right = T::traverse::<ListKind, A, A>(x, move |a| to_list(g.call(a)));
            left.eq_test(&right, draw)
        })
    }

    /// `traverse(x, Identity) == Identity(x)`
    pub fn identity<T, A>() -> Result<(), LawViolation>
    where
        T: Traversable + SampleKind,
        A: Value + Arbitrary,
        T::Of<A>: EqTest,
    {
        verify(&TRAVERSABLE, "identity", sample::<T, A>(), |x, draw| {
            T::traverse::<IdentityKind, A, A>(x.clone(), Identity).eq_test(&Identity(x), draw)
        })
    }

    /// `traverse(x, Compose . map(g) . f) == Compose(map(traverse(x, f), traverse(g)))`
    ///
    /// The outer effect is `Maybe` and the inner one reads an `i32`.
    pub fn composition<T, A>() -> Result<(), LawViolation>
    where
        T: Traversable + SampleKind,
        A: Value + Arbitrary,
        T::Of<A>: EqTest,
    {
        let strategy = (
            sample::<T, A>(),
            any::<Function<A, Maybe<A>>>(),
            any::<Function<A, Function<i32, A>>>(),
        );
        verify(&TRAVERSABLE, "composition", strategy, |(x, f, g), draw| {
            let (f2, g2) = (f.clone(), g.clone());
            let fused = T::traverse::<ReadingMaybe, A, A>(x.clone(), move |a| {
                let g = g.clone();
                let readers = MaybeKind::map(f.call(a), move |b| g.call(b));
                Composed::<MaybeKind, FunctionKind<i32>, A>(readers)
            });
            let outer = T::traverse::<MaybeKind, A, A>(x, move |a| f2.call(a));
            let readers = MaybeKind::map(outer, move |y| {
                let g = g2.clone();
                T::traverse::<FunctionKind<i32>, A, A>(y, move |b| g.call(b))
            });
            let nested = Composed::<MaybeKind, FunctionKind<i32>, T::Of<A>>(readers);
            fused.eq_test(&nested, draw)
        })
    }

    /// `sequence(x) == traverse(x, id)`, with `Maybe` effects.
    pub fn sequence_consistency<T, A>() -> Result<(), LawViolation>
    where
        T: Traversable + SampleKind,
        A: Value + Arbitrary,
        T::Of<A>: EqTest,
    {
        let strategy = T::sample(sample::<MaybeKind, A>());
        verify(&TRAVERSABLE, "sequence_consistency", strategy, |x, draw| {
            let sequenced = T::sequence::<MaybeKind, A>(x.clone());
            sequenced.eq_test(&T::traverse::<MaybeKind, Maybe<A>, A>(x, |ma| ma), draw)
        })
    }

    /// `traverse(x, f) == sequence(map(x, f))`, with `Maybe` effects.
    pub fn traverse_consistency<T, A>() -> Result<(), LawViolation>
    where
        T: Traversable + SampleKind,
        A: Value + Arbitrary,
        T::Of<A>: EqTest,
    {
        let strategy = (sample::<T, A>(), any::<Function<A, Maybe<A>>>());
        verify(&TRAVERSABLE, "traverse_consistency", strategy, |(x, f), draw| {
            let g = f.clone();
            let traversed = T::traverse::<MaybeKind, A, A>(x.clone(), move |a| f.call(a));
            let mapped = T::map(x, move |a| g.call(a));
            traversed.eq_test(&T::sequence::<MaybeKind, A>(mapped), draw)
        })
    }
}
