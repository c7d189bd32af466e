//! Laws of the classes over type constructors of one argument.
//!
//! Each law is generic over the witness `F` and an element type `A`; the
//! functions a law quantifies over are sampled as `A -> A`.

use proptest::arbitrary::{Arbitrary, any};
use proptest::strategy::{BoxedStrategy, Strategy};

use crate::function::Function;
use crate::testing::sample::SampleKind;
use crate::typeclass::{Functor, Value};

/// Containers of sampled `A -> A` functions.
fn function_containers<F: SampleKind, A: Value + Arbitrary>() -> BoxedStrategy<F::Of<Function<A, A>>>
{
    F::sample(any::<Function<A, A>>().boxed())
}

/// `g ↦ (f ↦ g . f)`, the function `compose` of the composition laws.
fn composer<A: Value>() -> Function<Function<A, A>, Function<Function<A, A>, Function<A, A>>> {
    Function::named("compose", |outer: Function<A, A>| {
        Function::new(move |inner: Function<A, A>| inner.then(outer.clone()))
    })
}

/// `apply(apply(w, v), u)` and `apply(w, apply(v, map(u, compose)))`.
fn composition_sides<F: crate::typeclass::Apply, A: Value>(
    w: F::Of<A>,
    v: F::Of<Function<A, A>>,
    u: F::Of<Function<A, A>>,
) -> (F::Of<A>, F::Of<A>) {
    let left = F::apply(F::apply(w.clone(), v.clone()), u.clone());
    let composer = composer::<A>();
    let composed = F::map(u, move |outer| composer.call(outer));
    let right = F::apply(w, F::apply(v, composed));
    (left, right)
}

fn identity_map<F: Functor, A: Value>(fa: F::Of<A>) -> F::Of<A> {
    F::map(fa, |a: A| a)
}

/// Laws of [`Functor`](crate::typeclass::Functor).
pub mod functor {
    use proptest::arbitrary::{Arbitrary, any};

    use super::{function_containers, identity_map};
    use crate::function::Function;
    use crate::testing::sample::{SampleKind, sample};
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{FUNCTOR, Functor, Value};

    /// `map(x, id) == x`
    pub fn identity<F, A>() -> Result<(), LawViolation>
    where
        F: Functor + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        verify(&FUNCTOR, "identity", sample::<F, A>(), |fa, draw| {
            identity_map::<F, A>(fa.clone()).eq_test(&fa, draw)
        })
    }

    /// `map(x, g . f) == map(map(x, f), g)`
    pub fn composition<F, A>() -> Result<(), LawViolation>
    where
        F: Functor + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (
            sample::<F, A>(),
            any::<Function<A, A>>(),
            any::<Function<A, A>>(),
        );
        verify(&FUNCTOR, "composition", strategy, |(fa, f, g), draw| {
            let fused = f.clone().then(g.clone());
            let left = F::map(fa.clone(), move |a| fused.call(a));
            let right = F::map(F::map(fa, move |a| f.call(a)), move |a| g.call(a));
            left.eq_test(&right, draw)
        })
    }

    /// `replace(b, x) == map(x, |_| b)`
    pub fn replace_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Functor + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (sample::<F, A>(), any::<A>());
        verify(&FUNCTOR, "replace_consistency", strategy, |(x, b), draw| {
            let constant = b.clone();
            let left = F::replace(b, x.clone());
            left.eq_test(&F::map(x, move |_| constant.clone()), draw)
        })
    }

    /// `flap(fs, a) == map(fs, |f| f(a))`
    pub fn flap_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Functor + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (function_containers::<F, A>(), any::<A>());
        verify(&FUNCTOR, "flap_consistency", strategy, |(fs, a), draw| {
            let argument = a.clone();
            let left = F::flap(fs.clone(), a);
            left.eq_test(&F::map(fs, move |f| f.call(argument.clone())), draw)
        })
    }
}

/// Laws of [`Contravariant`](crate::typeclass::Contravariant).
pub mod contravariant {
    use proptest::arbitrary::{Arbitrary, any};

    use crate::function::Function;
    use crate::testing::sample::{SampleKind, sample};
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{CONTRAVARIANT, Contravariant, Value};

    /// `contramap(x, id) == x`
    pub fn identity<F, A>() -> Result<(), LawViolation>
    where
        F: Contravariant + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        verify(&CONTRAVARIANT, "identity", sample::<F, A>(), |fa, draw| {
            F::contramap(fa.clone(), |a: A| a).eq_test(&fa, draw)
        })
    }

    /// `contramap(x, f . g) == contramap(contramap(x, f), g)`
    pub fn composition<F, A>() -> Result<(), LawViolation>
    where
        F: Contravariant + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (
            sample::<F, A>(),
            any::<Function<A, A>>(),
            any::<Function<A, A>>(),
        );
        verify(&CONTRAVARIANT, "composition", strategy, |(fa, f, g), draw| {
            let fused = g.clone().then(f.clone());
            let left = F::contramap(fa.clone(), move |a| fused.call(a));
            let right = F::contramap(F::contramap(fa, move |a| f.call(a)), move |a| g.call(a));
            left.eq_test(&right, draw)
        })
    }
}

/// Laws of [`Apply`](crate::typeclass::Apply).
pub mod apply {
    use proptest::arbitrary::Arbitrary;

    use super::{composition_sides, function_containers};
    use crate::testing::sample::{SampleKind, sample};
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{APPLY, Apply, Value};

    /// `apply(apply(w, v), u) == apply(w, apply(v, map(u, compose)))`
    pub fn composition<F, A>() -> Result<(), LawViolation>
    where
        F: Apply + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (
            sample::<F, A>(),
            function_containers::<F, A>(),
            function_containers::<F, A>(),
        );
        verify(&APPLY, "composition", strategy, |(w, v, u), draw| {
            let (left, right) = composition_sides::<F, A>(w, v, u);
            left.eq_test(&right, draw)
        })
    }

    /// `apply_to(fs, x) == apply(x, fs)`
    pub fn apply_to_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Apply + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (sample::<F, A>(), function_containers::<F, A>());
        verify(&APPLY, "apply_to_consistency", strategy, |(x, fs), draw| {
            let left = F::apply_to::<A, A>(fs.clone(), x.clone());
            left.eq_test(&F::apply(x, fs), draw)
        })
    }

    /// `apply_first(x, y) == lift2(x, y, |a, _| a)`
    pub fn apply_first_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Apply + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (sample::<F, A>(), sample::<F, A>());
        verify(&APPLY, "apply_first_consistency", strategy, |(x, y), draw| {
            let left = F::apply_first::<A, A>(x.clone(), y.clone());
            left.eq_test(&F::lift2(x, y, |a: A, _: A| a), draw)
        })
    }

    /// `apply_second(x, y) == lift2(x, y, |_, b| b)`
    pub fn apply_second_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Apply + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (sample::<F, A>(), sample::<F, A>());
        verify(&APPLY, "apply_second_consistency", strategy, |(x, y), draw| {
            let left = F::apply_second::<A, A>(x.clone(), y.clone());
            left.eq_test(&F::lift2(x, y, |_: A, b: A| b), draw)
        })
    }
}

/// Laws of [`Applicative`](crate::typeclass::Applicative).
pub mod applicative {
    use proptest::arbitrary::{Arbitrary, any};

    use super::{composition_sides, function_containers};
    use crate::function::Function;
    use crate::testing::sample::{SampleKind, sample};
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{APPLICATIVE, Applicative, Value};

    /// `apply(v, pure(id)) == v`
    pub fn identity<F, A>() -> Result<(), LawViolation>
    where
        F: Applicative + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        verify(&APPLICATIVE, "identity", sample::<F, A>(), |v, draw| {
            F::apply(v.clone(), F::pure(Function::<A, A>::identity())).eq_test(&v, draw)
        })
    }

    /// `apply(pure(x), pure(f)) == pure(f(x))`
    pub fn homomorphism<F, A>() -> Result<(), LawViolation>
    where
        F: Applicative + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (any::<A>(), any::<Function<A, A>>());
        verify(&APPLICATIVE, "homomorphism", strategy, |(x, f), draw| {
            let left = F::apply(F::pure(x.clone()), F::pure(f.clone()));
            left.eq_test(&F::pure(f.call(x)), draw)
        })
    }

    /// `apply(pure(y), u) == apply(u, pure(|f| f(y)))`
    pub fn interchange<F, A>() -> Result<(), LawViolation>
    where
        F: Applicative + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (any::<A>(), function_containers::<F, A>());
        verify(&APPLICATIVE, "interchange", strategy, |(y, u), draw| {
            let left = F::apply(F::pure(y.clone()), u.clone());
            let feed = Function::named("feed", move |f: Function<A, A>| f.call(y.clone()));
            left.eq_test(&F::apply(u, F::pure(feed)), draw)
        })
    }

    /// `apply(apply(w, v), u) == apply(w, apply(v, map(u, compose)))`
    pub fn composition<F, A>() -> Result<(), LawViolation>
    where
        F: Applicative + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (
            sample::<F, A>(),
            function_containers::<F, A>(),
            function_containers::<F, A>(),
        );
        verify(&APPLICATIVE, "composition", strategy, |(w, v, u), draw| {
            let (left, right) = composition_sides::<F, A>(w, v, u);
            left.eq_test(&right, draw)
        })
    }

    /// `map(x, f) == apply(x, pure(f))`
    pub fn map_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Applicative + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (sample::<F, A>(), any::<Function<A, A>>());
        verify(&APPLICATIVE, "map_consistency", strategy, |(x, f), draw| {
            let g = f.clone();
            let left = F::map(x.clone(), move |a| f.call(a));
            left.eq_test(&F::map_via_apply(x, move |a| g.call(a)), draw)
        })
    }
}

/// Laws of [`Bind`](crate::typeclass::Bind).
pub mod bind {
    use proptest::arbitrary::Arbitrary;

    use super::function_containers;
    use crate::testing::draw::functions;
    use crate::testing::sample::{SampleKind, sample};
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{BIND, Bind, Value};

    /// `bind(bind(x, f), g) == bind(x, |a| bind(f(a), g))`
    pub fn associativity<F, A>() -> Result<(), LawViolation>
    where
        F: Bind + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (
            sample::<F, A>(),
            functions::<A, F::Of<A>>(sample::<F, A>()),
            functions::<A, F::Of<A>>(sample::<F, A>()),
        );
        verify(&BIND, "associativity", strategy, |(x, f, g), draw| {
            let (f2, g2) = (f.clone(), g.clone());
            let left = F::bind(F::bind(x.clone(), move |a| f.call(a)), move |a| g.call(a));
            let right = F::bind(x, move |a| {
                let g2 = g2.clone();
                F::bind(f2.call(a), move |b| g2.call(b))
            });
            left.eq_test(&right, draw)
        })
    }

    /// `apply(x, fs) == bind(fs, |f| map(x, f))`
    pub fn apply_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Bind + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (sample::<F, A>(), function_containers::<F, A>());
        verify(&BIND, "apply_consistency", strategy, |(x, fs), draw| {
            let left = F::apply(x.clone(), fs.clone());
            let right = F::apply_via_bind::<A, A>(x, fs);
            left.eq_test(&right, draw)
        })
    }

    /// `join(x) == bind(x, id)`
    pub fn join_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Bind + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        verify(&BIND, "join_consistency", F::sample(sample::<F, A>()), |x, draw| {
            let left = F::join::<A>(x.clone());
            left.eq_test(&F::bind(x, |inner: F::Of<A>| inner), draw)
        })
    }
}

/// Laws of [`Monad`](crate::typeclass::Monad).
pub mod monad {
    use proptest::arbitrary::{Arbitrary, any};

    use crate::function::Function;
    use crate::testing::draw::functions;
    use crate::testing::sample::{SampleKind, sample};
    use crate::testing::{EqTest, LawViolation, verify};
    use crate::typeclass::{MONAD, Monad, Value};

    /// `bind(pure(a), f) == f(a)`
    pub fn left_identity<F, A>() -> Result<(), LawViolation>
    where
        F: Monad + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (any::<A>(), functions::<A, F::Of<A>>(sample::<F, A>()));
        verify(&MONAD, "left_identity", strategy, |(a, f), draw| {
            let expected = f.call(a.clone());
            F::bind(F::pure(a), move |x| f.call(x)).eq_test(&expected, draw)
        })
    }

    /// `bind(m, pure) == m`
    pub fn right_identity<F, A>() -> Result<(), LawViolation>
    where
        F: Monad + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        verify(&MONAD, "right_identity", sample::<F, A>(), |m, draw| {
            F::bind(m.clone(), |a: A| F::pure(a)).eq_test(&m, draw)
        })
    }

    /// `map(x, f) == bind(x, |a| pure(f(a)))`
    pub fn map_consistency<F, A>() -> Result<(), LawViolation>
    where
        F: Monad + SampleKind,
        A: Value + Arbitrary,
        F::Of<A>: EqTest,
    {
        let strategy = (sample::<F, A>(), any::<Function<A, A>>());
        verify(&MONAD, "map_consistency", strategy, |(x, f), draw| {
            let g = f.clone();
            let left = F::map(x.clone(), move |a| f.call(a));
            left.eq_test(&F::map_via_bind(x, move |a| g.call(a)), draw)
        })
    }
}
