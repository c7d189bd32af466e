//! The optic traits, composition and the runners.

use std::fmt;

use crate::function::{Function, FunctionArrow};
use crate::typeclass::{TypeConstructor2, Value};
use crate::types::{Lens, LensKind};

/// The four types an optic relates.
///
/// An optic turns a transformation of the focus (`Focus -> Replacement`)
/// into a transformation of the whole (`Source -> Target`).
pub trait Optic: Clone {
    /// The structure going in.
    type Source: Value;
    /// The structure coming out.
    type Target: Value;
    /// The part looked at.
    type Focus: Value;
    /// What the part is replaced with.
    type Replacement: Value;

    /// Composes with an optic focusing inside this one's focus.
    ///
    /// ```rust
    /// use lawful::optics::{Optic, lens, over};
    ///
    /// let outer = lens(|pair: ((i32, char), bool)| pair.0, |inner: (i32, char), pair: ((i32, char), bool)| (inner, pair.1));
    /// let inner = lens(|pair: (i32, char)| pair.0, |value: i32, pair: (i32, char)| (value, pair.1));
    /// let increment = over(&outer.then(inner), |x| x + 1);
    /// assert_eq!(increment.call(((1, 'a'), true)), ((2, 'a'), true));
    /// ```
    fn then<I>(self, inner: I) -> Then<Self, I>
    where
        I: Optic<Source = Self::Focus, Target = Self::Replacement>,
    {
        Then { outer: self, inner }
    }
}

/// An optic that can run at the profunctor `P`.
pub trait OpticAt<P: TypeConstructor2>: Optic {
    /// Lifts `p` from the focus to the whole structure.
    fn run(
        &self,
        p: P::Of<Self::Focus, Self::Replacement>,
    ) -> P::Of<Self::Source, Self::Target>;
}

/// Two optics, `outer` applied after `inner`.
#[derive(Clone)]
pub struct Then<O, I> {
    outer: O,
    inner: I,
}

impl<O: fmt::Debug, I: fmt::Debug> fmt::Debug for Then<O, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?} . {:?}", self.outer, self.inner)
    }
}

impl<O, I> Optic for Then<O, I>
where
    O: Optic,
    I: Optic<Source = O::Focus, Target = O::Replacement>,
{
    type Source = O::Source;
    type Target = O::Target;
    type Focus = I::Focus;
    type Replacement = I::Replacement;
}

impl<P, O, I> OpticAt<P> for Then<O, I>
where
    P: TypeConstructor2,
    O: OpticAt<P>,
    I: OpticAt<P> + Optic<Source = O::Focus, Target = O::Replacement>,
{
    fn run(&self, p: P::Of<I::Focus, I::Replacement>) -> P::Of<O::Source, O::Target> {
        self.outer.run(self.inner.run(p))
    }
}

/// Runs `optic` on a plain function, which is wrapped as a [`Function`] so
/// the function profunctor's capabilities apply.
pub fn over<O: OpticAt<FunctionArrow>>(
    optic: &O,
    function: impl Fn(O::Focus) -> O::Replacement + 'static,
) -> Function<O::Source, O::Target> {
    optic.run(Function::new(function))
}

/// Replaces every focus of `source` with `value`.
pub fn set<O: OpticAt<FunctionArrow>>(optic: &O, value: O::Replacement, source: O::Source) -> O::Target {
    over(optic, move |_| value.clone()).call(source)
}

/// Extracts a first-class [`Lens`] from a lens-like optic by running it on
/// the identity lens.
///
/// ```rust
/// use lawful::optics::{lens, to_lens};
///
/// let first = lens(|pair: (i32, char)| pair.0, |value: i32, pair: (i32, char)| (value, pair.1));
/// let concrete = to_lens(&first);
/// assert_eq!(concrete.view((3, 'x')), 3);
/// assert_eq!(concrete.update(4, (3, 'x')), (4, 'x'));
/// ```
pub fn to_lens<O>(optic: &O) -> Lens<O::Source, O::Target, O::Focus, O::Replacement>
where
    O: OpticAt<LensKind<<O as Optic>::Focus, <O as Optic>::Replacement>>,
{
    optic.run(Lens::identity())
}

/// Reads the focus of `source` through a lens-like optic.
pub fn view<O>(optic: &O, source: O::Source) -> O::Focus
where
    O: OpticAt<LensKind<<O as Optic>::Focus, <O as Optic>::Replacement>>,
{
    to_lens(optic).view(source)
}
