//! Derivative pairs and the measures built from them.
//!
//! `Deriv<R, M>` is the semiring of pairs `(a, a')` with
//!
//! ```text
//! (a, a') + (b, b') = (a + b, a' + b')
//! (a, a') * (b, b') = (a * b, a * b' + a' * b)
//! ```
//!
//! Instantiated at `R = Count`, `M = Length` and lifting each character to
//! `(1, 1)`, the derivative of a grammar is the total length of the strings
//! it generates. No per-string bookkeeping is needed; the product rule
//! carries it.

use crate::count::Count;
use crate::semiring::{Additive, Character, Module, Semiring};
use crate::units::{Length, Ordinal};

/// A value paired with its derivative.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Deriv<R, M> {
    pub value: R,
    pub derivative: M,
}

impl<R, M> Deriv<R, M> {
    #[inline]
    pub fn new(value: R, derivative: M) -> Self {
        Deriv { value, derivative }
    }
}

impl<R: Additive, M: Additive> Additive for Deriv<R, M> {
    fn zero() -> Self {
        Deriv::new(R::zero(), M::zero())
    }

    fn add(&self, rhs: &Self) -> Self {
        Deriv::new(self.value.add(&rhs.value), self.derivative.add(&rhs.derivative))
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero() && self.derivative.is_zero()
    }
}

impl<R: Semiring, M: Module<R>> Semiring for Deriv<R, M> {
    fn one() -> Self {
        Deriv::new(R::one(), M::zero())
    }

    /// Leibniz's rule.
    fn mul(&self, rhs: &Self) -> Self {
        let left = M::scale_left(&self.value, &rhs.derivative);
        let right = M::scale_right(&self.derivative, &rhs.value);
        Deriv::new(self.value.mul(&rhs.value), left.add(&right))
    }
}

impl<R: Character, M: Character> Character for Deriv<R, M> {
    fn char(c: char) -> Self {
        Deriv::new(R::char(c), M::char(c))
    }
}

/// String count and total length (volume).
pub type Extent = Deriv<Count, Length>;

/// String count, volume, and the sum of string ranks (mass).
///
/// The mass is a second derivative taken over an [`Extent`]; it only sees
/// the count component of its scalars.
pub type Ranked = Deriv<Extent, Ordinal>;

impl Module<Extent> for Ordinal {
    #[inline]
    fn scale_left(scalar: &Extent, m: &Self) -> Self {
        <Ordinal as Module<Count>>::scale_left(&scalar.value, m)
    }

    #[inline]
    fn scale_right(m: &Self, scalar: &Extent) -> Self {
        <Ordinal as Module<Count>>::scale_right(m, &scalar.value)
    }
}

/// Read access to the count and volume of a measure.
pub trait Measure {
    /// Number of strings measured.
    fn count(&self) -> &Count;

    /// Total number of characters in those strings.
    fn volume(&self) -> &Length;
}

impl Measure for Extent {
    #[inline]
    fn count(&self) -> &Count {
        &self.value
    }

    #[inline]
    fn volume(&self) -> &Length {
        &self.derivative
    }
}

impl Measure for Ranked {
    #[inline]
    fn count(&self) -> &Count {
        &self.value.value
    }

    #[inline]
    fn volume(&self) -> &Length {
        &self.value.derivative
    }
}

/// A measure that also tracks string ranks and can renumber them.
///
/// Renumbering is linear in the measured strings, so it can be applied to an
/// aggregate without knowing the individual ranks:
///
/// - `shift(n)`: every rank `r` becomes `r + n`, so `mass += n * count`
/// - `stretch(n)`: every rank `r` becomes `r * n`, so `mass *= n`
pub trait Numbering: Measure + Sized {
    /// Sum of the ranks of the measured strings.
    fn mass(&self) -> &Ordinal;

    #[must_use]
    fn shift(&self, by: &Count) -> Self;

    #[must_use]
    fn stretch(&self, by: &Count) -> Self;
}

impl Numbering for Ranked {
    #[inline]
    fn mass(&self) -> &Ordinal {
        &self.derivative
    }

    fn shift(&self, by: &Count) -> Self {
        let offset = Ordinal(&by.0 * &self.count().0);
        Deriv::new(self.value.clone(), self.derivative.add(&offset))
    }

    fn stretch(&self, by: &Count) -> Self {
        let mass = <Ordinal as Module<Count>>::scale_left(by, &self.derivative);
        Deriv::new(self.value.clone(), mass)
    }
}
