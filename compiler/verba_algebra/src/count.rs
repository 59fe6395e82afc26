//! Exact string counts.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::semiring::{Additive, Character, Semiring};

/// The counting interpretation: how many strings an expression generates.
///
/// Every character counts as the multiplicative identity, so `string(s)`
/// evaluates to 1 and `choice(ws)` to the number of words.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(pub(crate) BigUint);

impl Count {
    #[inline]
    pub fn new(n: impl Into<BigUint>) -> Self {
        Count(n.into())
    }

    /// The underlying integer.
    #[inline]
    pub fn get(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

impl From<u64> for Count {
    fn from(n: u64) -> Self {
        Count(BigUint::from(n))
    }
}

impl Additive for Count {
    #[inline]
    fn zero() -> Self {
        Count(BigUint::zero())
    }

    #[inline]
    fn add(&self, rhs: &Self) -> Self {
        Count(&self.0 + &rhs.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Semiring for Count {
    #[inline]
    fn one() -> Self {
        Count(BigUint::one())
    }

    #[inline]
    fn mul(&self, rhs: &Self) -> Self {
        Count(&self.0 * &rhs.0)
    }
}

impl Character for Count {
    #[inline]
    fn char(_: char) -> Self {
        Self::one()
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
