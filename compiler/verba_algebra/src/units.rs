//! Unit-tagged exact integers.
//!
//! `Length` and `Ordinal` share a representation but not a type. Each is an
//! [`Additive`] monoid and a [`Module`] over [`Count`]; multiplying two of
//! them is not expressible.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{CheckedSub, ToPrimitive, Zero};

use crate::count::Count;
use crate::semiring::{Additive, Character, Module};

macro_rules! unit {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) BigUint);

        impl $name {
            #[inline]
            pub fn new(n: impl Into<BigUint>) -> Self {
                $name(n.into())
            }

            #[inline]
            pub fn get(&self) -> &BigUint {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> BigUint {
                self.0
            }

            /// `self - rhs`, or `None` if that would be negative.
            #[inline]
            pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
                CheckedSub::checked_sub(&self.0, &rhs.0).map($name)
            }

            #[inline]
            pub fn to_usize(&self) -> Option<usize> {
                self.0.to_usize()
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                $name(BigUint::from(n))
            }
        }

        impl Additive for $name {
            #[inline]
            fn zero() -> Self {
                $name(BigUint::zero())
            }

            #[inline]
            fn add(&self, rhs: &Self) -> Self {
                $name(&self.0 + &rhs.0)
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl Module<Count> for $name {
            #[inline]
            fn scale_left(scalar: &Count, m: &Self) -> Self {
                $name(&scalar.0 * &m.0)
            }

            #[inline]
            fn scale_right(m: &Self, scalar: &Count) -> Self {
                $name(&m.0 * &scalar.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

unit! {
    /// Volume: a total number of characters.
    Length
}

unit! {
    /// Mass: a sum of 0-based string ranks in generation order.
    ///
    /// When the n-th generated string spells the number n, the mass of a
    /// set of strings is the sum of the numbers they spell.
    Ordinal
}

impl Character for Length {
    /// Every character is one character long.
    #[inline]
    fn char(_: char) -> Self {
        Length(BigUint::from(1u8))
    }
}

impl Character for Ordinal {
    /// A single-character string is the only string of its set, rank 0.
    #[inline]
    fn char(_: char) -> Self {
        Ordinal(BigUint::zero())
    }
}
