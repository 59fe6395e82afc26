//! The grammar expression.

use std::fmt;
use std::str::FromStr;

use verba_algebra::{choice, string, Additive, Character, Semiring};

use crate::lexicon::{
    HUNDRED, MILLION, ONES, TEEN, TEEN_ROOTS, TENS_ROOTS, TEN_TO_TWELVE, THOUSAND, TY,
};

/// The number ranges, each built from the ones before it.
///
/// ```text
/// d1 = one + two + ... + nine
/// d2 = d1 + (ten + eleven + twelve) + (thir + ... + nine) * teen
///         + (twen + ... + nine) * ty * (1 + d1)
/// d3 = d2 + d1 * hundred  * (1 + d2)
/// d6 = d3 + d3 * thousand * (1 + d3)
/// d9 = d6 + d3 * million  * (1 + d6)
/// ```
///
/// Sub-ranges are shared, not rebuilt: for the lazy interpretations `d9`
/// reuses the very nodes of `d3` and `d6`.
#[derive(Clone, Debug)]
pub struct Numerals<S> {
    /// 1 through 9.
    pub d1: S,
    /// 1 through 99.
    pub d2: S,
    /// 1 through 999.
    pub d3: S,
    /// 1 through 999,999.
    pub d6: S,
    /// 1 through 999,999,999.
    pub d9: S,
}

impl<S: Semiring + Character> Numerals<S> {
    /// Every range, up to `d9`.
    pub fn build() -> Self {
        Self::up_to(Digits::Nine)
    }

    /// The ranges up to and including `top`; larger ranges are left `zero`.
    ///
    /// Strict interpretations such as `Words` materialize every string, so
    /// they can only afford the small ranges.
    pub fn up_to(top: Digits) -> Self {
        let optional = |s: &S| S::one().add(s);

        let d1: S = choice(ONES);
        let d2 = when(top >= Digits::Two, || {
            let teens = choice::<S>(TEN_TO_TWELVE)
                .add(&choice::<S>(TEEN_ROOTS).mul(&string(TEEN)));
            let tens = choice::<S>(TENS_ROOTS)
                .mul(&string(TY))
                .mul(&optional(&d1));
            d1.add(&teens).add(&tens)
        });
        let d3 = when(top >= Digits::Three, || {
            d2.add(&d1.mul(&string(HUNDRED)).mul(&optional(&d2)))
        });
        let d6 = when(top >= Digits::Six, || {
            d3.add(&d3.mul(&string(THOUSAND)).mul(&optional(&d3)))
        });
        let d9 = when(top >= Digits::Nine, || {
            d6.add(&d3.mul(&string(MILLION)).mul(&optional(&d6)))
        });

        Numerals { d1, d2, d3, d6, d9 }
    }
}

fn when<S: Additive>(enabled: bool, range: impl FnOnce() -> S) -> S {
    if enabled {
        range()
    } else {
        S::zero()
    }
}

impl<S> Numerals<S> {
    pub fn get(&self, digits: Digits) -> &S {
        match digits {
            Digits::One => &self.d1,
            Digits::Two => &self.d2,
            Digits::Three => &self.d3,
            Digits::Six => &self.d6,
            Digits::Nine => &self.d9,
        }
    }
}

/// Selects one of the [`Numerals`] ranges by its largest digit count.
///
/// Ordered from the smallest range to the largest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Digits {
    One,
    Two,
    Three,
    Six,
    Nine,
}

impl Digits {
    pub const ALL: [Digits; 5] = [
        Digits::One,
        Digits::Two,
        Digits::Three,
        Digits::Six,
        Digits::Nine,
    ];

    pub fn count(self) -> u8 {
        match self {
            Digits::One => 1,
            Digits::Two => 2,
            Digits::Three => 3,
            Digits::Six => 6,
            Digits::Nine => 9,
        }
    }
}

impl FromStr for Digits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digits::ALL
            .into_iter()
            .find(|digits| s == format!("d{}", digits.count()) || s == digits.count().to_string())
            .ok_or_else(|| format!("unknown range '{s}' (expected one of d1, d2, d3, d6, d9)"))
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.count())
    }
}
