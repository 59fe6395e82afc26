//! The interface every interpretation implements, and the combinators that
//! build grammar expressions from it.
//!
//! The traits are layered so that each type only promises what it can keep:
//!
//! - [`Additive`]: commutative monoid (`zero`, `add`)
//! - [`Semiring`]: adds a monoid (`one`, `mul`) that distributes over `add`
//! - [`Module`]: additive values that accept scalars from a semiring
//! - [`Character`]: lifts a single character
//!
//! Nothing here checks the laws at runtime; the property tests in
//! `tests/laws.rs` do.

/// A commutative monoid under `add` with identity `zero`.
pub trait Additive: Clone {
    /// The additive identity.
    fn zero() -> Self;

    /// Associative, commutative addition.
    fn add(&self, rhs: &Self) -> Self;

    /// Whether this is the additive identity.
    fn is_zero(&self) -> bool;
}

/// An [`Additive`] monoid with an associative `mul` that has identity `one`
/// and distributes over `add` on both sides.
///
/// `add` reads as "choice between two sets of strings", `mul` as
/// "concatenate every string of the left with every string of the right".
pub trait Semiring: Additive {
    /// The multiplicative identity.
    fn one() -> Self;

    /// Associative multiplication.
    fn mul(&self, rhs: &Self) -> Self;
}

/// Lift a single character into an interpretation.
pub trait Character {
    fn char(c: char) -> Self;
}

/// Scalar actions of a semiring `R` on an additive type.
///
/// Both sides are provided because [`Deriv`](crate::Deriv) multiplication
/// needs `a * b'` (scalar on the left) and `a' * b` (scalar on the right).
pub trait Module<R>: Additive {
    /// `scalar * m`
    fn scale_left(scalar: &R, m: &Self) -> Self;

    /// `m * scalar`
    fn scale_right(m: &Self, scalar: &R) -> Self;
}

/// Multiply factors left to right, starting from `one`.
pub fn product<S: Semiring>(factors: impl IntoIterator<Item = S>) -> S {
    factors
        .into_iter()
        .fold(S::one(), |acc, factor| acc.mul(&factor))
}

/// Add terms left to right, starting from `zero`.
pub fn sum<S: Additive>(terms: impl IntoIterator<Item = S>) -> S {
    terms.into_iter().fold(S::zero(), |acc, term| acc.add(&term))
}

/// The single string `s`, as the product of its characters.
pub fn string<S: Semiring + Character>(s: &str) -> S {
    product(s.chars().map(S::char))
}

/// A choice between the whitespace-separated words of `words`, in order.
///
/// ```text
/// choice::<Words>("one two") == ["one", "two"]
/// ```
pub fn choice<S: Semiring + Character>(words: &str) -> S {
    sum(words.split_whitespace().map(string))
}
