//! Verba Algebra - the algebra every grammar interpretation shares.
//!
//! A grammar is written once against [`Semiring`] + [`Character`] and then
//! evaluated at whichever interpretation answers the question at hand:
//!
//! ```text
//!                    grammar expression
//!                           │
//!      ┌──────────┬─────────┼──────────┬──────────────┐
//!      ▼          ▼         ▼          ▼              ▼
//!    Count      Extent    Pretty     Words      Binary / Trie
//!   (how many) (how long) (debug)  (small sets) (other crates)
//! ```
//!
//! # Units
//!
//! [`Length`] (volume) and [`Ordinal`] (mass) are distinct newtypes over an
//! exact integer. Neither is a semiring: they only add to each other and
//! take scalars from [`Count`] through [`Module`], so a length can never be
//! multiplied by a length or confused with a rank.
//!
//! # Derivatives
//!
//! [`Deriv`] pairs a value with a derivative under Leibniz's rule. With
//! `Deriv<Count, Length>` one evaluation yields both the number of strings
//! and their total length; nesting a second derivative over [`Ordinal`]
//! adds the sum of the strings' ranks.

mod count;
mod deriv;
mod lazy;
mod pretty;
mod semiring;
mod units;
mod words;

pub use count::Count;
pub use deriv::{Deriv, Extent, Measure, Numbering, Ranked};
pub use lazy::Lazy;
pub use pretty::Pretty;
pub use semiring::{choice, product, string, sum, Additive, Character, Module, Semiring};
pub use units::{Length, Ordinal};
pub use words::Words;
