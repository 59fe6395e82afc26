//! Verba Grammar - the English spellings of 1 through 999,999,999.
//!
//! [`Numerals::build`] assembles the grammar once for any interpretation.
//! Each range is generated in ascending numeric order, so the n-th string of
//! `d9` (counting from 1) spells n. [`spell`] spells a single number
//! directly and is the reference the grammar is tested against.

pub mod lexicon;
mod numerals;
mod spell;

pub use numerals::{Digits, Numerals};
pub use spell::{spell, LARGEST};
