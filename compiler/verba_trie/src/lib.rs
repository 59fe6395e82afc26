//! Verba Trie - the generated strings grouped by shared prefixes.
//!
//! A [`Trie`] node carries two measures: `total`, over every string at or
//! below it, and `label`, over the strings ending exactly there. Visiting
//! children in ascending key order visits the strings alphabetically, so a
//! best-first walk that skips whole subtrees by their totals finds the k-th
//! character of the sorted concatenation.
//!
//! # Multiplication
//!
//! Concatenating every string of `T1` with every string of `T2` is
//!
//! ```text
//! total    = T1.total * T2.total
//! label    = T1.label * T2.label
//! children = { c: T1[c] * T2 }  ⊕  { c: T1.label · T2[c] }
//! ```
//!
//! Strings continuing below `T1`'s root keep their first character and get
//! `T2` appended; strings ending at `T1`'s root are followed directly by
//! `T2`'s children. Every child is deferred.
//!
//! # Numbering
//!
//! [`Numbered`] renumbers masses during `add` and `mul` so the mass of each
//! string is its rank in generation order, which for the number grammar is
//! the number it spells.

mod numbered;
mod search;
mod trie;

pub use numbered::Numbered;
pub use search::{search, Found, TrieError};
pub use trie::{Branches, SortedBranches, Trie};
