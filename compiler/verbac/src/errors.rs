//! Driver errors.

use num_bigint::{BigInt, BigUint};
use verba_algebra::{Count, Length};
use verba_tree::TreeError;
use verba_trie::TrieError;

/// Every way a question about the concatenation can fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("invalid position '{input}': expected a decimal integer")]
    Parse { input: String },

    #[error("position {target} is outside the concatenation (1..={volume})")]
    OutOfRange { target: BigInt, volume: Length },

    #[error("unsorted search failed: {0}")]
    Tree(#[from] TreeError),

    #[error("sorted search failed: {0}")]
    Trie(#[from] TrieError),

    /// The position is inside a word but not on its last letter, so there
    /// is no running sum ending exactly there.
    #[error("position {target} is not the last letter of a word (the word ends at {end})")]
    InconsistentTarget { target: BigUint, end: Length },

    #[error("{count} strings spell \"{word}\", so it has no single number")]
    Ambiguous { word: String, count: Count },
}
