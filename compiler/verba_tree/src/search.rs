//! Positional search over the unsorted concatenation.

use tracing::{debug, trace};
use verba_algebra::{Additive, Length, Measure, Semiring};

use crate::binary::{Binary, Shape};

/// Search failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The offset is not inside the concatenation.
    #[error("offset {offset} is past the end of the concatenation ({volume} characters)")]
    Exhausted { offset: Length, volume: Length },
}

/// The generated string covering a character offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Located<M> {
    pub word: String,
    /// Measure of every string up to and including `word`; its volume is the
    /// offset just past `word`'s last character.
    pub measure: M,
}

impl<M: Measure> Located<M> {
    /// Split `word` around the character at `offset`:
    /// `(before, letter, after)`.
    ///
    /// Returns `None` if `offset` does not fall inside `word`.
    pub fn split(&self, offset: &Length) -> Option<(&str, char, &str)> {
        let past_offset = self.measure.volume().checked_sub(offset)?.to_usize()?;
        let len = self.word.chars().count();
        let index = len.checked_sub(past_offset)?;
        let (at, letter) = self.word.char_indices().nth(index)?;
        Some((&self.word[..at], letter, &self.word[at + letter.len_utf8()..]))
    }
}

/// Find the string containing the character at 0-based `offset` in the
/// generation-order concatenation of `tree`'s strings.
///
/// Walks from the root: if `offset` falls inside the left child's volume go
/// left, otherwise add the left child's measure to the skipped total and go
/// right. Only the children on that path are forced.
#[tracing::instrument(level = "debug", skip_all, fields(%offset))]
pub fn search_unsorted<M>(tree: &Binary<M>, offset: &Length) -> Result<Located<M>, TreeError>
where
    M: Semiring + Measure + 'static,
{
    let exhausted = || TreeError::Exhausted {
        offset: offset.clone(),
        volume: tree.measure().volume().clone(),
    };
    if offset >= tree.measure().volume() {
        return Err(exhausted());
    }

    let mut skipped = M::zero();
    let mut node = tree.clone();
    let mut depth = 0usize;
    loop {
        let next = match node.shape() {
            Shape::Leaf(word) => {
                let measure = skipped.add(node.measure());
                debug!(depth, word = %word, end = %measure.volume(), "located");
                return Ok(Located {
                    word: word.clone(),
                    measure,
                });
            }
            Shape::Empty => return Err(exhausted()),
            Shape::Branch(left, right) => {
                let left = left.force();
                let end = skipped.volume().add(left.measure().volume());
                if offset < &end {
                    trace!(depth, "left");
                    left.clone()
                } else {
                    trace!(depth, "right");
                    skipped = skipped.add(left.measure());
                    right.force().clone()
                }
            }
        };
        node = next;
        depth += 1;
    }
}

#[cfg(test)]
mod tests;
