//! Best-first search in alphabetical order.

use tracing::{debug, trace};
use verba_algebra::Additive;

use crate::trie::Trie;

/// Search failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The stop condition does not hold even for the trie's total.
    #[error("search exhausted the trie before the stop condition held")]
    Exhausted,
}

/// Where a search stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Found<M> {
    /// Characters on the path from the root to the stopping node.
    pub word: String,
    /// Measure of every string sorted before `word`, plus the strings
    /// ending at the stopping node.
    pub measure: M,
    /// Measure of the strings ending exactly at the stopping node.
    pub label: M,
}

/// Walk `trie` in alphabetical order until `stop` holds for the measure of
/// everything visited.
///
/// At each node the strings ending there come first: if `stop` holds once
/// they are included, the search ends at this node. Otherwise children are
/// tried in ascending key order; a child whose total makes `stop` hold is
/// entered, any other child is skipped whole by adding its total.
///
/// `stop` should be monotone (once true, true for every larger measure). A
/// child is only entered when `stop` holds for everything up to its end, and
/// the walk inside reaches that same measure at the latest, so the search
/// only fails, with [`TrieError::Exhausted`], when `stop` rejects the
/// trie's total.
#[tracing::instrument(level = "debug", skip_all)]
pub fn search<M, F>(trie: &Trie<M>, stop: F) -> Result<Found<M>, TrieError>
where
    M: Additive + 'static,
    F: Fn(&M) -> bool,
{
    let mut visited = M::zero();
    let mut word = String::new();
    let mut node = trie.clone();
    loop {
        visited = visited.add(node.label());
        if stop(&visited) {
            debug!(word = %word, "found");
            return Ok(Found {
                word,
                measure: visited,
                label: node.label().clone(),
            });
        }

        let mut next = None;
        for (key, child) in node.children().sorted() {
            let child = child.force();
            let reached = visited.add(child.total());
            if stop(&reached) {
                next = Some((key, child.clone()));
                break;
            }
            trace!(%key, depth = word.len(), "skip");
            visited = reached;
        }

        match next {
            Some((key, child)) => {
                word.push(key);
                node = child;
            }
            None => return Err(TrieError::Exhausted),
        }
    }
}

#[cfg(test)]
mod tests;
