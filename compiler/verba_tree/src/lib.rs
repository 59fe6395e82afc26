//! Verba Tree - the generated strings as a lazy binary tree.
//!
//! Every `add` and `mul` of the grammar becomes a branch, annotated with the
//! measure of everything below it. The leaves, read left to right, are the
//! generated strings in generation order (not alphabetical order). Searching
//! by volume finds the string covering any character offset while forcing
//! only the branches on one root-to-leaf path.

mod binary;
mod search;

pub use binary::{Binary, Shape};
pub use search::{search_unsorted, Located, TreeError};
