//! Verba driver.
//!
//! Builds the number grammar once per interpretation and answers positional
//! questions about the concatenation of its strings:
//!
//! - [`Solver::solve`]: the word whose last letter sits at a position in the
//!   alphabetically sorted concatenation, its number, and the sum of every
//!   number up to and including it
//! - [`Solver::letter`]: the letter at any position of that concatenation
//! - [`Solver::unsorted`]: the letter at a position of the concatenation in
//!   numeric order

mod errors;
mod solver;
mod target;
pub mod tracing_setup;

pub use errors::SolveError;
pub use solver::{Answer, Letter, Solver, Unsorted};
pub use target::{parse_target, DEFAULT_TARGET};
