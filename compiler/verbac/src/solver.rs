//! Positional questions over the number grammar.

use std::cell::OnceCell;
use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use tracing::debug;
use verba_algebra::{Additive, Count, Extent, Length, Measure, Numbering, Ranked, Semiring};
use verba_grammar::Numerals;
use verba_tree::{search_unsorted, Binary};
use verba_trie::{search, Found, Numbered};

use crate::errors::SolveError;

/// A letter of the sorted concatenation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Letter {
    /// 1-based position in the concatenation.
    pub target: BigUint,
    pub letter: char,
    pub word: String,
    /// 0-based index of `letter` within `word`.
    pub index: usize,
    /// The number `word` spells.
    pub number: BigUint,
}

/// The word ending at a position of the sorted concatenation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub letter: char,
    pub word: String,
    pub number: BigUint,
    /// Sum of the numbers of every word up to and including `word`.
    pub sum: BigUint,
    /// How many words that is.
    pub words: Count,
}

/// A letter of the concatenation in numeric order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unsorted {
    pub target: BigUint,
    pub before: String,
    pub letter: char,
    pub after: String,
    /// The number the surrounding word spells, which is also its rank.
    pub number: Count,
}

/// The number grammar, interpreted for search.
///
/// The sorted trie is built on construction; its children are forced only
/// along search paths, and stay memoized for later questions. The
/// generation-order tree is built the first time it is asked for.
pub struct Solver {
    /// `1 + d9`: the empty string has rank 0, so each word's mass is its
    /// number.
    sorted: Numbered<Ranked>,
    /// Count and volume of `d9` alone.
    grammar: Ranked,
    unsorted: OnceCell<Binary<Extent>>,
}

impl Solver {
    #[tracing::instrument(level = "debug", name = "build_solver")]
    pub fn new() -> Self {
        let numerals: Numerals<Numbered<Ranked>> = Numerals::build();
        let grammar = numerals.d9.trie().total().clone();
        debug!(count = %grammar.count(), volume = %grammar.volume(), "grammar built");
        Solver {
            sorted: Numbered::one().add(&numerals.d9),
            grammar,
            unsorted: OnceCell::new(),
        }
    }

    /// How many numbers the grammar spells.
    pub fn count(&self) -> &Count {
        self.grammar.count()
    }

    /// Length of the concatenation.
    pub fn volume(&self) -> &Length {
        self.grammar.volume()
    }

    /// Sum of every number the grammar spells.
    ///
    /// Read from the numbered trie: in `d9` alone the masses are 0-based
    /// ranks, one less than the numbers.
    pub fn mass(&self) -> &BigUint {
        self.sorted.trie().total().mass().get()
    }

    /// The letter at 1-based `target` in the sorted concatenation.
    #[tracing::instrument(level = "debug", skip_all, fields(%target))]
    pub fn letter(&self, target: &BigInt) -> Result<Letter, SolveError> {
        let position = self.position(target)?;
        let found = self.find(&position)?;
        letter_of(position, &found)
    }

    /// The word whose last letter is at 1-based `target` in the sorted
    /// concatenation, with its number and the running sum of numbers.
    #[tracing::instrument(level = "debug", skip_all, fields(%target))]
    pub fn solve(&self, target: &BigInt) -> Result<Answer, SolveError> {
        let position = self.position(target)?;
        let found = self.find(&position)?;
        let end = found.measure.volume();
        if end.get() != &position {
            return Err(SolveError::InconsistentTarget {
                target: position,
                end: end.clone(),
            });
        }
        let sum = found.measure.mass().get().clone();
        let words = found.measure.count().clone();
        let letter = letter_of(position, &found)?;
        debug!(word = %letter.word, %sum, "solved");
        Ok(Answer {
            letter: letter.letter,
            word: letter.word,
            number: letter.number,
            sum,
            // the empty string is counted but is not a word
            words: Count::new(words.into_inner() - 1u32),
        })
    }

    /// The letter at 1-based `target` in the concatenation in numeric order.
    #[tracing::instrument(level = "debug", skip_all, fields(%target))]
    pub fn unsorted(&self, target: &BigInt) -> Result<Unsorted, SolveError> {
        let position = self.position(target)?;
        let offset = Length::new(&position - 1u32);
        let tree = self
            .unsorted
            .get_or_init(|| Numerals::<Binary<Extent>>::build().d9);
        let located = search_unsorted(tree, &offset)?;
        let (before, letter, after) =
            located
                .split(&offset)
                .ok_or_else(|| SolveError::InconsistentTarget {
                    target: position.clone(),
                    end: located.measure.volume().clone(),
                })?;
        Ok(Unsorted {
            before: before.to_string(),
            letter,
            after: after.to_string(),
            number: located.measure.count().clone(),
            target: position,
        })
    }

    fn position(&self, target: &BigInt) -> Result<BigUint, SolveError> {
        target
            .to_biguint()
            .filter(|position| !position.is_zero() && position <= self.volume().get())
            .ok_or_else(|| SolveError::OutOfRange {
                target: target.clone(),
                volume: self.volume().clone(),
            })
    }

    fn find(&self, position: &BigUint) -> Result<Found<Ranked>, SolveError> {
        let goal = Length::new(position.clone());
        Ok(search(self.sorted.trie(), |m: &Ranked| m.volume() >= &goal)?)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// The letter at `position`, given the search result whose measure ends at
/// or after it.
fn letter_of(position: BigUint, found: &Found<Ranked>) -> Result<Letter, SolveError> {
    let inconsistent = || SolveError::InconsistentTarget {
        target: position.clone(),
        end: found.measure.volume().clone(),
    };
    if found.label.count() != &Count::one() {
        return Err(SolveError::Ambiguous {
            word: found.word.clone(),
            count: found.label.count().clone(),
        });
    }
    let past = found
        .measure
        .volume()
        .checked_sub(&Length::new(position.clone()))
        .and_then(|past| past.to_usize())
        .ok_or_else(inconsistent)?;
    let len = found.word.chars().count();
    let index = len
        .checked_sub(past + 1)
        .ok_or_else(inconsistent)?;
    let letter = found.word.chars().nth(index).ok_or_else(inconsistent)?;
    Ok(Letter {
        target: position,
        letter,
        word: found.word.clone(),
        index,
        number: found.label.mass().get().clone(),
    })
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "position: {}", self.target)?;
        writeln!(f, "letter:   {}", self.letter)?;
        writeln!(f, "word:     {} (letter {})", self.word, self.index + 1)?;
        write!(f, "number:   {}", self.number)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "letter: {}", self.letter)?;
        writeln!(f, "word:   {}", self.word)?;
        writeln!(f, "number: {}", self.number)?;
        writeln!(f, "sum:    {}", self.sum)?;
        write!(f, "words:  {}", self.words)
    }
}

impl fmt::Display for Unsorted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "position: {}", self.target)?;
        writeln!(f, "letter:   {}", self.letter)?;
        writeln!(f, "word:     {}[{}]{}", self.before, self.letter, self.after)?;
        write!(f, "number:   {}", self.number)
    }
}
