//! Tries whose masses number the strings in generation order.

use std::rc::Rc;

use verba_algebra::{Additive, Character, Count, Numbering, Semiring};

use crate::trie::Trie;

/// A [`Trie`] whose `add` and `mul` renumber masses.
///
/// - `a + b`: `b`'s strings come after all of `a`'s, so every rank in `b` is
///   shifted by `a`'s string count.
/// - `a * b`: the pair `(x, y)` gets rank `rank(x) * |b| + rank(y)`, so every
///   rank in `a` is stretched by `b`'s string count before multiplying.
///
/// Starting from characters of rank 0, the mass at each terminal node is the
/// 0-based rank of its string among everything generated.
#[derive(Clone, Debug)]
pub struct Numbered<M>(Trie<M>);

impl<M> Numbered<M> {
    pub fn trie(&self) -> &Trie<M> {
        &self.0
    }

    pub fn into_trie(self) -> Trie<M> {
        self.0
    }
}

impl<M: Numbering + Clone + 'static> Numbered<M> {
    fn shifted(trie: &Trie<M>, by: Count) -> Trie<M> {
        if by.is_zero() {
            return trie.clone();
        }
        trie.map_measures(Rc::new(move |m: &M| m.shift(&by)))
    }

    fn stretched(trie: &Trie<M>, by: Count) -> Trie<M> {
        if by == Count::one() {
            return trie.clone();
        }
        trie.map_measures(Rc::new(move |m: &M| m.stretch(&by)))
    }
}

impl<M: Numbering + Additive + 'static> Additive for Numbered<M> {
    fn zero() -> Self {
        Numbered(Trie::zero())
    }

    fn add(&self, rhs: &Self) -> Self {
        let shift = self.0.total().count().clone();
        Numbered(self.0.add(&Self::shifted(&rhs.0, shift)))
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<M: Numbering + Semiring + 'static> Semiring for Numbered<M> {
    fn one() -> Self {
        Numbered(Trie::one())
    }

    fn mul(&self, rhs: &Self) -> Self {
        let stretch = rhs.0.total().count().clone();
        Numbered(Self::stretched(&self.0, stretch).mul(&rhs.0))
    }
}

impl<M: Numbering + Semiring + Character + 'static> Character for Numbered<M> {
    fn char(c: char) -> Self {
        Numbered(Trie::char(c))
    }
}
