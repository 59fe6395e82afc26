//! The free interpretation: the generated strings themselves.

use crate::semiring::{Additive, Character, Semiring};

/// Every generated string, in generation order, duplicates kept.
///
/// `add` appends, `mul` takes the cross product left-major. The size is the
/// size of the language, so this is only for small grammars: checking the
/// other interpretations against ground truth, and printing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Words(Vec<String>);

impl Words {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The same strings in alphabetical order.
    pub fn sorted(&self) -> Vec<String> {
        let mut words = self.0.clone();
        words.sort();
        words
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Words {
    fn from(words: Vec<String>) -> Self {
        Words(words)
    }
}

impl Additive for Words {
    fn zero() -> Self {
        Words(Vec::new())
    }

    fn add(&self, rhs: &Self) -> Self {
        let mut words = Vec::with_capacity(self.0.len() + rhs.0.len());
        words.extend_from_slice(&self.0);
        words.extend_from_slice(&rhs.0);
        Words(words)
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

impl Semiring for Words {
    fn one() -> Self {
        Words(vec![String::new()])
    }

    fn mul(&self, rhs: &Self) -> Self {
        let mut words = Vec::with_capacity(self.0.len() * rhs.0.len());
        for left in &self.0 {
            for right in &rhs.0 {
                words.push(format!("{left}{right}"));
            }
        }
        Words(words)
    }
}

impl Character for Words {
    fn char(c: char) -> Self {
        Words(vec![c.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{choice, string};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cross_product_is_left_major() {
        let words: Words = choice::<Words>("a b").mul(&choice("x y"));
        assert_eq!(words.as_slice(), ["ax", "ay", "bx", "by"]);
    }

    #[test]
    fn test_one_is_empty_string() {
        let words: Words = Words::one().add(&string("ty"));
        assert_eq!(words.as_slice(), ["", "ty"]);
    }

    #[test]
    fn test_zero_annihilates() {
        let words: Words = choice::<Words>("a b").mul(&Words::zero());
        assert!(words.is_zero());
    }

    #[test]
    fn test_sorted() {
        let words: Words = choice("two one three");
        assert_eq!(words.sorted(), ["one", "three", "two"]);
    }
}
