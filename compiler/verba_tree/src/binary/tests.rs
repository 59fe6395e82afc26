use super::*;
use pretty_assertions::assert_eq;
use verba_algebra::{choice, string, Count, Deriv, Extent, Length, Words};
use verba_grammar::{Digits, Numerals};

fn extent(count: u64, volume: u64) -> Extent {
    Deriv::new(Count::from(count), Length::from(volume))
}

#[test]
fn test_char_is_a_leaf() {
    let tree: Binary<Extent> = Binary::char('a');
    assert_eq!(tree.measure(), &extent(1, 1));
    assert!(matches!(tree.shape(), Shape::Leaf(word) if word == "a"));
}

#[test]
fn test_string_of_leaves_stays_a_leaf() {
    let tree: Binary<Extent> = string("hundred");
    assert!(matches!(tree.shape(), Shape::Leaf(word) if word == "hundred"));
    assert_eq!(tree.measure(), &extent(1, 7));
}

#[test]
fn test_add_branches() {
    let tree: Binary<Extent> = choice("one two");
    assert!(matches!(tree.shape(), Shape::Branch(..)));
    assert_eq!(tree.measure(), &extent(2, 6));
    assert_eq!(tree.words(), ["one", "two"]);
}

#[test]
fn test_mul_prefers_left_branches() {
    let left: Binary<Extent> = choice("a b");
    let right: Binary<Extent> = choice("x y");
    let product = left.mul(&right);
    let Shape::Branch(first, _) = product.shape() else {
        panic!("product of two branches must branch");
    };
    // the left operand's structure is kept: the first child is (0 + a) * (x + y)
    assert_eq!(first.force().measure(), &extent(2, 4));
    assert_eq!(product.words(), ["ax", "ay", "bx", "by"]);
}

#[test]
fn test_mul_by_zero_is_empty() {
    let tree: Binary<Extent> = string::<Binary<Extent>>("ab").mul(&Binary::zero());
    assert!(matches!(tree.shape(), Shape::Empty));
    assert!(tree.is_zero());
}

#[test]
fn test_generation_order_matches_words() {
    let numerals: Numerals<Binary<Extent>> = Numerals::up_to(Digits::Two);
    let words: Numerals<Words> = Numerals::up_to(Digits::Two);
    assert_eq!(numerals.d2.words(), words.d2.as_slice());
    assert_eq!(numerals.d2.measure(), &extent(99, 854));
}

#[test]
fn test_children_are_deferred() {
    let numerals: Numerals<Binary<Extent>> = Numerals::build();
    // measuring the full grammar must not walk its leaves
    assert_eq!(numerals.d9.measure().value, Count::from(999_999_999));
}
