use super::*;
use pretty_assertions::assert_eq;
use verba_algebra::{choice, Count, Extent};
use verba_grammar::Numerals;

fn tree(words: &str) -> Binary<Extent> {
    choice(words)
}

#[test]
fn test_first_letter() {
    let located = search_unsorted(&tree("one two three"), &Length::from(0)).unwrap();
    assert_eq!(located.word, "one");
    assert_eq!(located.measure.volume(), &Length::from(3));
    assert_eq!(located.split(&Length::from(0)), Some(("", 'o', "ne")));
}

#[test]
fn test_word_boundaries() {
    let t = tree("one two three");
    let located = search_unsorted(&t, &Length::from(3)).unwrap();
    assert_eq!(located.word, "two");
    assert_eq!(located.measure.count(), &Count::from(2));

    let located = search_unsorted(&t, &Length::from(10)).unwrap();
    assert_eq!(located.word, "three");
    assert_eq!(located.split(&Length::from(10)), Some(("thre", 'e', "")));
}

#[test]
fn test_split_outside_word() {
    let located = search_unsorted(&tree("one two"), &Length::from(4)).unwrap();
    assert_eq!(located.split(&Length::from(0)), None);
    assert_eq!(located.split(&Length::from(6)), None);
}

#[test]
fn test_offset_past_end() {
    let err = search_unsorted(&tree("one two three"), &Length::from(11)).unwrap_err();
    assert_eq!(
        err,
        TreeError::Exhausted {
            offset: Length::from(11),
            volume: Length::from(11),
        }
    );
}

#[test]
fn test_empty_tree() {
    let err = search_unsorted(&tree(""), &Length::from(0)).unwrap_err();
    assert!(matches!(err, TreeError::Exhausted { .. }));
}

#[test]
fn test_last_letter_of_six_digits() {
    let numerals: Numerals<Binary<Extent>> = Numerals::build();
    let offset = Length::from(44_872_000 - 1);
    let located = search_unsorted(&numerals.d6, &offset).unwrap();
    assert_eq!(located.word, "ninehundredninetyninethousandninehundredninetynine");
    assert_eq!(located.measure.count(), &Count::from(999_999));
}

#[test]
fn test_fifty_one_billionth_letter_unsorted() {
    let numerals: Numerals<Binary<Extent>> = Numerals::build();
    let offset = Length::from(51_000_000_000 - 1);
    let located = search_unsorted(&numerals.d9, &offset).unwrap();
    assert_eq!(
        located.split(&offset),
        Some((
            "sevenhundredthirtytwomil",
            'l',
            "ionsevenhundredninetysixthousandthreehundredsixtysix"
        ))
    );
    assert_eq!(located.measure.count(), &Count::from(732_796_366));
}
