use super::*;
use pretty_assertions::assert_eq;
use verba_algebra::{choice, Count, Extent, Length, Measure, Semiring};
use verba_grammar::Numerals;

fn reaches(target: u64) -> impl Fn(&Extent) -> bool {
    let target = Length::from(target);
    move |m: &Extent| m.volume() >= &target
}

#[test]
fn test_alphabetical_order() {
    // sorted concatenation: "onethreetwo"
    let t: Trie<Extent> = choice("one two three");
    let found = search(&t, reaches(1)).unwrap();
    assert_eq!(found.word, "one");
    assert_eq!(found.measure.volume(), &Length::from(3));

    let found = search(&t, reaches(4)).unwrap();
    assert_eq!(found.word, "three");
    assert_eq!(found.measure.count(), &Count::from(2));

    let found = search(&t, reaches(11)).unwrap();
    assert_eq!(found.word, "two");
    assert_eq!(found.measure.volume(), &Length::from(11));
}

#[test]
fn test_prefix_word_comes_first() {
    // "six" sorts before "sixty", and its label is counted on the way down
    let t: Trie<Extent> = choice("sixty six");
    let found = search(&t, reaches(3)).unwrap();
    assert_eq!(found.word, "six");
    assert_eq!(found.label.count(), &Count::one());

    let found = search(&t, reaches(4)).unwrap();
    assert_eq!(found.word, "sixty");
    assert_eq!(found.measure.volume(), &Length::from(8));
}

#[test]
fn test_never_true() {
    let t: Trie<Extent> = choice("one two");
    let err = search(&t, reaches(7)).unwrap_err();
    assert_eq!(err, TrieError::Exhausted);
}

#[test]
fn test_non_monotone_stop_that_never_holds() {
    // three strings can never be five
    let t: Trie<Extent> = choice("ab ac ad");
    let err = search(&t, |m: &Extent| m.count() == &Count::from(5)).unwrap_err();
    assert_eq!(err, TrieError::Exhausted);
}

#[test]
fn test_exact_stop_still_lands_on_a_word() {
    // the walk into "a" ends on "ad", where the count reaches 3 again
    let t: Trie<Extent> = choice("ab ac ad");
    let found = search(&t, |m: &Extent| m.count() == &Count::from(3)).unwrap();
    assert_eq!(found.word, "ad");
}

#[test]
fn test_stop_at_root_for_empty_string() {
    let t: Trie<Extent> = Trie::one().add(&choice("a"));
    let found = search(&t, |m: &Extent| !m.count().is_zero()).unwrap();
    assert_eq!(found.word, "");
    assert_eq!(found.label, Extent::one());
}

#[test]
fn test_fifty_one_billionth_letter_sorted() {
    let numerals: Numerals<Trie<Extent>> = Numerals::build();
    let found = search(&numerals.d9, reaches(51_000_000_000)).unwrap();
    assert_eq!(
        found.word,
        "sixhundredseventysixmillionsevenhundredfortysixthousandfivehundredseventyfive"
    );
    assert_eq!(found.measure.count(), &Count::from(723_302_492));
    assert_eq!(found.measure.volume(), &Length::from(51_000_000_000));
}
