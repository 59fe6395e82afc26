//! Property tests: a trie holds exactly the strings its expression generates.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use verba_algebra::{choice, Additive, Count, Semiring, Words};
use verba_trie::Trie;

fn word_list() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-c]{0,3}", 0..4).prop_map(|words| {
        words
            .into_iter()
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn entries_of(words: Words) -> Vec<(String, Count)> {
    let mut entries: Vec<(String, Count)> = Vec::new();
    for word in words.sorted() {
        match entries.last_mut() {
            Some((last, count)) if *last == word => *count = count.add(&Count::one()),
            _ => entries.push((word, Count::one())),
        }
    }
    entries
}

fn check_laws<S, F, K>(a: &S, b: &S, c: &S, key: F)
where
    S: Semiring,
    F: Fn(&S) -> K,
    K: PartialEq + std::fmt::Debug,
{
    assert_eq!(key(&a.add(b)), key(&b.add(a)), "add commutes");
    assert_eq!(key(&a.add(b).add(c)), key(&a.add(&b.add(c))), "add associates");
    assert_eq!(key(&S::zero().add(a)), key(a), "zero is the additive identity");
    assert_eq!(key(&a.mul(b).mul(c)), key(&a.mul(&b.mul(c))), "mul associates");
    assert_eq!(key(&S::one().mul(a)), key(a), "one is a left identity");
    assert_eq!(key(&a.mul(&S::one())), key(a), "one is a right identity");
    assert_eq!(key(&S::zero().mul(a)), key(&S::zero()), "zero annihilates on the left");
    assert_eq!(key(&a.mul(&S::zero())), key(&S::zero()), "zero annihilates on the right");
    assert_eq!(
        key(&a.mul(&b.add(c))),
        key(&a.mul(b).add(&a.mul(c))),
        "mul distributes on the left"
    );
    assert_eq!(
        key(&a.add(b).mul(c)),
        key(&a.mul(c).add(&b.mul(c))),
        "mul distributes on the right"
    );
}

proptest! {
    #[test]
    fn trie_is_a_semiring(a in word_list(), b in word_list(), c in word_list()) {
        // optional terms put strings ending at the root into every product
        let a: Trie<Count> = Trie::one().add(&choice(&a));
        let b: Trie<Count> = choice(&b);
        let c: Trie<Count> = Trie::one().add(&choice(&c));
        check_laws(&a, &b, &c, Trie::entries);
        check_laws(&a, &b, &c, |t: &Trie<Count>| t.total().clone());
    }

    #[test]
    fn product_of_optional_choices(a in word_list(), b in word_list(), c in word_list()) {
        let trie: Trie<Count> = Trie::one()
            .add(&choice(&a))
            .mul(&choice(&b))
            .mul(&Trie::one().add(&choice(&c)));
        let words: Words = Words::one()
            .add(&choice(&a))
            .mul(&choice(&b))
            .mul(&Words::one().add(&choice(&c)));
        prop_assert_eq!(trie.entries(), entries_of(words));
    }

    #[test]
    fn total_counts_strings(a in word_list(), b in word_list()) {
        let trie: Trie<Count> = choice::<Trie<Count>>(&a).add(&choice(&b));
        let words: Words = choice::<Words>(&a).add(&choice(&b));
        prop_assert_eq!(trie.total(), &Count::from(words.len() as u64));
    }
}
