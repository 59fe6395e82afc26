//! Direct spelling of a single number.

use crate::lexicon::{
    HUNDRED, MILLION, ONES, TEEN, TEEN_ROOTS, TENS_ROOTS, TEN_TO_TWELVE, THOUSAND, TY,
};

/// The largest number the grammar spells.
pub const LARGEST: u32 = 999_999_999;

/// The spelling of `n`, or `None` outside `1..=LARGEST`.
///
/// ```
/// assert_eq!(verba_grammar::spell(2_017).as_deref(), Some("twothousandseventeen"));
/// ```
pub fn spell(n: u32) -> Option<String> {
    if n == 0 || n > LARGEST {
        return None;
    }
    let mut out = String::new();
    for (group, scale) in [
        (n / 1_000_000, MILLION),
        (n / 1_000 % 1_000, THOUSAND),
        (n % 1_000, ""),
    ] {
        if group > 0 {
            below_thousand(group, &mut out)?;
            out.push_str(scale);
        }
    }
    Some(out)
}

fn below_thousand(n: u32, out: &mut String) -> Option<()> {
    if n >= 100 {
        out.push_str(nth(ONES, n / 100 - 1)?);
        out.push_str(HUNDRED);
    }
    below_hundred(n % 100, out)
}

fn below_hundred(n: u32, out: &mut String) -> Option<()> {
    match n {
        0 => {}
        1..=9 => out.push_str(nth(ONES, n - 1)?),
        10..=12 => out.push_str(nth(TEN_TO_TWELVE, n - 10)?),
        13..=19 => {
            out.push_str(nth(TEEN_ROOTS, n - 13)?);
            out.push_str(TEEN);
        }
        _ => {
            out.push_str(nth(TENS_ROOTS, n / 10 - 2)?);
            out.push_str(TY);
            below_hundred(n % 10, out)?;
        }
    }
    Some(())
}

fn nth(words: &'static str, index: u32) -> Option<&'static str> {
    words.split_whitespace().nth(usize::try_from(index).ok()?)
}
