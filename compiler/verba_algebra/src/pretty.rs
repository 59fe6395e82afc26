//! The debugging interpretation: an expression rendered as text.

use std::fmt;

use crate::semiring::{Additive, Character, Semiring};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    Zero,
    One,
    /// A run of characters with nothing between them.
    Word,
    Product,
    Sum,
}

/// A grammar expression printed as `+` / `*` over literal words.
///
/// Adjacent characters fuse into words and identities are dropped, so
/// `string("ty") * (one + choice("one two"))` renders as
/// `ty * (1 + one + two)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pretty {
    text: String,
    form: Form,
}

impl Pretty {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn factor(&self) -> String {
        if self.form == Form::Sum {
            format!("({})", self.text)
        } else {
            self.text.clone()
        }
    }
}

impl Additive for Pretty {
    fn zero() -> Self {
        Pretty {
            text: "0".to_string(),
            form: Form::Zero,
        }
    }

    fn add(&self, rhs: &Self) -> Self {
        match (self.form, rhs.form) {
            (Form::Zero, _) => rhs.clone(),
            (_, Form::Zero) => self.clone(),
            _ => Pretty {
                text: format!("{} + {}", self.text, rhs.text),
                form: Form::Sum,
            },
        }
    }

    fn is_zero(&self) -> bool {
        self.form == Form::Zero
    }
}

impl Semiring for Pretty {
    fn one() -> Self {
        Pretty {
            text: "1".to_string(),
            form: Form::One,
        }
    }

    fn mul(&self, rhs: &Self) -> Self {
        match (self.form, rhs.form) {
            (Form::Zero, _) | (_, Form::Zero) => Self::zero(),
            (Form::One, _) => rhs.clone(),
            (_, Form::One) => self.clone(),
            (Form::Word, Form::Word) => Pretty {
                text: format!("{}{}", self.text, rhs.text),
                form: Form::Word,
            },
            _ => Pretty {
                text: format!("{} * {}", self.factor(), rhs.factor()),
                form: Form::Product,
            },
        }
    }
}

impl Character for Pretty {
    fn char(c: char) -> Self {
        Pretty {
            text: c.to_string(),
            form: Form::Word,
        }
    }
}

impl fmt::Display for Pretty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{choice, string};

    #[test]
    fn test_characters_fuse_into_words() {
        assert_eq!(string::<Pretty>("hundred").as_str(), "hundred");
    }

    #[test]
    fn test_choice_drops_leading_zero() {
        assert_eq!(choice::<Pretty>("one two").as_str(), "one + two");
    }

    #[test]
    fn test_sums_are_parenthesized_under_products() {
        let tens: Pretty = choice("twen thir");
        let ones: Pretty = Pretty::one().add(&choice("one two"));
        let expr = tens.mul(&string("ty")).mul(&ones);
        assert_eq!(expr.to_string(), "(twen + thir) * ty * (1 + one + two)");
    }

    #[test]
    fn test_empty_string_and_empty_choice() {
        assert_eq!(string::<Pretty>("").as_str(), "1");
        assert_eq!(choice::<Pretty>("").as_str(), "0");
    }
}
