// SPDX-License-Identifier: MPL-2.0
//! Input masks for formatted text fields.
//!
//! Mask tokens:
//! - `9` accepts a digit
//! - `A` accepts a letter
//! - `*` accepts a letter or digit
//!
//! Every other character is a literal that the mask inserts itself.
//!
//! # Example
//!
//! ```
//! use toastkit::input::{apply_mask, remove_mask};
//!
//! let phone = apply_mask("5551234567", "(999) 999-9999");
//! assert_eq!(phone, "(555) 123-4567");
//! assert_eq!(remove_mask(&phone, "(999) 999-9999"), "5551234567");
//! ```

use crate::error::MaskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Digit,
    Letter,
    Alphanumeric,
}

impl Slot {
    fn accepts(self, ch: char) -> bool {
        match self {
            Slot::Digit => ch.is_ascii_digit(),
            Slot::Letter => ch.is_alphabetic(),
            Slot::Alphanumeric => ch.is_alphanumeric(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Slot(Slot),
    Literal(char),
}

fn tokenize(mask: &str) -> impl Iterator<Item = Token> + '_ {
    mask.chars().map(|ch| match ch {
        '9' => Token::Slot(Slot::Digit),
        'A' => Token::Slot(Slot::Letter),
        '*' => Token::Slot(Slot::Alphanumeric),
        other => Token::Literal(other),
    })
}

/// A validated mask pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pattern: String,
    slots: usize,
}

impl Mask {
    /// Validates a mask pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or has no input slots.
    pub fn parse(pattern: &str) -> Result<Self, MaskError> {
        if pattern.is_empty() {
            return Err(MaskError::Empty);
        }
        let slots = slot_count(pattern);
        if slots == 0 {
            return Err(MaskError::NoSlots);
        }
        Ok(Self {
            pattern: pattern.to_owned(),
            slots,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of characters the mask can hold.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.slots
    }

    #[must_use]
    pub fn apply(&self, value: &str) -> String {
        apply_mask(value, &self.pattern)
    }

    #[must_use]
    pub fn remove(&self, value: &str) -> String {
        remove_mask(value, &self.pattern)
    }

    /// Whether `value` fills every slot.
    #[must_use]
    pub fn is_complete(&self, value: &str) -> bool {
        self.remove(value).chars().count() == self.slots
    }
}

/// Number of input slots in a mask.
#[must_use]
pub fn slot_count(mask: &str) -> usize {
    tokenize(mask)
        .filter(|t| matches!(t, Token::Slot(_)))
        .count()
}

/// Formats raw input with a mask.
///
/// Input characters that do not fit the current slot are skipped. A run of
/// literals that the input already carries at that point is consumed with
/// it, so a formatted value formats to itself. Literals are only emitted
/// between filled slots; the output never ends on a literal. Input beyond
/// the last slot is dropped.
#[must_use]
pub fn apply_mask(value: &str, mask: &str) -> String {
    let input: Vec<char> = value.chars().collect();
    let tokens: Vec<Token> = tokenize(mask).collect();
    let mut out = String::with_capacity(mask.len());
    let mut pos = 0;
    let mut committed = 0;
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i] {
            Token::Literal(_) => {
                let run: Vec<char> = tokens[i..]
                    .iter()
                    .map_while(|token| match token {
                        Token::Literal(ch) => Some(*ch),
                        Token::Slot(_) => None,
                    })
                    .collect();
                if input[pos..].starts_with(&run) {
                    pos += run.len();
                }
                out.extend(&run);
                i += run.len();
            }
            Token::Slot(slot) => {
                let Some(skip) = input[pos..].iter().position(|&ch| slot.accepts(ch)) else {
                    break;
                };
                out.push(input[pos + skip]);
                pos += skip + 1;
                committed = out.len();
                i += 1;
            }
        }
    }

    out.truncate(committed);
    out
}

/// Extracts the raw characters from a masked value.
///
/// Walks the value alongside the mask and keeps characters that sit on a
/// slot and fit it.
#[must_use]
pub fn remove_mask(value: &str, mask: &str) -> String {
    value
        .chars()
        .zip(tokenize(mask))
        .filter_map(|(ch, token)| match token {
            Token::Slot(slot) if slot.accepts(ch) => Some(ch),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = "(999) 999-9999";

    #[test]
    fn partial_input_stops_after_last_slot() {
        assert_eq!(apply_mask("555", PHONE), "(555");
        assert_eq!(apply_mask("5551", PHONE), "(555) 1");
        assert_eq!(apply_mask("", PHONE), "");
    }

    #[test]
    fn non_fitting_input_is_skipped() {
        assert_eq!(apply_mask("55a5-12", PHONE), "(555) 12");
        assert_eq!(apply_mask("abc", PHONE), "");
    }

    #[test]
    fn formatted_value_is_stable() {
        let once = apply_mask("5551234567", PHONE);
        assert_eq!(apply_mask(&once, PHONE), once);
    }

    #[test]
    fn overflow_is_dropped() {
        assert_eq!(apply_mask("123456", "99/99"), "12/34");
    }

    #[test]
    fn letter_and_alphanumeric_slots() {
        assert_eq!(apply_mask("ab12cd", "AA-999"), "ab-12");
        assert_eq!(apply_mask("x9y8", "**.**"), "x9.y8");
    }

    #[test]
    fn digit_literals_are_not_consumed_from_raw_input() {
        let masked = apply_mask("123", "+1 (999)");
        assert_eq!(masked, "+1 (123");
        assert_eq!(remove_mask(&masked, "+1 (999)"), "123");
    }

    #[test]
    fn formatted_value_with_digit_literals_is_stable() {
        let mask = "+1 (999) 999-9999";
        let once = apply_mask("5551234567", mask);
        assert_eq!(once, "+1 (555) 123-4567");
        assert_eq!(apply_mask(&once, mask), once);

        let partial = apply_mask("123", "+1 (999)");
        assert_eq!(apply_mask(&partial, "+1 (999)"), partial);
    }

    #[test]
    fn remove_reverses_apply_for_digit_strings() {
        let masks = [PHONE, "99/99/9999", "999.999.999-99", "+1 (999) 999"];
        let digits = "0123456789012345";
        for mask in masks {
            for len in 0..=slot_count(mask) {
                let input = &digits[..len];
                assert_eq!(
                    remove_mask(&apply_mask(input, mask), mask),
                    input,
                    "mask {mask:?}, input {input:?}"
                );
            }
        }
    }

    #[test]
    fn mask_parse_validates() {
        assert_eq!(Mask::parse(""), Err(MaskError::Empty));
        assert_eq!(Mask::parse("--/--"), Err(MaskError::NoSlots));

        let mask = Mask::parse(PHONE).expect("valid mask");
        assert_eq!(mask.slots(), 10);
        assert!(mask.is_complete("(555) 123-4567"));
        assert!(!mask.is_complete("(555) 123"));
    }
}
