//! Bionic reading emphasis
//!
//! Bolds the leading half of the letters of every word so the eye can anchor
//! on word beginnings. Each emphasized character gets its own bold-on/bold-off
//! pair, which keeps punctuation and the trailing letters in the default style
//! even when they sit between emphasized letters.
//!
//! "Character" here means an extended grapheme cluster: a base letter and its
//! combining marks are emphasized together and count as one letter.

use std::fmt::Write;

use crossterm::style::{Attribute, SetAttribute};
use unicode_segmentation::UnicodeSegmentation;

/// A grapheme counts as a letter when its base character is alphabetic.
fn is_letter(grapheme: &str) -> bool {
    grapheme.chars().next().is_some_and(char::is_alphabetic)
}

/// Number of letters to emphasize in a word with `letter_count` letters.
#[inline]
pub fn bold_count(letter_count: usize) -> usize {
    letter_count.div_ceil(2).max(1)
}

fn push_bold(out: &mut String, grapheme: &str) {
    // Writing into a String cannot fail
    let _ = write!(
        out,
        "{}{}{}",
        SetAttribute(Attribute::Bold),
        grapheme,
        SetAttribute(Attribute::Reset)
    );
}

/// Apply bionic emphasis to a single whitespace-free token.
///
/// - Tokens without letters are returned unchanged.
/// - A single-character token is emphasized entirely.
/// - Otherwise the first `ceil(letters / 2)` letters are bolded. Leading,
///   trailing and interior non-letters (quotes, apostrophes, hyphens, digits)
///   are copied through and do not use up the bold budget.
pub fn emphasize_word(word: &str) -> String {
    let letter_count = word.graphemes(true).filter(|g| is_letter(g)).count();
    if letter_count == 0 {
        return word.to_string();
    }

    let mut budget = bold_count(letter_count);
    let mut out = String::with_capacity(word.len() + budget * 8);

    for grapheme in word.graphemes(true) {
        if budget > 0 && is_letter(grapheme) {
            push_bold(&mut out, grapheme);
            budget -= 1;
        } else {
            out.push_str(grapheme);
        }
    }

    out
}

/// Apply bionic emphasis to every word of a display line.
///
/// Whitespace between words is copied verbatim, so indentation and the
/// spacing of lines that were not re-flowed survive.
pub fn emphasize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() * 2);
    let mut rest = line;

    while !rest.is_empty() {
        let word_start = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        out.push_str(&rest[..word_start]);
        rest = &rest[word_start..];

        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if word_end > 0 {
            out.push_str(&emphasize_word(&rest[..word_end]));
        }
        rest = &rest[word_end..];
    }

    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strip bold markers and count how many characters sat inside them.
    fn decode(formatted: &str) -> (String, usize, bool) {
        let on = format!("{}", SetAttribute(Attribute::Bold));
        let off = format!("{}", SetAttribute(Attribute::Reset));
        let mut plain = String::new();
        let mut bold_letters = 0;
        let mut bolded_non_letter = false;
        let mut rest = formatted;
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix(on.as_str()) {
                let end = after.find(off.as_str()).expect("bold is always closed");
                let inner = &after[..end];
                if is_letter(inner) {
                    bold_letters += 1;
                } else {
                    bolded_non_letter = true;
                }
                plain.push_str(inner);
                rest = &after[end + off.len()..];
            } else {
                let ch = rest.chars().next().unwrap();
                plain.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
        (plain, bold_letters, bolded_non_letter)
    }

    proptest! {
        /// Property: exactly max(1, ceil(letters / 2)) letters are emphasized
        #[test]
        fn emphasized_count_matches_letters(word in "[a-zA-Z0-9'.,!?-]{1,20}") {
            let letters = word.chars().filter(|c| c.is_alphabetic()).count();
            let (plain, bold_letters, bolded_non_letter) = decode(&emphasize_word(&word));
            prop_assert_eq!(plain, word);
            prop_assert!(!bolded_non_letter);
            if letters == 0 {
                prop_assert_eq!(bold_letters, 0);
            } else {
                prop_assert_eq!(bold_letters, bold_count(letters));
            }
        }

        /// Property: words without letters come back byte-identical
        #[test]
        fn letterless_words_unchanged(word in "[0-9'.,!?()-]{1,12}") {
            prop_assert_eq!(emphasize_word(&word), word);
        }
    }
}
