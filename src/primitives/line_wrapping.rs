//! Greedy word wrapping
//!
//! Pipeline: source line → wrap_line → display lines → page renderer
//!
//! Lines that already fit are passed through untouched, including their
//! original spacing. Longer lines are re-flowed word by word, which collapses
//! runs of whitespace into single spaces. Words are never split: a word wider
//! than the terminal overflows on a line of its own.

use crate::primitives::display_width::str_width;

/// Wrap a single source line into display lines no wider than `width` columns.
///
/// A word is appended to the line being built when the line, a separating
/// space and the word together fit; otherwise the line is flushed and the
/// word starts the next one.
///
/// Always returns at least one line, so blank source lines stay blank lines.
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if str_width(text) <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = str_width(word);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    // Over-width lines made only of whitespace produce no words
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
