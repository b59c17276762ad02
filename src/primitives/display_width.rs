//! Display width calculation for Unicode text
//!
//! Wrapping and the status bar are laid out in terminal columns, not bytes or
//! code points, so CJK characters and emoji count as two columns and
//! combining marks as zero.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculate the display width of a single character.
///
/// Returns 0 for control characters and zero-width characters,
/// 2 for CJK/fullwidth characters and emoji,
/// 1 for most other characters.
#[inline]
pub fn char_width(c: char) -> usize {
    // unicode_width returns None for control characters
    c.width().unwrap_or(0)
}

/// Calculate the display width of a string.
#[inline]
pub fn str_width(s: &str) -> usize {
    s.width()
}

/// Longest prefix of `s` that fits in `max_width` columns.
///
/// Grows the prefix one grapheme cluster at a time and measures the prefix as
/// a whole, so the result agrees with [`str_width`] even for sequences such as
/// an emoji followed by a presentation selector. A cluster that would
/// straddle the limit is left out entirely.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut end = 0;
    for (byte_idx, grapheme) in s.grapheme_indices(true) {
        let next = byte_idx + grapheme.len();
        if str_width(&s[..next]) > max_width {
            break;
        }
        end = next;
    }
    &s[..end]
}

/// Left-justify `s` in exactly `width` columns, truncating or padding with
/// spaces as needed.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let visible = truncate_to_width(s, width);
    let padding = width.saturating_sub(str_width(visible));
    let mut out = String::with_capacity(visible.len() + padding);
    out.push_str(visible);
    out.extend(std::iter::repeat(' ').take(padding));
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: fitted text is exactly the requested width and a prefix of the input
        #[test]
        fn fit_is_exact_width(
            s in "[a-z \\x{2764}\\x{FE0F}\\x{4f60}\\x{301}\\x{1F680}]{0,20}",
            width in 0usize..30,
        ) {
            let fitted = fit_to_width(&s, width);
            prop_assert_eq!(str_width(&fitted), width);
            prop_assert!(s.starts_with(truncate_to_width(&s, width)));
        }
    }
}
