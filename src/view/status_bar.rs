//! Status bar rendering

use crate::config::HELP_TEXT;
use crate::primitives::display_width::fit_to_width;

/// Reading position shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusBar<'a> {
    /// Zero-based index of the page on screen
    pub page_index: usize,
    pub total_pages: usize,
    /// File name of the document being read
    pub source_name: &'a str,
}

impl StatusBar<'_> {
    /// Share of the document read so far, counting the current page as read.
    pub fn percent(&self) -> f64 {
        (self.page_index + 1) as f64 / self.total_pages.max(1) as f64 * 100.0
    }

    /// Unpadded status text.
    pub fn text(&self) -> String {
        format!(
            " Page {}/{} ({:.1}%) | {} | {}",
            self.page_index + 1,
            self.total_pages,
            self.percent(),
            self.source_name,
            HELP_TEXT
        )
    }

    /// Status text left-justified in exactly `width` columns.
    ///
    /// Text that does not fit is cut so the bar never wraps onto a second row.
    pub fn render(&self, width: usize) -> String {
        fit_to_width(&self.text(), width)
    }
}
