//! Pager configuration
//!
//! The pager is not configured through files or the environment; these are the
//! fixed layout constants plus a small value type that carries them through the
//! loader, renderer and controller.

/// Number of display lines shown per page.
pub const LINES_PER_PAGE: usize = 20;

/// Width used when the terminal cannot report its column count.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Key help shown at the end of the status bar.
pub const HELP_TEXT: &str = "Space/Enter: next page | q: quit";

/// Message drawn below the status bar once the last page has been acknowledged.
pub const END_OF_FILE_MESSAGE: &str = "End of file reached... press q to quit";

/// Layout configuration shared by the loader, renderer and controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    /// Display lines per page
    pub lines_per_page: usize,

    /// Wrap width when terminal width detection fails
    pub fallback_width: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            lines_per_page: LINES_PER_PAGE,
            fallback_width: DEFAULT_TERMINAL_WIDTH,
        }
    }
}

impl PagerConfig {
    /// Zero-based screen row of the status bar.
    ///
    /// The page area is followed by one spacer row, so the bar sits on the
    /// 1-based row `lines_per_page + 2` no matter how full the page is.
    pub fn status_row(&self) -> u16 {
        u16::try_from(self.lines_per_page + 1).unwrap_or(u16::MAX)
    }

    /// Zero-based screen row of the end-of-file message.
    pub fn message_row(&self) -> u16 {
        self.status_row().saturating_add(1)
    }
}
