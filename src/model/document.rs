//! Paged document
//!
//! A `Document` is the full sequence of display lines for one source file:
//! every source line run through [`wrap_line`] at the session's terminal width,
//! concatenated in source order. It is built once at startup and never
//! mutated, and it owns the page arithmetic the renderer and controller share.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::ops::Range;
use std::path::Path;

use crate::error::PagerError;
use crate::primitives::line_wrapping::wrap_line;

/// Immutable, pre-wrapped document split into fixed-size pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    lines_per_page: usize,
}

impl Document {
    /// Build a document from display lines that are already wrapped.
    pub fn from_lines(lines: Vec<String>, lines_per_page: usize) -> Self {
        debug_assert!(lines_per_page > 0, "pages must hold at least one line");
        Self {
            lines,
            lines_per_page: lines_per_page.max(1),
        }
    }

    /// Load and wrap the file at `path`.
    ///
    /// Fails with [`PagerError::FileAccess`] if the file cannot be opened and
    /// with [`PagerError::Read`] if reading fails part way through. There is no
    /// partial document in either case.
    pub fn load(path: &Path, width: usize, lines_per_page: usize) -> Result<Self, PagerError> {
        let file = File::open(path).map_err(|source| PagerError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::from_reader(BufReader::new(file), width, lines_per_page).map_err(
            |source| PagerError::Read {
                path: path.to_path_buf(),
                source,
            },
        )?;

        tracing::info!(
            "Loaded {:?}: {} display lines, {} pages at width {}",
            path,
            document.len(),
            document.total_pages(),
            width
        );
        Ok(document)
    }

    /// Read source lines from `reader` and wrap each one to `width` columns.
    ///
    /// Lines end at `\n` or `\r\n`; the last line does not need a terminator.
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        width: usize,
        lines_per_page: usize,
    ) -> io::Result<Self> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            lines.extend(wrap_line(&String::from_utf8_lossy(&buf), width));
        }

        Ok(Self::from_lines(lines, lines_per_page))
    }

    /// All display lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of display lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    /// `max(1, ceil(len / lines_per_page))`: an empty document still has one
    /// (blank) page.
    pub fn total_pages(&self) -> usize {
        self.lines.len().div_ceil(self.lines_per_page).max(1)
    }

    /// Index of the last page.
    pub fn last_page(&self) -> usize {
        self.total_pages() - 1
    }

    /// Line range shown on page `index`, clamped to the document.
    pub fn page_range(&self, index: usize) -> Range<usize> {
        let start = index.saturating_mul(self.lines_per_page).min(self.lines.len());
        let end = start.saturating_add(self.lines_per_page).min(self.lines.len());
        start..end
    }

    /// Display lines shown on page `index`.
    pub fn page(&self, index: usize) -> &[String] {
        &self.lines[self.page_range(index)]
    }
}

/// Column count of the controlling terminal, or `fallback` when it cannot be
/// determined (not a terminal, query failure, or a zero-width report).
///
/// Sampled once at startup; resizing mid-session is not tracked.
pub fn detect_terminal_width(fallback: usize) -> usize {
    width_or_fallback(crossterm::terminal::size(), fallback)
}

fn width_or_fallback(size: io::Result<(u16, u16)>, fallback: usize) -> usize {
    match size {
        Ok((cols, _)) if cols > 0 => usize::from(cols),
        Ok(_) => {
            tracing::warn!("Terminal reported zero columns, using width {}", fallback);
            fallback
        }
        Err(e) => {
            tracing::warn!("Failed to query terminal size ({}), using width {}", e, fallback);
            fallback
        }
    }
}
