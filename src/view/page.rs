//! Page rendering
//!
//! Paints one page of the document as a full frame: clear, the emphasized page
//! lines, blank padding up to the page height, then the status bar on a fixed
//! row. Lines are terminated with `\r\n` because raw mode turns off the
//! terminal's own newline translation.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use crate::config::{PagerConfig, END_OF_FILE_MESSAGE};
use crate::model::document::Document;
use crate::primitives::bionic::emphasize_line;
use crate::view::status_bar::StatusBar;

/// Everything needed to paint one frame
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub document: &'a Document,
    pub page_index: usize,
    pub term_width: usize,
    pub source_name: &'a str,
    /// Draw the end-of-file message below the status bar
    pub end_reached: bool,
}

impl PageView<'_> {
    pub fn status_bar(&self) -> StatusBar<'_> {
        StatusBar {
            page_index: self.page_index,
            total_pages: self.document.total_pages(),
            source_name: self.source_name,
        }
    }
}

/// Clear the screen and move the cursor to the top-left corner.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}

/// Paint the page described by `view`.
///
/// The whole frame is redrawn every time, so painting the same view twice
/// produces identical output.
pub fn render_page<W: Write>(out: &mut W, view: &PageView, config: &PagerConfig) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let lines = view.document.page(view.page_index);
    for line in lines {
        queue!(out, Print(emphasize_line(line)), Print("\r\n"))?;
    }
    // Keep the status bar on the same row for a short last page
    for _ in lines.len()..config.lines_per_page {
        queue!(out, Print("\r\n"))?;
    }

    queue!(
        out,
        MoveTo(0, config.status_row()),
        SetAttribute(Attribute::Reverse),
        Print(view.status_bar().render(view.term_width)),
        SetAttribute(Attribute::Reset)
    )?;

    if view.end_reached {
        queue!(out, MoveTo(0, config.message_row()), Print(END_OF_FILE_MESSAGE))?;
    }

    out.flush()
}
