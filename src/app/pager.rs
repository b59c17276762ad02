//! Navigation state machine
//!
//! The pager reacts to one raw input byte at a time. Mapping bytes to
//! [`Action`]s and applying actions to the state are both free of I/O, so
//! every transition can be checked directly; the session loop in
//! [`super::session`] only reads bytes and paints frames.

use crate::model::document::Document;
use crate::view::page::PageView;

/// Ctrl-C as delivered in raw mode
const CTRL_C: u8 = 0x03;

/// Where the reader is in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// Paging through the document
    Reading,
    /// An advance was requested on the last page
    EndReached,
    /// The session is over; the loop exits
    Terminated,
}

/// What a keystroke asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Advance,
    /// Unbound key: redraw the same frame
    Ignore,
}

impl Action {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'q' | b'Q' | CTRL_C => Action::Quit,
            b'\n' | b'\r' | b' ' => Action::Advance,
            _ => Action::Ignore,
        }
    }
}

/// One reading session over a loaded document
#[derive(Debug)]
pub struct Pager {
    document: Document,
    source_name: String,
    term_width: usize,
    page_index: usize,
    state: PagerState,
}

impl Pager {
    pub fn new(document: Document, source_name: impl Into<String>, term_width: usize) -> Self {
        Self {
            document,
            source_name: source_name.into(),
            term_width: term_width.max(1),
            page_index: 0,
            state: PagerState::Reading,
        }
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Zero-based index of the page on screen.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn total_pages(&self) -> usize {
        self.document.total_pages()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_terminated(&self) -> bool {
        self.state == PagerState::Terminated
    }

    /// Apply one action and return the new state.
    ///
    /// The page index only ever moves forward by one and stops at the last
    /// page. Once terminated, nothing changes.
    pub fn apply(&mut self, action: Action) -> PagerState {
        let last_page = self.document.last_page();

        self.state = match (self.state, action) {
            (PagerState::Terminated, _) => PagerState::Terminated,
            (_, Action::Quit) => PagerState::Terminated,
            (_, Action::Advance) if self.page_index < last_page => {
                self.page_index += 1;
                PagerState::Reading
            }
            (_, Action::Advance) => PagerState::EndReached,
            (state, Action::Ignore) => state,
        };

        tracing::debug!(
            "{:?} -> page {}/{} ({:?})",
            action,
            self.page_index + 1,
            self.total_pages(),
            self.state
        );
        self.state
    }

    /// Map a raw input byte to an action and apply it.
    pub fn handle_byte(&mut self, byte: u8) -> PagerState {
        self.apply(Action::from_byte(byte))
    }

    /// End the session without a keystroke (end of input or a signal).
    pub fn terminate(&mut self) {
        self.state = PagerState::Terminated;
    }

    /// The frame to paint for the current state.
    pub fn view(&self) -> PageView<'_> {
        PageView {
            document: &self.document,
            page_index: self.page_index,
            term_width: self.term_width,
            source_name: &self.source_name,
            end_reached: self.state == PagerState::EndReached,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the page index never decreases and never passes the last page
        #[test]
        fn page_index_is_monotonic_and_bounded(
            line_count in 0usize..200,
            input in prop::collection::vec(any::<u8>(), 0..100),
        ) {
            let lines = (0..line_count).map(|i| i.to_string()).collect();
            let mut pager = Pager::new(Document::from_lines(lines, 20), "p", 80);
            let last_page = pager.document().last_page();

            let mut previous = pager.page_index();
            for byte in input {
                pager.handle_byte(byte);
                prop_assert!(pager.page_index() >= previous);
                prop_assert!(pager.page_index() <= last_page);
                previous = pager.page_index();
            }
        }

        /// Property: EndReached only happens on the last page
        #[test]
        fn end_reached_only_on_last_page(
            line_count in 0usize..200,
            advances in 0usize..20,
        ) {
            let lines = (0..line_count).map(|i| i.to_string()).collect();
            let mut pager = Pager::new(Document::from_lines(lines, 20), "p", 80);

            for _ in 0..advances {
                if pager.handle_byte(b' ') == PagerState::EndReached {
                    prop_assert_eq!(pager.page_index(), pager.document().last_page());
                }
            }
        }
    }
}
