//! Word-at-a-time flash reader
//!
//! Shows a text one word at a time at a fixed words-per-minute rate, each word
//! replacing the previous one behind a fixed indent, then reports the reading
//! rate actually achieved.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::error::PagerError;
use crate::services::time_source::TimeSource;

/// Columns of blank space in front of every word
pub const INDENT: usize = 50;

pub const DEFAULT_WPM: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashOptions {
    pub wpm: u32,
    /// Clear the whole screen before each word instead of rewriting the line
    pub clear_each: bool,
}

impl Default for FlashOptions {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            clear_each: false,
        }
    }
}

/// Time each word stays on screen.
pub fn delay_for(wpm: u32) -> Duration {
    Duration::from_secs(60) / wpm.max(1)
}

/// Whitespace-separated words of `text`; newlines, tabs and carriage returns
/// all separate words.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Read the whole file at `path`, replacing invalid UTF-8.
pub fn load_text(path: &Path) -> Result<String, PagerError> {
    let mut file = File::open(path).map_err(|source| PagerError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| PagerError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Timing state of one flash run
#[derive(Debug, Clone, Copy)]
pub struct FlashSession {
    started: Instant,
    words_shown: u64,
}

impl FlashSession {
    pub fn start(time: &dyn TimeSource) -> Self {
        Self {
            started: time.now(),
            words_shown: 0,
        }
    }

    pub fn record_word(&mut self) {
        self.words_shown += 1;
    }

    pub fn words_shown(&self) -> u64 {
        self.words_shown
    }

    /// Achieved reading rate, or `None` when no time has passed.
    pub fn words_per_minute(&self, time: &dyn TimeSource) -> Option<f64> {
        let minutes = time.elapsed_since(self.started).as_secs_f64() / 60.0;
        (minutes > 0.0).then(|| self.words_shown as f64 / minutes)
    }
}

/// Draw `word` in place of the previous one.
pub fn show_word<W: Write>(out: &mut W, word: &str, clear_each: bool) -> io::Result<()> {
    if clear_each {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    } else {
        queue!(out, MoveToColumn(0), Clear(ClearType::UntilNewLine))?;
    }
    queue!(out, Print(" ".repeat(INDENT)), Print(word))?;
    out.flush()
}

/// Flash every word of `text`, then print the achieved rate.
pub fn run<W: Write>(
    text: &str,
    options: &FlashOptions,
    out: &mut W,
    time: &dyn TimeSource,
) -> io::Result<FlashSession> {
    let words = split_words(text);
    let delay = delay_for(options.wpm);
    tracing::info!(
        "Flashing {} words at {} wpm ({:?} per word)",
        words.len(),
        options.wpm,
        delay
    );

    let mut session = FlashSession::start(time);
    for word in words {
        show_word(out, word, options.clear_each)?;
        session.record_word();
        time.sleep(delay);
    }

    writeln!(out)?;
    if let Some(wpm) = session.words_per_minute(time) {
        writeln!(out, "\nWords Per Minute: {:.2}", wpm)?;
    }
    out.flush()?;

    Ok(session)
}
