//! Error taxonomy for the pager
//!
//! Every failure is fatal to the session and propagates straight to `main`.
//! Terminal width detection has no variant here: it degrades to a default
//! width instead of failing.

use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum PagerError {
    /// Wrong command-line arguments. Carries the rendered usage text.
    Usage(String),
    /// The source file could not be opened.
    FileAccess { path: PathBuf, source: io::Error },
    /// The source file failed while it was being read.
    Read { path: PathBuf, source: io::Error },
    /// Raw mode could not be acquired (for example stdin is not a terminal).
    TerminalMode(io::Error),
    /// Reading keys or writing frames failed during the session.
    TerminalIo(io::Error),
}

impl std::fmt::Display for PagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PagerError::Usage(msg) => {
                let msg = msg.trim_start_matches("error: ").trim_end();
                write!(f, "{msg}")
            }
            PagerError::FileAccess { path, .. } => {
                write!(f, "cannot open {}", path.display())
            }
            PagerError::Read { path, .. } => write!(f, "failed to read {}", path.display()),
            PagerError::TerminalMode(_) => write!(f, "cannot enter raw terminal mode"),
            PagerError::TerminalIo(_) => write!(f, "terminal I/O failed"),
        }
    }
}

impl std::error::Error for PagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PagerError::Usage(_) => None,
            PagerError::FileAccess { source, .. }
            | PagerError::Read { source, .. }
            | PagerError::TerminalMode(source)
            | PagerError::TerminalIo(source) => Some(source),
        }
    }
}
