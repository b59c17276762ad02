//! Terminal mode management
//!
//! The pager only needs raw mode: single keystrokes without line buffering or
//! echo. `TerminalModes` records whether raw mode was entered and restores the
//! terminal via `undo()`, which also runs on drop so every exit path (normal
//! return, early `?` return, unwinding panic) leaves the terminal usable.

use std::io::{self, stdout, IsTerminal, Write};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Tracks whether raw mode has been enabled and provides cleanup.
///
/// Use `TerminalModes::enable()` to set up the terminal, then call `undo()`
/// (or just drop the value) to restore the original state.
#[derive(Debug, Default)]
pub struct TerminalModes {
    raw_mode: bool,
}

impl TerminalModes {
    /// Create a new TerminalModes with nothing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the controlling terminal into raw mode.
    ///
    /// Fails without touching the terminal when stdin is not a terminal,
    /// since keystrokes could never be read from it.
    pub fn enable() -> io::Result<Self> {
        let mut modes = Self::new();

        if !io::stdin().is_terminal() {
            tracing::error!("Standard input is not a terminal");
            return Err(io::Error::other("standard input is not a terminal"));
        }

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(e);
        }
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        Ok(modes)
    }

    /// Restore the terminal to its original state.
    ///
    /// Safe to call multiple times; only modes that are still enabled are
    /// disabled.
    pub fn undo(&mut self) {
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
            tracing::debug!("Disabled raw mode");
        }

        let _ = stdout().flush();
    }

    /// Returns true if raw mode is enabled.
    pub fn raw_mode_enabled(&self) -> bool {
        self.raw_mode
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Unconditionally restore terminal state without tracking.
///
/// Intended for the panic hook, which has no access to the `TerminalModes`
/// value. Disabling raw mode when it was never enabled is harmless.
pub fn emergency_cleanup() {
    let _ = disable_raw_mode();
    let _ = stdout().flush();
}
