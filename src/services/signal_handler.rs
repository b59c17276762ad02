//! Termination signal handling
//!
//! SIGTERM, SIGHUP and SIGINT are caught by a handler that only records the
//! request in an atomic flag. The handler is installed without `SA_RESTART`,
//! so a read blocked on the terminal fails with `EINTR`; the session loop then
//! checks [`termination_requested`] and ends through the normal cleanup path,
//! which restores the terminal before the process exits.

use std::sync::atomic::{AtomicBool, Ordering};

static TERMINATION_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Whether a termination signal has been received.
pub fn termination_requested() -> bool {
    TERMINATION_REQUESTED.load(Ordering::SeqCst)
}

/// Record a termination request. Also used by tests to simulate a signal.
pub fn request_termination() {
    TERMINATION_REQUESTED.store(true, Ordering::SeqCst);
}

/// Install handlers for SIGTERM, SIGHUP and SIGINT.
///
/// On non-Unix platforms this is a no-op and the default behavior applies.
pub fn install_signal_handlers() {
    #[cfg(unix)]
    unix::install_termination_signal_handlers();
}

#[cfg(unix)]
mod unix {
    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

    extern "C" fn termination_handler(_: libc::c_int) {
        // Async-signal-safe: a single atomic store
        super::request_termination();
    }

    pub fn install_termination_signal_handlers() {
        let handler = SigHandler::Handler(termination_handler);
        // No SA_RESTART: the blocking read must return EINTR
        let action = SigAction::new(handler, SaFlags::empty(), SigSet::empty());

        for signal in [Signal::SIGTERM, Signal::SIGHUP, Signal::SIGINT] {
            // SAFETY: the handler only touches an atomic
            if let Err(e) = unsafe { sigaction(signal, &action) } {
                tracing::warn!("Failed to set {:?} handler: {}", signal, e);
            }
        }

        tracing::debug!("Installed termination signal handlers");
    }
}
