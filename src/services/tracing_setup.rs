//! Tracing subscriber setup
//!
//! Shared tracing configuration used by both binaries and tests. Output goes
//! to a log file because the terminal belongs to the pager.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber with file logging.
///
/// This sets up:
/// - File-based logging with the given log file
/// - Environment-based filtering (RUST_LOG) with DEBUG default
///
/// Returns false if the log file could not be created or a global subscriber
/// was already set. Logging is best effort, so callers carry on either way.
pub fn init_global(log_file_path: &Path) -> bool {
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };

    build_subscriber(log_file).try_init().is_ok()
}

/// Build a subscriber that writes formatted events to `log_file`.
///
/// This is the core subscriber configuration shared between production and tests.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());

    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
