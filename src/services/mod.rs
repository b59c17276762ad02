//! Process-level services: terminal modes, signals, logging and time

pub mod log_dirs;
pub mod signal_handler;
pub mod terminal_modes;
pub mod time_source;
pub mod tracing_setup;
