//! XDG-compliant log directory management
//!
//! Logs are stored in `$XDG_STATE_HOME/bionic-pager/logs/` (typically
//! `~/.local/state/bionic-pager/logs/`). Each process writes a PID-named file
//! so concurrent sessions never share a log; files left behind by processes
//! that are gone are removed once they are old enough.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

const APP_DIR: &str = "bionic-pager";

/// Minimum age for log files to be cleaned up (24 hours)
const CLEANUP_AGE: Duration = Duration::from_secs(24 * 60 * 60);

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the log directory, creating it if necessary.
///
/// Falls back to `~/.local/state/bionic-pager/logs/` if XDG_STATE_HOME is not
/// set, and to the system temp directory as a last resort.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let fallback = || std::env::temp_dir().join(format!("{APP_DIR}-logs"));
        let dir = get_xdg_log_dir().unwrap_or_else(fallback);

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            return fallback();
        }

        dir
    })
}

fn get_xdg_log_dir() -> Option<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        let path = PathBuf::from(state_home);
        if path.is_absolute() {
            return Some(path.join(APP_DIR).join("logs"));
        }
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".local")
            .join("state")
            .join(APP_DIR)
            .join("logs"),
    )
}

/// Log file for this process of the binary named `program`.
///
/// Returns `{log_dir}/{program}-{PID}.log`
pub fn main_log_path(program: &str) -> PathBuf {
    log_dir().join(format!("{}-{}.log", program, std::process::id()))
}

/// Remove log files of dead processes that are older than a day.
pub fn cleanup_stale_logs() {
    cleanup_stale_logs_in_dir(log_dir(), std::process::id());
}

fn cleanup_stale_logs_in_dir(dir: &Path, current_pid: u32) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        let Some(pid) = extract_pid_from_filename(&name) else {
            continue;
        };
        if pid == current_pid {
            continue;
        }

        if !is_process_running(pid)
            && is_file_older_than(&entry.path(), CLEANUP_AGE)
            && entry.file_type().map(|t| t.is_file()).unwrap_or(false)
        {
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e);
            } else {
                tracing::debug!("Cleaned up stale log file: {:?}", entry.path());
            }
        }
    }
}

fn is_file_older_than(path: &Path, age: Duration) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) else {
        return false;
    };

    SystemTime::now()
        .duration_since(modified)
        .map(|elapsed| elapsed > age)
        .unwrap_or(false)
}

/// Extract the PID from a name like "bionic-12345.log"
fn extract_pid_from_filename(name: &str) -> Option<u32> {
    let without_ext = name.strip_suffix(".log")?;
    let last_hyphen = without_ext.rfind('-')?;
    without_ext[last_hyphen + 1..].parse().ok()
}

fn is_process_running(pid: u32) -> bool {
    #[cfg(unix)]
    {
        // Signal 0 only checks whether the process exists
        unsafe {
            libc::kill(pid as libc::pid_t, 0) == 0
                || std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
        }
    }

    #[cfg(not(unix))]
    {
        let _ = pid;
        true
    }
}
