#![allow(dead_code)]

pub mod tracing;

use std::fs;
use std::path::{Path, PathBuf};

/// `count` lines reading "line 1", "line 2", ...
pub fn numbered_text(count: usize) -> String {
    (1..=count).map(|i| format!("line {i}\n")).collect()
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Screen text of `row` after feeding `bytes` to a 24x80 terminal.
pub fn screen_row(parser: &vt100::Parser, row: usize) -> String {
    parser.screen().rows(0, 80).nth(row).unwrap_or_default()
}
