// Binary-level tests: argument handling, exit codes and failure messages

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{numbered_text, write_fixture};
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with logging redirected into `dir`
fn bionic(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("bionic");
    cmd.env("XDG_STATE_HOME", dir.path())
        .env_remove("RUST_LOG")
        .arg("--log-file")
        .arg(dir.path().join("bionic.log"));
    cmd
}

fn flash(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("bionic-flash");
    cmd.env("XDG_STATE_HOME", dir.path())
        .arg("--log-file")
        .arg(dir.path().join("flash.log"));
    cmd
}

#[test]
fn test_two_files_is_usage_error() {
    let dir = TempDir::new().unwrap();
    bionic(&dir)
        .arg("first.txt")
        .arg("second.txt")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("cannot open").not());
}

#[test]
fn test_missing_argument_is_usage_error() {
    let dir = TempDir::new().unwrap();
    bionic(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_file_fails_to_open() {
    let dir = TempDir::new().unwrap();
    bionic(&dir)
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot open"))
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn test_piped_stdin_is_rejected_before_drawing() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(dir.path(), "book.txt", &numbered_text(45));

    bionic(&dir)
        .arg(&file)
        .write_stdin("q")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot enter raw terminal mode"));
}

#[test]
fn test_help_and_version_exit_zero() {
    let dir = TempDir::new().unwrap();
    bionic(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bionic"))
        .stdout(predicate::str::contains("--log-file"));

    bionic(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_log_file_records_session_start() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(dir.path(), "book.txt", "hello\n");

    bionic(&dir).arg(&file).write_stdin("q").assert().code(1);

    let log = std::fs::read_to_string(dir.path().join("bionic.log")).unwrap();
    assert!(log.contains("Pager starting"), "{log}");
    assert!(log.contains("Loaded"), "{log}");
}

#[test]
fn test_flash_prints_words_and_rate() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(dir.path(), "short.txt", "one two\nthree\n");

    flash(&dir)
        .arg("--wpm")
        .arg("6000")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("one"))
        .stdout(predicate::str::contains("three"))
        .stdout(predicate::str::contains("Words Per Minute: "));
}

#[test]
fn test_flash_rejects_zero_wpm() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(dir.path(), "short.txt", "one\n");

    flash(&dir)
        .arg("--wpm")
        .arg("0")
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_flash_missing_file() {
    let dir = TempDir::new().unwrap();
    flash(&dir)
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_sigint_stops_a_load_that_never_finishes() {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::process::ExitStatusExt;
    use std::process::{Command, Stdio};
    use std::time::{Duration, Instant};

    let dir = TempDir::new().unwrap();
    let fifo = dir.path().join("endless.fifo");
    let c_path = CString::new(fifo.as_os_str().as_bytes()).unwrap();
    assert_eq!(unsafe { libc::mkfifo(c_path.as_ptr(), 0o600) }, 0);

    let mut child = Command::new(assert_cmd::cargo::cargo_bin!("bionic"))
        .env("XDG_STATE_HOME", dir.path())
        .arg("--log-file")
        .arg(dir.path().join("bionic.log"))
        .arg(&fifo)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Read-write open does not block on Linux and keeps the pipe from ever
    // reaching end of file
    let writer = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open(&fifo)
        .unwrap();
    std::thread::sleep(Duration::from_millis(300));

    unsafe { libc::kill(child.id() as libc::pid_t, libc::SIGINT) };

    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("bionic kept loading after SIGINT");
        }
        std::thread::sleep(Duration::from_millis(20));
    };
    drop(writer);

    assert_eq!(status.signal(), Some(libc::SIGINT));
}
