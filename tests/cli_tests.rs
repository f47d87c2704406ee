//! End-to-end tests for the `paste` binary
//!
//! These run the built executable and check stdout, stderr and the exit
//! status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn paste(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_paste"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn paste");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for paste")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("stdout is UTF-8")
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).expect("stderr is UTF-8")
}

#[test]
fn test_stdin_single_column() {
    let output = paste(&["-"], b"x\ny\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "x\ny\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_repeated_dash_shares_stdin() {
    let output = paste(&["-d,", "-", "-"], b"1\n2\n3\n4\n5\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1,2\n3,4\n5,\n");
}

#[test]
fn test_serial_stdin() {
    let output = paste(&["-s", "-d", "\\0", "-"], b"a\nb\nc\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "abc\n");
}

#[test]
fn test_files_and_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("left");
    std::fs::write(&file, "L1\nL2\n").unwrap();

    let output = paste(&[file.to_str().unwrap(), "-"], b"R1\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "L1\tR1\nL2\t\n");
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = paste(&[], b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(stderr(&output), "usage: paste [-s] [-d list] file...\n");
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let output = paste(&["-q", "-"], b"");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "usage: paste [-s] [-d list] file...\n");
}

#[test]
fn test_empty_delimiters_exit_code() {
    let output = paste(&["-d", "", "-"], b"");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "no delimiters specified\n");
}

#[test]
fn test_missing_file_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = paste(&[missing.to_str().unwrap()], b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let message = stderr(&output);
    assert!(message.starts_with("can't open '"));
    assert!(message.contains("missing.txt"));
    assert!(message.contains("os error"));
    assert_eq!(message.lines().count(), 1);
}

#[test]
fn test_read_error_keeps_partial_output() {
    let output = paste(&["-"], b"good\n\xFF\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "good\n");
    assert!(stderr(&output).starts_with("'-' read error:"));
}

#[test]
fn test_help_flag_is_usage_error() {
    let output = paste(&["-h", "-"], b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(stderr(&output), "usage: paste [-s] [-d list] file...\n");
}

#[test]
fn test_repeated_flags_last_delimiter_wins() {
    let output = paste(&["-s", "-s", "-d,", "-d;", "-"], b"a\nb\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a;b\n");
}
