//! Integration test: run the `primer` binary as a child process.

use std::process::Command;

use primer_test_utils::{expected_sequence, expected_stdout};

fn primer() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_primer"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_sequence_then_greeting_and_exits_zero() {
    let output = primer().output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_stdout());
}

#[test]
fn prints_exactly_39_integers_before_greeting() {
    let output = primer().output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 40);
    let values: Vec<i32> = lines[..39].iter().map(|l| l.parse().unwrap()).collect();
    assert_eq!(values, expected_sequence());
    assert_eq!(lines[39], "hello world!");
}

#[test]
fn arguments_are_ignored() {
    let output = primer().args(["--verbose", "extra", "42"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_stdout());
}

#[test]
fn default_log_level_keeps_stderr_quiet() {
    let output = primer().output().unwrap();
    assert!(output.stderr.is_empty());
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let output = primer().env("RUST_LOG", "debug").output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_stdout());
    assert!(!output.stderr.is_empty());
}
