//! Integration test: the full driver scenario through the public API.
//!
//! Covers the end-to-end properties of a default run: output layout,
//! intermediate values, drain order, and that every heap allocation is
//! released before a successful `run` returns. A write failure midway
//! stops the run with `DriverError::Output` and leaves the driver usable.

use primer_engine::{Driver, DriverConfig, DriverError};
use primer_test_utils::{expected_sequence, FailingWriter, LineCapture};

#[test]
fn default_run_prints_sequence_then_greeting() {
    let driver = Driver::new(DriverConfig::default()).unwrap();
    let mut out = LineCapture::new();
    driver.run(&mut out).unwrap();

    let lines = out.lines();
    assert_eq!(lines.len(), 40);
    let printed: Vec<i32> = lines[..39].iter().map(|l| l.parse().unwrap()).collect();
    assert_eq!(printed, expected_sequence());
    assert_eq!(lines[39], "hello world!");
}

#[test]
fn report_carries_reference_values() {
    let report = Driver::new(DriverConfig::default())
        .unwrap()
        .run(&mut LineCapture::new())
        .unwrap();
    assert_eq!(report.plus_four, 18);
    assert_eq!(report.total, 280);
    assert_eq!(report.factorial, 720);
    assert_eq!(report.fibonacci, 13);
    assert_eq!(report.drained.len(), 39);
    assert_eq!(report.drained.first(), Some(&31));
    assert_eq!(report.drained.last(), Some(&6));
}

#[test]
fn custom_config_changes_output() {
    let cfg = DriverConfig {
        seed: smallvec::smallvec![9],
        append_count: 2,
        greeting: "bye".into(),
        ..DriverConfig::default()
    };
    let mut out = LineCapture::new();
    Driver::new(cfg).unwrap().run(&mut out).unwrap();
    assert_eq!(out.text(), "9\n0\n1\nbye\n");
}

#[test]
fn repeated_runs_are_identical() {
    let driver = Driver::new(DriverConfig::default()).unwrap();
    let mut first = LineCapture::new();
    let mut second = LineCapture::new();
    let a = driver.run(&mut first).unwrap();
    let b = driver.run(&mut second).unwrap();
    assert_eq!(first.text(), second.text());
    assert_eq!(a.drained, b.drained);
    assert_eq!(a.releases, b.releases);
}

#[test]
fn failed_output_still_reports_error_cleanly() {
    let driver = Driver::new(DriverConfig::default()).unwrap();
    let mut out = FailingWriter::new(10);
    let err = driver.run(&mut out).unwrap_err();
    assert!(matches!(err, DriverError::Output(_)));
    assert_eq!(out.calls(), 11);

    let report = driver.run(&mut LineCapture::new()).unwrap();
    assert_eq!(report.live_after_release, 0);
    assert_eq!(report.releases, 5);
}
