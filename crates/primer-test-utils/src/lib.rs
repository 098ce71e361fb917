//! Test utilities and fixtures for Primer development.
//!
//! Provides reference data for the driver scenario (the seeded sequence,
//! filled buffers, the record template) and I/O fixtures in
//! [`fixtures`] for exercising output failure paths.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{FailingWriter, LineCapture};

use primer_core::Record;

/// Literal values the growable sequence starts with.
pub const SEED: [i32; 7] = [6, 2, 3, 7, 5, 4, 1];

/// Number of values appended after the seed.
pub const APPEND_COUNT: i32 = 32;

/// The record every slot of the record array is filled with.
pub const RECORD_TEMPLATE: Record = Record::new(2, 4, 13);

/// A buffer of `len` copies of `value`.
pub fn filled_buffer(len: usize, value: i32) -> Vec<i32> {
    vec![value; len]
}

/// The growable sequence after the append phase: the seed followed by
/// `0..APPEND_COUNT`.
pub fn expected_sequence() -> Vec<i32> {
    SEED.iter().copied().chain(0..APPEND_COUNT).collect()
}

/// The exact bytes a default run writes to stdout.
pub fn expected_stdout() -> String {
    let mut out = String::new();
    for value in expected_sequence() {
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out.push_str("hello world!\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_sequence_has_39_values() {
        let seq = expected_sequence();
        assert_eq!(seq.len(), 39);
        assert_eq!(&seq[..7], &SEED);
        assert_eq!(seq[7], 0);
        assert_eq!(seq[38], 31);
    }

    #[test]
    fn expected_stdout_has_40_lines() {
        let out = expected_stdout();
        assert_eq!(out.lines().count(), 40);
        assert_eq!(out.lines().last(), Some("hello world!"));
    }
}
