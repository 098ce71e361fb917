//! Driver configuration, validation, and error types.
//!
//! [`DriverConfig`] is the input for constructing a
//! [`Driver`](crate::driver::Driver). [`validate()`](DriverConfig::validate)
//! checks structural invariants up front so a run never fails on a bad
//! parameter halfway through. The defaults reproduce the reference run.

use std::error::Error;
use std::fmt;

use primer_arena::{ArenaConfig, ArenaError};
use primer_core::Record;
use smallvec::{smallvec, SmallVec};

/// Values the growable sequence starts with. Inline up to 8 entries.
pub type Seed = SmallVec<[i32; 8]>;

/// Number of heap allocations a run holds at its peak: two filled
/// buffers, one spare buffer, and the dynamic slot.
pub const PEAK_ALLOCATIONS: usize = 4;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`DriverConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Arena configuration is invalid.
    Arena(ArenaError),
    /// `buffer_len` is zero; the run reads the first element.
    EmptyBuffer,
    /// `sum_len` reaches past the end of the buffer.
    SumLenExceedsBuffer {
        /// The configured summation length.
        sum_len: usize,
        /// The configured buffer length.
        buffer_len: usize,
    },
    /// The greeting must print as exactly one line.
    InvalidGreeting,
    /// The arena caps are too small for one run.
    ArenaTooSmall {
        /// Elements a run needs live at its peak.
        needed_elements: usize,
        /// Allocations a run needs live at its peak.
        needed_allocations: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::EmptyBuffer => write!(f, "buffer_len must be at least 1"),
            Self::SumLenExceedsBuffer {
                sum_len,
                buffer_len,
            } => {
                write!(f, "sum_len {sum_len} exceeds buffer_len {buffer_len}")
            }
            Self::InvalidGreeting => write!(f, "greeting must not contain a line break"),
            Self::ArenaTooSmall {
                needed_elements,
                needed_allocations,
            } => {
                write!(
                    f,
                    "arena too small: run needs {needed_allocations} allocations and {needed_elements} elements"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── DriverConfig ───────────────────────────────────────────────────

/// Complete configuration for one driver run.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    /// Number of records in the record array. Default: 12.
    pub record_count: usize,
    /// Value every record is filled with. Default: `(2, 4, 13)`.
    pub record_template: Record,
    /// Length of each integer buffer. Default: 20. Minimum: 1.
    pub buffer_len: usize,
    /// Value the two working buffers are filled with. Default: 14.
    pub fill_value: i32,
    /// Initial value of the dynamic scalar. Default: 0.
    pub scalar_init: i32,
    /// Number of leading buffer elements summed. Default: 20.
    pub sum_len: usize,
    /// Initial contents of the growable sequence.
    /// Default: `[6, 2, 3, 7, 5, 4, 1]`.
    pub seed: Seed,
    /// Number of counting values `0..append_count` appended. Zero or
    /// negative appends nothing. Default: 32.
    pub append_count: i32,
    /// Input to `factorial`. Default: 6.
    pub factorial_input: u64,
    /// Input to `fib_variant`. Default: 8.
    pub fib_input: u64,
    /// Line printed after the sequence. Default: `hello world!`.
    pub greeting: String,
    /// Use the checked arithmetic helpers and fail the run on overflow
    /// instead of wrapping. Default: false.
    pub checked_arithmetic: bool,
    /// Caps for the run's heap arena.
    pub arena: ArenaConfig,
}

impl DriverConfig {
    /// Default record count.
    pub const DEFAULT_RECORD_COUNT: usize = 12;
    /// Default buffer length.
    pub const DEFAULT_BUFFER_LEN: usize = 20;
    /// Default buffer fill value.
    pub const DEFAULT_FILL_VALUE: i32 = 14;
    /// Default number of appended values.
    pub const DEFAULT_APPEND_COUNT: i32 = 32;
    /// Default greeting.
    pub const DEFAULT_GREETING: &'static str = "hello world!";

    /// Elements the arena holds at the run's peak: three buffers plus the
    /// dynamic slot once it has become a buffer copy.
    pub fn peak_elements(&self) -> usize {
        self.buffer_len.saturating_mul(3).saturating_add(self.buffer_len.max(1))
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Arena caps must be usable at all.
        self.arena.validate()?;
        // 2. The run reads buffer[0].
        if self.buffer_len == 0 {
            return Err(ConfigError::EmptyBuffer);
        }
        // 3. Summation stays inside the buffer.
        if self.sum_len > self.buffer_len {
            return Err(ConfigError::SumLenExceedsBuffer {
                sum_len: self.sum_len,
                buffer_len: self.buffer_len,
            });
        }
        // 4. One greeting line.
        if self.greeting.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidGreeting);
        }
        // 5. The arena must hold the run's peak. During replacement the
        //    scalar is freed before the copy is counted, so the peak is
        //    four buffers.
        let needed_elements = self.peak_elements();
        if self.arena.max_allocations < PEAK_ALLOCATIONS
            || self.arena.max_elements < needed_elements
        {
            return Err(ConfigError::ArenaTooSmall {
                needed_elements,
                needed_allocations: PEAK_ALLOCATIONS,
            });
        }
        Ok(())
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            record_count: Self::DEFAULT_RECORD_COUNT,
            record_template: Record::new(2, 4, 13),
            buffer_len: Self::DEFAULT_BUFFER_LEN,
            fill_value: Self::DEFAULT_FILL_VALUE,
            scalar_init: 0,
            sum_len: Self::DEFAULT_BUFFER_LEN,
            seed: smallvec![6, 2, 3, 7, 5, 4, 1],
            append_count: Self::DEFAULT_APPEND_COUNT,
            factorial_input: 6,
            fib_input: 8,
            greeting: Self::DEFAULT_GREETING.to_string(),
            checked_arithmetic: false,
            arena: ArenaConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DriverConfig::default().validate().is_ok());
    }

    #[test]
    fn default_matches_reference_constants() {
        let cfg = DriverConfig::default();
        assert_eq!(cfg.record_count, 12);
        assert_eq!(cfg.buffer_len, 20);
        assert_eq!(cfg.fill_value, 14);
        assert_eq!(&cfg.seed[..], &[6, 2, 3, 7, 5, 4, 1]);
        assert!(!cfg.seed.spilled());
        assert_eq!(cfg.greeting, "hello world!");
        assert_eq!(cfg.record_template, primer_test_utils::RECORD_TEMPLATE);
    }

    #[test]
    fn zero_buffer_len_fails() {
        let cfg = DriverConfig {
            buffer_len: 0,
            sum_len: 0,
            ..DriverConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyBuffer));
    }

    #[test]
    fn sum_len_past_buffer_fails() {
        let cfg = DriverConfig {
            sum_len: 21,
            ..DriverConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::SumLenExceedsBuffer {
                sum_len: 21,
                buffer_len: 20,
            })
        );
    }

    #[test]
    fn negative_append_count_is_valid() {
        let cfg = DriverConfig {
            append_count: -1,
            ..DriverConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn multiline_greeting_fails() {
        let cfg = DriverConfig {
            greeting: "hello\nworld".into(),
            ..DriverConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidGreeting));
    }

    #[test]
    fn invalid_arena_config_is_wrapped() {
        let cfg = DriverConfig {
            arena: ArenaConfig::new(0, 100),
            ..DriverConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Arena(ArenaError::InvalidConfig { .. })) => {}
            other => panic!("expected Arena(InvalidConfig), got {other:?}"),
        }
    }

    #[test]
    fn arena_too_small_for_run_fails() {
        let cfg = DriverConfig {
            arena: ArenaConfig::new(4, 79),
            ..DriverConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ArenaTooSmall {
                needed_elements: 80,
                needed_allocations: 4,
            })
        );
        let cfg = DriverConfig {
            arena: ArenaConfig::new(4, 80),
            ..DriverConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_error_source_chains_arena() {
        let err = ConfigError::from(ArenaError::IdsExhausted);
        assert!(err.source().is_some());
        assert!(ConfigError::EmptyBuffer.source().is_none());
    }
}
