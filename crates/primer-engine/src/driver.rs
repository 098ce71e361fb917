//! Run sequencing.
//!
//! [`Driver::run`] performs the full scenario in a fixed order:
//!
//! 1. allocate the record array, two filled buffers, the dynamic scalar
//!    and a spare buffer;
//! 2. build and grow the sequence, populate records and buffers;
//! 3. `add_constant` on the first buffer element, `sum_buffer` over the
//!    first buffer;
//! 4. release the scalar and replace it with a copy of the first buffer;
//! 5. `factorial` and `fib_variant`;
//! 6. print the sequence one value per line, drain it, print the greeting;
//! 7. release every allocation.
//!
//! All heap memory lives in one [`HeapArena`] owned by the run. If any
//! step fails, dropping the arena releases what is still live.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};

use primer_arena::{AllocHandle, Allocation, ArenaError, HeapArena};
use primer_core::{OpsError, RecordArray, RunId};
use tracing::{debug, info_span};

use crate::config::{ConfigError, DriverConfig};
use crate::sequence::GrowableSequence;

// ── DriverError ────────────────────────────────────────────────────

/// Errors from [`Driver::new`] and [`Driver::run`].
#[derive(Debug)]
pub enum DriverError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// An arena operation failed.
    Arena(ArenaError),
    /// Checked arithmetic overflowed (only with `checked_arithmetic`).
    Ops(OpsError),
    /// Writing output failed.
    Output(io::Error),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::Ops(e) => write!(f, "arithmetic: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::Ops(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

impl From<ConfigError> for DriverError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArenaError> for DriverError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<OpsError> for DriverError {
    fn from(e: OpsError) -> Self {
        Self::Ops(e)
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}

// ── RunReport ──────────────────────────────────────────────────────

/// Every intermediate value a run computes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Identifier of this run.
    pub run_id: RunId,
    /// Number of records allocated and filled.
    pub records: usize,
    /// `add_constant(buffer[0])`.
    pub plus_four: i32,
    /// `sum_buffer(buffer, sum_len)`.
    pub total: i32,
    /// Length of the buffer copy that replaced the dynamic scalar.
    pub copied: usize,
    /// Whether the copy matched the source buffer element for element.
    pub copy_matches: bool,
    /// `factorial(factorial_input)`.
    pub factorial: u64,
    /// `fib_variant(fib_input)`.
    pub fibonacci: u64,
    /// Number of sequence lines printed.
    pub printed: usize,
    /// Sequence values in the order they were drained.
    pub drained: Vec<i32>,
    /// Releases the arena performed over the run.
    pub releases: usize,
    /// Allocations still live after the final release. Always 0.
    pub live_after_release: usize,
}

// ── Driver ─────────────────────────────────────────────────────────

/// Sequences one run from a validated [`DriverConfig`].
#[derive(Clone, Debug)]
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    /// Validate `config` and build a driver.
    pub fn new(config: DriverConfig) -> Result<Self, DriverError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The driver's configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Execute the scenario, writing output to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunReport, DriverError> {
        let cfg = &self.config;
        let run_id = RunId::next();
        let span = info_span!("run", id = %run_id);
        let _enter = span.enter();

        let mut arena = HeapArena::new(cfg.arena.clone())?;
        let mut records = RecordArray::new(cfg.record_count);
        let primary = arena.alloc_buffer(cfg.buffer_len, 0)?;
        let secondary = arena.alloc_buffer(cfg.buffer_len, 0)?;
        let scalar = arena.alloc_scalar(cfg.scalar_init)?;

        let mut sequence = GrowableSequence::seeded(&cfg.seed);
        sequence.extend_counting(cfg.append_count);
        debug!(len = sequence.len(), "sequence built");

        records.fill(cfg.record_template);
        arena.write(primary)?.fill(cfg.fill_value);
        arena.write(secondary)?.fill(cfg.fill_value);
        let spare = arena.alloc_buffer(cfg.buffer_len, 0)?;

        let source = arena.read(primary)?;
        let plus_four = self.plus_four(source[0])?;
        let total = self.total(source)?;
        let copy = primer_ops::copy_buffer(source, cfg.buffer_len);
        debug!(plus_four, total, "buffer arithmetic done");

        let dynamic = arena.replace(scalar, Allocation::from(copy))?;
        let copied = arena.read(dynamic)?.len();
        let copy_matches = arena.read(dynamic)? == arena.read(primary)?;

        let factorial = self.factorial()?;
        let fibonacci = self.fibonacci()?;
        debug!(factorial, fibonacci, "recursive arithmetic done");

        let mut printed = 0;
        for value in sequence.iter() {
            writeln!(out, "{value}")?;
            printed += 1;
        }
        let drained = sequence.drain_from_end();
        writeln!(out, "{}", cfg.greeting)?;
        out.flush()?;

        release_all(&mut arena, &[primary, secondary, spare, dynamic])?;
        debug!(releases = arena.released_count(), "run complete");

        Ok(RunReport {
            run_id,
            records: records.len(),
            plus_four,
            total,
            copied,
            copy_matches,
            factorial,
            fibonacci,
            printed,
            drained,
            releases: arena.released_count(),
            live_after_release: arena.live_count(),
        })
    }

    fn plus_four(&self, first: i32) -> Result<i32, OpsError> {
        if self.config.checked_arithmetic {
            primer_ops::checked_add_constant(first)
        } else {
            Ok(primer_ops::add_constant(first))
        }
    }

    fn total(&self, buffer: &[i32]) -> Result<i32, OpsError> {
        let len = self.config.sum_len;
        if self.config.checked_arithmetic {
            primer_ops::checked_sum_buffer(buffer, len)
        } else {
            Ok(primer_ops::sum_buffer(buffer, len))
        }
    }

    fn factorial(&self) -> Result<u64, OpsError> {
        let n = self.config.factorial_input;
        if self.config.checked_arithmetic {
            primer_ops::checked_factorial(n)
        } else {
            Ok(primer_ops::factorial(n))
        }
    }

    fn fibonacci(&self) -> Result<u64, OpsError> {
        let n = self.config.fib_input;
        if self.config.checked_arithmetic {
            primer_ops::checked_fib_variant(n)
        } else {
            Ok(primer_ops::fib_variant(n))
        }
    }
}

/// Release each handle exactly once.
fn release_all(arena: &mut HeapArena, handles: &[AllocHandle]) -> Result<(), ArenaError> {
    for &handle in handles {
        arena.release(handle)?;
    }
    Ok(())
}
