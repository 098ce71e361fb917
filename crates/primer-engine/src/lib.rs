//! Driver configuration and run sequencing for Primer.
//!
//! [`DriverConfig`] describes one run and validates it up front.
//! [`Driver`] executes the scenario against a run-scoped
//! [`HeapArena`](primer_arena::HeapArena) and returns a [`RunReport`]
//! holding every value it computed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod sequence;

pub use config::{ConfigError, DriverConfig, Seed};
pub use driver::{Driver, DriverError, RunReport};
pub use sequence::GrowableSequence;
