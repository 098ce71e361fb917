//! Primer: owned buffers, arena-scoped allocation and recursive
//! arithmetic, end to end.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Primer sub-crates, plus the [`logging`] setup used by the `primer`
//! binary.
//!
//! # Quick start
//!
//! ```rust
//! use primer::prelude::*;
//!
//! let driver = Driver::new(DriverConfig::default()).unwrap();
//! let mut out = Vec::new();
//! let report = driver.run(&mut out).unwrap();
//!
//! assert_eq!(report.total, 280);
//! assert_eq!(report.factorial, 720);
//! assert_eq!(report.fibonacci, 13);
//! assert!(String::from_utf8(out).unwrap().ends_with("hello world!\n"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `primer-core` | IDs, `Record`, `RecordArray`, `OpsError` |
//! | [`ops`] | `primer-ops` | Buffer arithmetic, factorial, Fibonacci variant |
//! | [`arena`] | `primer-arena` | `HeapArena`, handles, `ArenaError` |
//! | [`engine`] | `primer-engine` | `DriverConfig`, `Driver`, `RunReport` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod logging;

/// Core types and IDs (`primer-core`).
pub use primer_core as types;

/// Arithmetic helpers (`primer-ops`).
///
/// Reference helpers wrap on overflow and panic on bad lengths; the
/// `checked_*` and `try_*` helpers report [`types::OpsError`] instead.
pub use primer_ops as ops;

/// Run-scoped heap arena (`primer-arena`).
pub use primer_arena as arena;

/// Driver configuration and sequencing (`primer-engine`).
pub use primer_engine as engine;

/// Common imports for typical Primer usage.
///
/// ```rust
/// use primer::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use primer_core::{AllocId, OpsError, Record, RecordArray, RunId};

    // Arithmetic
    pub use primer_ops::{add_constant, copy_buffer, factorial, fib_variant, sum_buffer};

    // Arena
    pub use primer_arena::{AllocHandle, Allocation, ArenaConfig, ArenaError, HeapArena};

    // Engine
    pub use primer_engine::{ConfigError, Driver, DriverConfig, DriverError, RunReport};
}
