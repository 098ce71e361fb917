//! Handle-addressed heap allocations for Primer runs.
//!
//! One [`HeapArena`] owns every heap allocation a run makes: single
//! scalars and fixed-length `i32` buffers. Callers see only
//! [`AllocHandle`]s. The arena guarantees each allocation is released
//! exactly once: explicitly via [`HeapArena::release`], implicitly when
//! replaced via [`HeapArena::replace`], or at the latest when the arena
//! is dropped.
//!
//! ```text
//! HeapArena
//! ├── ArenaConfig (allocation and element caps)
//! └── IndexMap<AllocId, Allocation> (live set, allocation order)
//!     ├── Allocation::Scalar(i32)
//!     └── Allocation::Buffer(Box<[i32]>)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
pub mod heap;

pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::{AllocHandle, AllocKind};
pub use heap::{Allocation, HeapArena};
