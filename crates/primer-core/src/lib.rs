//! Core types for the Primer workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the plain-data types shared by every other crate: identifiers, the
//! [`Record`] aggregate and its fixed-size [`RecordArray`], and the
//! [`OpsError`] type reported by the checked arithmetic helpers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod record;

pub use error::{OpsError, Operation};
pub use id::{AllocId, RunId};
pub use record::{Record, RecordArray};
