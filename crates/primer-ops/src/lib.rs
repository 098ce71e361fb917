//! Arithmetic helpers for the Primer workspace.
//!
//! Two families of functions live here:
//!
//! - **Reference** helpers ([`add_constant`], [`sum_buffer`],
//!   [`copy_buffer`], [`factorial`], [`fib_variant`]) never report
//!   errors. Integer overflow wraps silently; a length larger than the
//!   buffer panics on the slice bound.
//! - **Checked** helpers (`checked_*`, `try_*`) return
//!   [`OpsError`](primer_core::OpsError) for those same conditions.
//!
//! Callers pick the family explicitly. The driver uses the reference
//! family unless `checked_arithmetic` is set.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arith;
pub mod recursive;

pub use arith::{
    add_constant, checked_add_constant, checked_sum_buffer, copy_buffer, sum_buffer,
    try_copy_buffer, try_sum_buffer, ADDEND,
};
pub use recursive::{checked_factorial, checked_fib_variant, factorial, fib_variant};
