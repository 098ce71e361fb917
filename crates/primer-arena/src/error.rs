//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use primer_core::AllocId;

use crate::handle::AllocKind;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The live-allocation cap would be exceeded.
    TooManyAllocations {
        /// The configured cap.
        max: usize,
    },
    /// The live-element cap would be exceeded.
    CapacityExceeded {
        /// Number of elements requested.
        requested: usize,
        /// Number of elements currently live.
        live: usize,
        /// The configured cap.
        max: usize,
    },
    /// The allocation was already released; each allocation is released
    /// exactly once.
    AlreadyReleased {
        /// The released allocation.
        id: AllocId,
    },
    /// The handle was never issued by this arena.
    UnknownHandle {
        /// The unrecognised allocation.
        id: AllocId,
    },
    /// The allocation is a different kind than the caller asked for,
    /// e.g. reading a buffer as a single scalar.
    KindMismatch {
        /// The allocation.
        id: AllocId,
        /// The kind the caller asked for.
        expected: AllocKind,
        /// The kind the allocation actually is.
        actual: AllocKind,
    },
    /// Every allocation ID has been issued; the arena cannot name another
    /// allocation.
    IdsExhausted,
    /// An [`ArenaConfig`](crate::ArenaConfig) invariant is violated.
    InvalidConfig {
        /// Which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyAllocations { max } => {
                write!(f, "too many live allocations: cap is {max}")
            }
            Self::CapacityExceeded {
                requested,
                live,
                max,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} elements with {live} live, cap {max}"
                )
            }
            Self::AlreadyReleased { id } => {
                write!(f, "allocation {id} was already released")
            }
            Self::UnknownHandle { id } => {
                write!(f, "unknown allocation: {id}")
            }
            Self::KindMismatch {
                id,
                expected,
                actual,
            } => {
                write!(f, "allocation {id} is a {actual}, not a {expected}")
            }
            Self::IdsExhausted => write!(f, "allocation ids exhausted"),
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}
