//! Allocation handles.
//!
//! An [`AllocHandle`] names one live allocation in a
//! [`HeapArena`](crate::HeapArena). Handles are `Copy`; the arena, not
//! the handle, owns the memory. A handle whose allocation was released
//! is stale and every arena operation on it fails with
//! [`ArenaError::AlreadyReleased`](crate::ArenaError::AlreadyReleased).

use std::fmt;

use primer_core::AllocId;

/// What an allocation holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllocKind {
    /// A single `i32`.
    Scalar,
    /// A fixed-length run of `i32`.
    Buffer,
}

impl fmt::Display for AllocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Buffer => f.write_str("buffer"),
        }
    }
}

/// Token naming one arena allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct AllocHandle {
    pub(crate) id: AllocId,
    pub(crate) kind: AllocKind,
    pub(crate) len: u32,
}

impl AllocHandle {
    pub(crate) fn new(id: AllocId, kind: AllocKind, len: u32) -> Self {
        Self { id, kind, len }
    }

    /// The allocation's identifier.
    pub fn id(&self) -> AllocId {
        self.id
    }

    /// Scalar or buffer.
    pub fn kind(&self) -> AllocKind {
        self.kind
    }

    /// Length in `i32` elements. Scalars have length 1.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether this is a zero-length buffer.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for AllocHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AllocHandle(id={}, {}, len={})",
            self.id, self.kind, self.len
        )
    }
}
