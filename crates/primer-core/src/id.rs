//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one heap allocation owned by an arena.
///
/// Allocation IDs are issued sequentially by the owning arena and are
/// never reused within that arena, so an ID below the arena's next ID
/// that is no longer live was released earlier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AllocId(pub u32);

impl fmt::Display for AllocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AllocId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`RunId`] allocation.
static RUN_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-process identifier for one driver run.
///
/// Allocated from a monotonic atomic counter via [`RunId::next`] and
/// attached to the run's tracing span so interleaved diagnostics from
/// several runs in one process stay distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(u64);

impl RunId {
    /// Allocate a fresh, unique run ID. Thread-safe.
    pub fn next() -> Self {
        Self(RUN_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_id_display_is_raw_value() {
        assert_eq!(AllocId(7).to_string(), "7");
        assert_eq!(AllocId::from(3), AllocId(3));
    }

    #[test]
    fn run_ids_are_unique_and_increasing() {
        let a = RunId::next();
        let b = RunId::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }
}
