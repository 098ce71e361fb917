//! The run-scoped heap arena.
//!
//! [`HeapArena`] owns every scalar and buffer a driver run allocates.
//! Callers hold [`AllocHandle`]s, never the memory itself, so release is
//! tracked in one place:
//!
//! - [`release`](HeapArena::release) succeeds exactly once per handle;
//!   the second call reports [`ArenaError::AlreadyReleased`].
//! - [`replace`](HeapArena::replace) releases the old allocation before
//!   the replacement is issued under a new handle. The old handle is
//!   stale afterwards, and the replacement keeps its own kind: a scalar
//!   replaced by a buffer is a buffer.
//! - Dropping the arena releases whatever is still live, newest first.
//!
//! Live allocations are kept in an `IndexMap` in allocation order, which
//! gives O(1) lookup by [`AllocId`] and a cheap newest-first pop for
//! [`release_all`](HeapArena::release_all).

use indexmap::IndexMap;
use primer_core::AllocId;
use tracing::{debug, trace};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::{AllocHandle, AllocKind};

/// The contents of one allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Allocation {
    /// A single `i32`.
    Scalar(i32),
    /// A fixed-length run of `i32`.
    Buffer(Box<[i32]>),
}

impl Allocation {
    /// Scalar or buffer.
    pub fn kind(&self) -> AllocKind {
        match self {
            Self::Scalar(_) => AllocKind::Scalar,
            Self::Buffer(_) => AllocKind::Buffer,
        }
    }

    /// Length in `i32` elements. Scalars have length 1.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Buffer(b) => b.len(),
        }
    }

    /// Whether this is a zero-length buffer.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The contents as a slice. A scalar is a one-element slice.
    pub fn as_slice(&self) -> &[i32] {
        match self {
            Self::Scalar(v) => std::slice::from_ref(v),
            Self::Buffer(b) => b,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [i32] {
        match self {
            Self::Scalar(v) => std::slice::from_mut(v),
            Self::Buffer(b) => b,
        }
    }
}

impl From<Box<[i32]>> for Allocation {
    fn from(buffer: Box<[i32]>) -> Self {
        Self::Buffer(buffer)
    }
}

/// Owner of every heap allocation made during one run.
pub struct HeapArena {
    config: ArenaConfig,
    /// Live allocations in allocation order.
    live: IndexMap<AllocId, Allocation>,
    /// Next ID to issue. IDs below this were issued at some point.
    next_id: u32,
    /// Sum of `len()` over `live`.
    live_elements: usize,
    /// Number of releases performed, including replacements and drop.
    released: usize,
}

impl HeapArena {
    /// Create an empty arena.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            config,
            live: IndexMap::new(),
            next_id: 0,
            live_elements: 0,
            released: 0,
        })
    }

    /// The arena's configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Allocate a single scalar holding `value`.
    pub fn alloc_scalar(&mut self, value: i32) -> Result<AllocHandle, ArenaError> {
        self.check_capacity(1, 0, 0)?;
        Ok(self.insert(Allocation::Scalar(value)))
    }

    /// Allocate a buffer of `len` elements, each set to `fill`.
    pub fn alloc_buffer(&mut self, len: usize, fill: i32) -> Result<AllocHandle, ArenaError> {
        self.check_capacity(len, 0, 0)?;
        Ok(self.insert(Allocation::Buffer(vec![fill; len].into_boxed_slice())))
    }

    /// Take ownership of an existing buffer.
    pub fn adopt_buffer(&mut self, buffer: Box<[i32]>) -> Result<AllocHandle, ArenaError> {
        self.check_capacity(buffer.len(), 0, 0)?;
        Ok(self.insert(Allocation::Buffer(buffer)))
    }

    /// Read an allocation's contents. A scalar reads as one element.
    pub fn read(&self, handle: AllocHandle) -> Result<&[i32], ArenaError> {
        self.lookup(handle.id).map(Allocation::as_slice)
    }

    /// Mutable access to an allocation's contents.
    pub fn write(&mut self, handle: AllocHandle) -> Result<&mut [i32], ArenaError> {
        let missing = self.missing(handle.id);
        self.live
            .get_mut(&handle.id)
            .map(Allocation::as_mut_slice)
            .ok_or(missing)
    }

    /// Read a scalar allocation.
    ///
    /// Fails with [`ArenaError::KindMismatch`] if the allocation is a
    /// buffer, even a one-element buffer.
    pub fn scalar(&self, handle: AllocHandle) -> Result<i32, ArenaError> {
        match self.lookup(handle.id)? {
            Allocation::Scalar(v) => Ok(*v),
            other => Err(ArenaError::KindMismatch {
                id: handle.id,
                expected: AllocKind::Scalar,
                actual: other.kind(),
            }),
        }
    }

    /// Release an allocation.
    pub fn release(&mut self, handle: AllocHandle) -> Result<(), ArenaError> {
        self.remove(handle.id).map(|_| ())
    }

    /// Release `handle` and store `replacement` under a new handle.
    ///
    /// Capacity is checked with the old allocation already counted as
    /// freed. On error nothing changes and `handle` stays live.
    pub fn replace(
        &mut self,
        handle: AllocHandle,
        replacement: Allocation,
    ) -> Result<AllocHandle, ArenaError> {
        let old_len = self.lookup(handle.id)?.len();
        self.check_capacity(replacement.len(), old_len, 1)?;
        self.remove(handle.id)?;
        let new = self.insert(replacement);
        debug!(old = %handle.id, new = %new.id, kind = %new.kind, "allocation replaced");
        Ok(new)
    }

    /// Release every live allocation, newest first. Returns the released
    /// IDs in the order they were released.
    pub fn release_all(&mut self) -> Vec<AllocId> {
        let mut released = Vec::with_capacity(self.live.len());
        while let Some((id, allocation)) = self.live.pop() {
            trace!(%id, kind = %allocation.kind(), "released");
            released.push(id);
        }
        self.live_elements = 0;
        self.released += released.len();
        released
    }

    /// Whether `handle` still names a live allocation.
    pub fn is_live(&self, handle: AllocHandle) -> bool {
        self.live.contains_key(&handle.id)
    }

    /// Number of live allocations.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total elements across live allocations.
    pub fn live_elements(&self) -> usize {
        self.live_elements
    }

    /// Number of releases performed so far.
    pub fn released_count(&self) -> usize {
        self.released
    }

    /// Live allocation IDs in allocation order.
    pub fn live_ids(&self) -> impl Iterator<Item = AllocId> + '_ {
        self.live.keys().copied()
    }

    /// Memory held by live allocations in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.live_elements * std::mem::size_of::<i32>()
    }

    fn lookup(&self, id: AllocId) -> Result<&Allocation, ArenaError> {
        self.live.get(&id).ok_or_else(|| self.missing(id))
    }

    fn missing(&self, id: AllocId) -> ArenaError {
        if id.0 < self.next_id {
            ArenaError::AlreadyReleased { id }
        } else {
            ArenaError::UnknownHandle { id }
        }
    }

    /// An empty arena whose next issued ID is `next_id`.
    #[cfg(test)]
    fn starting_at(config: ArenaConfig, next_id: u32) -> Self {
        let mut arena = Self::new(config).unwrap();
        arena.next_id = next_id;
        arena
    }

    fn check_capacity(
        &self,
        requested: usize,
        freed_elements: usize,
        freed_allocations: usize,
    ) -> Result<(), ArenaError> {
        if self.next_id == u32::MAX {
            return Err(ArenaError::IdsExhausted);
        }
        if self.live.len() - freed_allocations >= self.config.max_allocations {
            return Err(ArenaError::TooManyAllocations {
                max: self.config.max_allocations,
            });
        }
        let live = self.live_elements - freed_elements;
        let fits = live
            .checked_add(requested)
            .is_some_and(|total| total <= self.config.max_elements);
        if !fits || u32::try_from(requested).is_err() {
            return Err(ArenaError::CapacityExceeded {
                requested,
                live,
                max: self.config.max_elements,
            });
        }
        Ok(())
    }

    /// Store `allocation`. Callers run `check_capacity` first, which
    /// guarantees the length fits in `u32` and an ID is available.
    fn insert(&mut self, allocation: Allocation) -> AllocHandle {
        let id = AllocId(self.next_id);
        self.next_id += 1;
        let len = allocation.len();
        let handle = AllocHandle::new(id, allocation.kind(), len as u32);
        self.live_elements += len;
        self.live.insert(id, allocation);
        debug!(%id, kind = %handle.kind, len, "allocated");
        handle
    }

    fn remove(&mut self, id: AllocId) -> Result<Allocation, ArenaError> {
        let allocation = self
            .live
            .shift_remove(&id)
            .ok_or_else(|| self.missing(id))?;
        self.live_elements -= allocation.len();
        self.released += 1;
        debug!(%id, kind = %allocation.kind(), "released");
        Ok(allocation)
    }
}

impl Drop for HeapArena {
    fn drop(&mut self) {
        let count = self.release_all().len();
        if count > 0 {
            debug!(count, "arena dropped with live allocations");
        }
    }
}
