//! The growable sequence scenario.
//!
//! A [`GrowableSequence`] is seeded with literal values, extended by a
//! counting run, printed, then drained from the end. Draining by repeated
//! remove-last yields the values in reverse order and leaves the sequence
//! empty.

use tracing::trace;

/// Ordered, growable run of `i32` supporting append and remove-last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowableSequence {
    values: Vec<i32>,
}

impl GrowableSequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence holding `seed` in order.
    pub fn seeded(seed: &[i32]) -> Self {
        Self {
            values: seed.to_vec(),
        }
    }

    /// Append one value at the end.
    pub fn push(&mut self, value: i32) {
        self.values.push(value);
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> Option<i32> {
        self.values.pop()
    }

    /// Append `0, 1, .., count - 1` one at a time. A count of zero or
    /// less appends nothing.
    pub fn extend_counting(&mut self, count: i32) {
        self.values.reserve(usize::try_from(count).unwrap_or(0));
        for value in 0..count {
            self.push(value);
        }
    }

    /// Remove every value by repeated remove-last, returning them in the
    /// order they were removed.
    pub fn drain_from_end(&mut self) -> Vec<i32> {
        let mut drained = Vec::with_capacity(self.values.len());
        while let Some(value) = self.pop() {
            trace!(value, "popped");
            drained.push(value);
        }
        drained
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in order.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.values.iter()
    }
}
