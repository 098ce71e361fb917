//! Plain three-field records and their fixed-size array.

use std::fmt;

/// A fixed-field aggregate with no behaviour.
///
/// The three fields are independent; no invariant relates them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Record {
    /// First field.
    pub a: i32,
    /// Second field.
    pub b: i32,
    /// Third field.
    pub c: i32,
}

impl Record {
    /// Build a record from its three fields.
    pub const fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record(a={}, b={}, c={})", self.a, self.b, self.c)
    }
}

/// A heap-allocated array of records whose length is fixed at creation.
///
/// Owned exclusively by the scope that created it; dropping it releases
/// the storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordArray {
    records: Box<[Record]>,
}

impl RecordArray {
    /// Allocate `count` default (all-zero) records.
    pub fn new(count: usize) -> Self {
        Self {
            records: vec![Record::default(); count].into_boxed_slice(),
        }
    }

    /// Overwrite every record with `template`.
    pub fn fill(&mut self, template: Record) {
        self.records.fill(template);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the array holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Mutable access to the record at `index`, if in range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.records.get_mut(index)
    }

    /// All records as a slice.
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over the records in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Memory usage of the record storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.records.len() * std::mem::size_of::<Record>()
    }
}

impl<'a> IntoIterator for &'a RecordArray {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
