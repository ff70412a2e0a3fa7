use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over dense 0-based indices
///
/// Tracks which rows and columns of an exact-cover search are still live.
/// Indices at or beyond the capacity are ignored by `insert`/`remove` and
/// never reported as members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexBitset {
    bits: BitVec,
}

impl IndexBitset {
    /// Create a bitset with no members
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Create a bitset containing every index below `capacity`
    pub fn full(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
        }
    }

    /// Number of addressable indices
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Add an index
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Remove an index, returning whether it was present
    pub fn remove(&mut self, index: usize) -> bool {
        let present = self.contains(index);
        if present {
            self.bits.set(index, false);
        }
        present
    }

    /// Test membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no indices are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count members
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all members as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for IndexBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexBitset({} of {}: {:?})", self.count(), self.capacity(), self.to_vec())
    }
}
