//! Frontier containers: the plain shell list used by uniform-cost growth
//! and the min-priority open list used by best-first growth.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use meetpath_core::Point;

use crate::error::{PathError, try_push};

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

/// Cells added to a frontier during one uniform-cost pass. All of them lie
/// at the same step distance from the root.
#[derive(Debug, Clone, Default)]
pub(crate) struct Shell {
    cells: Vec<Point>,
}

impl Shell {
    /// A shell holding only the root.
    pub(crate) fn root(p: Point) -> Result<Self, PathError> {
        let mut shell = Self::default();
        shell.push(p)?;
        Ok(shell)
    }

    #[inline]
    pub(crate) fn push(&mut self, p: Point) -> Result<(), PathError> {
        try_push(&mut self.cells, p)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[Point] {
        &self.cells
    }
}

// ---------------------------------------------------------------------------
// OpenList
// ---------------------------------------------------------------------------

/// Heap entry ordered by `key`, then by insertion sequence.
struct Entry<T> {
    key: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first, and
        // among equal keys the earliest insertion.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue keyed by `f64`.
///
/// Duplicate items are allowed. Ties pop in insertion order, which makes
/// every search over the same input deterministic.
pub(crate) struct OpenList<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Default for OpenList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OpenList<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Add `item` with priority `key` (smaller pops first).
    pub(crate) fn insert(&mut self, item: T, key: f64) -> Result<(), PathError> {
        self.heap.try_reserve(1)?;
        self.heap.push(Entry {
            key,
            seq: self.seq,
            item,
        });
        self.seq += 1;
        Ok(())
    }

    /// Remove and return the item with the smallest key.
    pub(crate) fn pop_min(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
