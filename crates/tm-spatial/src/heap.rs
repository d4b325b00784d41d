//! Binary min-heap priority queue for the search algorithms.
//!
//! The heap is generic over its entry type: [`DistEntry`] orders by plain
//! distance (Dijkstra), [`AStarEntry`] orders by `f = g + h` (A*).
//!
//! # Duplicates
//!
//! The heap never deduplicates vertices.  Searches push a vertex again each
//! time they find a cheaper path to it and discard the stale copies when they
//! surface (lazy deletion).
//!
//! # Tie-breaking
//!
//! Every push is stamped with a sequence number.  Entries of equal priority
//! come out in insertion order.

use std::cmp::Ordering;

use tm_core::NodeId;

/// An item that can be stored in a [`MinHeap`].
pub trait HeapEntry {
    fn vertex(&self) -> NodeId;

    /// The ordering key.  Compared with `f64::total_cmp`.
    fn priority(&self) -> f64;

    fn set_priority(&mut self, priority: f64);
}

/// Dijkstra frontier entry: tentative distance from the start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistEntry {
    pub vertex: NodeId,
    pub dist: f64,
}

impl DistEntry {
    pub fn new(vertex: NodeId, dist: f64) -> Self {
        Self { vertex, dist }
    }
}

impl HeapEntry for DistEntry {
    #[inline]
    fn vertex(&self) -> NodeId {
        self.vertex
    }

    #[inline]
    fn priority(&self) -> f64 {
        self.dist
    }

    #[inline]
    fn set_priority(&mut self, priority: f64) {
        self.dist = priority;
    }
}

/// A* frontier entry with its cost breakdown.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AStarEntry {
    pub vertex: NodeId,
    /// Cost from the start so far.
    pub g: f64,
    /// Heuristic estimate to the goal.
    pub h: f64,
    /// `g + h`, the ordering key.
    pub f: f64,
    pub parent: Option<NodeId>,
}

impl AStarEntry {
    pub fn new(vertex: NodeId, g: f64, h: f64, parent: Option<NodeId>) -> Self {
        Self { vertex, g, h, f: g + h, parent }
    }
}

impl HeapEntry for AStarEntry {
    #[inline]
    fn vertex(&self) -> NodeId {
        self.vertex
    }

    #[inline]
    fn priority(&self) -> f64 {
        self.f
    }

    /// Moves `f` and keeps `h`, so `g` absorbs the change.
    fn set_priority(&mut self, priority: f64) {
        self.f = priority;
        self.g = priority - self.h;
    }
}

struct Slot<T> {
    entry: T,
    seq: u64,
}

impl<T: HeapEntry> Slot<T> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        match self.entry.priority().total_cmp(&other.entry.priority()) {
            Ordering::Less    => true,
            Ordering::Greater => false,
            Ordering::Equal   => self.seq < other.seq,
        }
    }
}

/// Array-backed binary min-heap.
pub struct MinHeap<T> {
    slots: Vec<Slot<T>>,
    next_seq: u64,
}

impl<T: HeapEntry> MinHeap<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new(), next_seq: 0 }
    }

    /// Pre-allocate room for `capacity` entries.  The heap still grows past
    /// it when lazy duplicates pile up.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), next_seq: 0 }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// The minimum entry without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.slots.first().map(|s| &s.entry)
    }

    /// Append `entry` and restore heap order.  O(log n).
    pub fn push(&mut self, entry: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots.push(Slot { entry, seq });
        self.sift_up(self.slots.len() - 1);
    }

    /// Remove and return the minimum entry.  O(log n).
    pub fn pop_min(&mut self) -> Option<T> {
        if self.slots.is_empty() {
            return None;
        }
        // swap_remove moves the last slot into the root.
        let min = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Some(min.entry)
    }

    /// Lower the priority of the most recently pushed entry for `vertex`.
    ///
    /// Linear scan, O(n).  Returns `false` and leaves the heap untouched if
    /// the vertex is absent or `priority` is not lower than its current one.
    pub fn decrease_key(&mut self, vertex: NodeId, priority: f64) -> bool {
        let Some(i) = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.entry.vertex() == vertex)
            .max_by_key(|(_, s)| s.seq)
            .map(|(i, _)| i)
        else {
            return false;
        };

        if priority.total_cmp(&self.slots[i].entry.priority()) != Ordering::Less {
            return false;
        }
        self.slots[i].entry.set_priority(priority);
        self.sift_up(i);
        true
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.slots[i].precedes(&self.slots[parent]) {
                break;
            }
            self.slots.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < len && self.slots[left].precedes(&self.slots[smallest]) {
                smallest = left;
            }
            if right < len && self.slots[right].precedes(&self.slots[smallest]) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.slots.swap(i, smallest);
            i = smallest;
        }
    }

    /// Every parent precedes both of its children.
    #[cfg(test)]
    pub(crate) fn is_heap_ordered(&self) -> bool {
        (1..self.slots.len()).all(|i| !self.slots[i].precedes(&self.slots[(i - 1) / 2]))
    }
}

impl<T: HeapEntry> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
