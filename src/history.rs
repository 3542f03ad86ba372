//! Bounded history buffers — the shared pattern behind every scrolling feed.
//!
//! The monitor keeps three rolling windows: the time-series chart, the
//! thought stream, and the terminal log. All three have the same shape: a
//! fixed-capacity sequence that appends at the back and evicts from the
//! front, so the view always shows the most recent N entries in arrival
//! order.

use std::collections::VecDeque;

use serde::Serialize;

/// A fixed-capacity FIFO sequence retaining only the most recent items.
///
/// `push` appends at the back; once the buffer is full, each push evicts the
/// oldest entry from the front. Retained elements keep their relative order,
/// and the length never exceeds the configured capacity.
#[derive(Debug, Clone)]
pub struct BoundedHistory<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    /// Create an empty buffer with the given capacity.
    ///
    /// A zero capacity is bumped to 1 — an unappendable buffer is never
    /// useful and would turn every push into a silent no-op.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Append an item, evicting the oldest entry if the buffer is full.
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Number of items currently held. Always `<= capacity()`.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The configured maximum length.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// The most recently pushed item, if any.
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }
}

impl<T: Clone> BoundedHistory<T> {
    /// Copy the retained items into a `Vec`, oldest-first. Used by snapshots.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Serialize> Serialize for BoundedHistory<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}
