//! FIFO frontier that drives breadth-first order.

use std::collections::VecDeque;

/// First-in first-out queue: push at the tail, take from the head.
///
/// Backed by a ring buffer, so both ends are O(1) amortized. Taking items
/// goes through [`Iterator::next`], which drains in FIFO order; pushing while
/// draining is fine.
#[derive(Debug, Clone)]
pub struct FrontierQueue<T> {
    items: VecDeque<T>,
}

impl<T> FrontierQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the tail.
    pub fn push(&mut self, item: T) -> &mut Self {
        self.items.push_back(item);
        self
    }

    /// Number of queued items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for FrontierQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Iterator for FrontierQueue<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> Extend<T> for FrontierQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
