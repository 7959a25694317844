//! History: bounded ring buffer behind logs and charts.
//!
//! The buffer keeps the most recent items only, discarding the oldest once
//! capacity is exceeded. Widgets resize it to their last rendered extent so
//! memory never grows beyond what can be shown.

use std::collections::VecDeque;

/// A fixed-capacity, oldest-first ring buffer.
#[derive(Debug, Clone)]
pub struct History<T> {
    /// Items, oldest at the front.
    items: VecDeque<T>,
    /// Maximum number of items to retain.
    capacity: usize,
}

impl<T> History<T> {
    /// Create an empty history holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of retained items.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item, evicting the oldest ones beyond capacity.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
        self.trim();
    }

    /// Change the capacity, evicting the oldest items if it shrinks.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.trim();
    }

    /// The newest `count` items (or fewer), oldest first.
    pub fn latest(&self, count: usize) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + Clone {
        let start = self.items.len().saturating_sub(count);
        self.items.range(start..)
    }

    /// All retained items, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + Clone {
        self.items.iter()
    }

    /// The newest item.
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn trim(&mut self) {
        while self.items.len() > self.capacity {
            self.items.pop_front();
        }
    }
}
