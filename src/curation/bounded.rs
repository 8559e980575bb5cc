//! Capacity-limited, de-duplicating accumulator

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Insertion-ordered list that ignores duplicates and stops at `capacity`
///
/// Once full, every further push is rejected; entries already accepted keep
/// their first-seen order.
#[derive(Debug, Clone)]
pub struct BoundedList<T> {
    items: Vec<T>,
    seen: FxHashSet<T>,
    capacity: usize,
}

impl<T: Clone + Eq + Hash> BoundedList<T> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            seen: FxHashSet::default(),
            capacity,
        }
    }

    /// Append an item unless it is a duplicate or the list is full
    ///
    /// Returns whether the item was accepted.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() || self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
        true
    }

    /// Push items in order until the list fills up
    ///
    /// Returns how many were accepted.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        let mut accepted = 0;
        for item in items {
            if self.is_full() {
                break;
            }
            if self.push(item) {
                accepted += 1;
            }
        }
        accepted
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.seen.contains(item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
