//! Priority queue of (priority, item) pairs
//!
//! Wraps a [`MinHeap`] so that only the priority takes part in ordering and
//! the item can be any type. An empty queue answers `None` instead of an
//! error, which reads naturally in a work loop:
//!
//! ```rust
//! use binary_min_heap::PriorityQueue;
//!
//! let mut jobs = PriorityQueue::new();
//! jobs.push(2, "compile");
//! jobs.push(1, "fetch");
//! jobs.push(3, "link");
//!
//! let mut order = Vec::new();
//! while let Some((_, job)) = jobs.pop() {
//!     order.push(job);
//! }
//! assert_eq!(order, ["fetch", "compile", "link"]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::Compare;
use crate::min_heap::MinHeap;

/// A heap slot: the priority and the item it carries
#[derive(Debug, Clone)]
struct Entry<P, T> {
    priority: P,
    item: T,
}

/// Orders entries by priority alone
#[derive(Debug, Clone, Copy, Default)]
struct ByPriority;

impl<P: Ord, T> Compare<Entry<P, T>> for ByPriority {
    fn compare(&self, a: &Entry<P, T>, b: &Entry<P, T>) -> Ordering {
        a.priority.cmp(&b.priority)
    }
}

/// A min-priority queue of (priority, item) pairs
///
/// Entries with equal priorities come out in an unspecified order.
pub struct PriorityQueue<P: Ord, T> {
    heap: MinHeap<Entry<P, T>, ByPriority>,
}

impl<P: Ord, T> PriorityQueue<P, T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            heap: MinHeap::with_comparator(ByPriority),
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: MinHeap::with_capacity_and_comparator(capacity, ByPriority),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds an item with the given priority
    pub fn push(&mut self, priority: P, item: T) {
        self.heap.insert(Entry { priority, item });
    }

    /// Returns the lowest priority and its item without removing them
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.heap
            .peek_min()
            .ok()
            .map(|entry| (&entry.priority, &entry.item))
    }

    /// Removes and returns the lowest priority and its item
    pub fn pop(&mut self) -> Option<(P, T)> {
        self.heap
            .extract_min()
            .ok()
            .map(|entry| (entry.priority, entry.item))
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<P: Ord, T> Default for PriorityQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord + Clone, T: Clone> Clone for PriorityQueue<P, T> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
        }
    }
}

impl<P: Ord + fmt::Debug, T: fmt::Debug> fmt::Debug for PriorityQueue<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.heap
                    .as_slice()
                    .iter()
                    .map(|entry| (&entry.priority, &entry.item)),
            )
            .finish()
    }
}

impl<P: Ord, T> Extend<(P, T)> for PriorityQueue<P, T> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            self.push(priority, item);
        }
    }
}

impl<P: Ord, T> FromIterator<(P, T)> for PriorityQueue<P, T> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut queue = PriorityQueue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.peek(), None);

        queue.push(3, "three");
        queue.push(1, "one");
        queue.push(2, "two");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some((&1, &"one")));

        assert_eq!(queue.pop(), Some((1, "one")));
        assert_eq!(queue.pop(), Some((2, "two")));
        assert_eq!(queue.pop(), Some((3, "three")));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_items_need_no_ordering() {
        struct Job(u32);

        let mut queue = PriorityQueue::new();
        queue.push(5, Job(50));
        queue.push(2, Job(20));

        let (priority, job) = queue.pop().unwrap();
        assert_eq!(priority, 2);
        assert_eq!(job.0, 20);
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut queue: PriorityQueue<i32, char> =
            [(1, 'a'), (1, 'b'), (1, 'c'), (0, 'z')].into_iter().collect();

        assert_eq!(queue.pop(), Some((0, 'z')));

        let mut rest: Vec<char> = std::iter::from_fn(|| queue.pop().map(|(_, c)| c)).collect();
        rest.sort_unstable();
        assert_eq!(rest, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_clear_and_debug() {
        let mut queue = PriorityQueue::with_capacity(4);
        queue.push(1, "x");
        assert_eq!(format!("{:?}", queue), r#"[(1, "x")]"#);
        queue.clear();
        assert!(queue.is_empty());
    }
}
