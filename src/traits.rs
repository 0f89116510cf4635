//! Common trait and error type for the heaps in this crate
//!
//! [`Heap`] is the minimal interface shared by every heap configuration: a value
//! goes in with `insert`, the smallest value (under the heap's ordering) comes
//! out with `extract_min`, and `peek_min` looks without removing.
//!
//! Querying an empty heap is reported through [`HeapError::Empty`] rather than a
//! panic, so callers can treat it as "no more work".

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs at least one element but the heap is empty
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-ordered heaps
///
/// "Minimum" is always relative to the heap's comparator: a heap built with a
/// reversed comparator hands out its largest value first through the same API.
///
/// # Example
///
/// ```rust
/// use binary_min_heap::{Heap, HeapError, MinHeap};
///
/// let mut heap = MinHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek_min(), Ok(&1));
/// assert_eq!(heap.extract_min(), Ok(1));
/// assert_eq!(heap.len(), 2);
///
/// let mut empty: MinHeap<i32> = MinHeap::new();
/// assert_eq!(empty.extract_min(), Err(HeapError::Empty));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T);

    /// Returns the minimum value without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum value
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Result<T, HeapError>;
}
