//! Binary Min-Heap Priority Queue
//!
//! This crate provides a classic array-backed binary min-heap: the minimum is
//! available in O(1), and `insert` / `extract_min` restore the heap property in
//! O(log n) by sifting up or down along a single root-to-leaf path.
//!
//! # Features
//!
//! - **[`MinHeap`]**: 1-based index arithmetic over a dense `Vec`, ordering supplied
//!   by a [`Compare`] strategy (natural order by default)
//! - **[`MaxHeap`]**: the same heap with a reversed comparator
//! - **[`PriorityQueue`]**: (priority, item) pairs where only the priority is ordered
//! - **[`HeapError::Empty`]**: returned, never panicked, when an empty heap is queried
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::{HeapError, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//!
//! assert_eq!(heap.peek_min(), Ok(&3));
//! assert_eq!(heap.extract_min(), Ok(3));
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.extract_min(), Ok(8));
//! assert_eq!(heap.extract_min(), Err(HeapError::Empty));
//! ```

pub mod compare;
pub mod min_heap;
pub mod priority_queue;
pub mod traits;

pub use compare::Compare;
pub use min_heap::{MaxHeap, MinHeap};
pub use priority_queue::PriorityQueue;
pub use traits::{Heap, HeapError};
