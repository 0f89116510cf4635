//! Array-backed binary min-heap
//!
//! The tree lives in a single `Vec<T>`. Positions are 1-based, which keeps the
//! index arithmetic free of offsets:
//!
//! - root at position 1
//! - `parent(i) = i / 2`
//! - `left(i) = 2i`
//! - `right(i) = 2i + 1`
//!
//! Position `i` is stored in slot `i - 1` of the vector, so there is no sentinel
//! element and `len()` is always the vector's length.
//!
//! Heap property: for every position `1 < i <= len`, the element at `parent(i)`
//! does not compare greater than the element at `i`.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek_min`    | O(1)       |
//! | `len`         | O(1)       |
//! | `merge`       | O(m log(n + m)) |
//!
//! # Comparator panics
//!
//! Every swap is a single `Vec::swap` issued after the comparison that decided
//! it has returned, so a panicking comparator never leaves a slot half-moved.
//! If the comparator panics inside `insert`, the new value is already stored
//! and counted. If it panics inside `extract_min`, the minimum has already been
//! detached and is dropped while unwinding. In both cases every other element
//! is still present exactly once, but the ordering may be broken.
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! for value in [5, 3, 8, 1, 9, 2] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.peek_min(), Ok(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::compare::{Compare, Natural, Reversed};
use crate::traits::{Heap, HeapError};

/// Position of the parent of `pos` (1-based)
#[inline]
pub const fn parent(pos: usize) -> usize {
    pos / 2
}

/// Position of the left child of `pos` (1-based)
#[inline]
pub const fn left(pos: usize) -> usize {
    pos * 2
}

/// Position of the right child of `pos` (1-based)
#[inline]
pub const fn right(pos: usize) -> usize {
    pos * 2 + 1
}

/// A binary min-heap ordered by the comparator `C`
///
/// With the default [`Natural`] comparator the smallest value (by `Ord`) is
/// always at the root. Supplying a different comparator changes what
/// "minimum" means without changing the algorithms; see [`MaxHeap`].
#[derive(Clone)]
pub struct MinHeap<T, C = Natural> {
    /// Level-order storage; position `i` lives at index `i - 1`
    elements: Vec<T>,
    cmp: C,
}

/// A max-heap: the same structure with a reversed natural ordering
///
/// ```rust
/// use binary_min_heap::{MaxHeap, MinHeap};
///
/// let mut heap: MaxHeap<i32> = MinHeap::new_max();
/// heap.extend([3, 7, 1]);
/// assert_eq!(heap.extract_min(), Ok(7));
/// ```
pub type MaxHeap<T> = MinHeap<T, Reversed<Natural>>;

impl<T: Ord> MinHeap<T, Natural> {
    /// Creates an empty heap in natural ascending order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty heap in natural ascending order with room for
    /// `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T: Ord> MinHeap<T, Reversed<Natural>> {
    /// Creates an empty max-heap
    pub fn new_max() -> Self {
        Self::with_comparator(Reversed(Natural))
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// ```rust
    /// use binary_min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// heap.insert("three");
    /// heap.insert("a");
    /// heap.insert("of");
    /// assert_eq!(heap.extract_min(), Ok("a"));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            elements: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the comparator that orders this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Alias for [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the live elements in level order
    ///
    /// Index `i` of the slice holds heap position `i + 1`.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Inserts a value and restores the heap property
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.len());
    }

    /// Returns the minimum without removing it
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.elements.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the minimum
    ///
    /// The last element takes the root's place and sifts down.
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        let last = self.len();
        if last == 0 {
            return Err(HeapError::Empty);
        }

        self.swap(1, last);
        let min = self.elements.pop().ok_or(HeapError::Empty)?;

        if !self.is_empty() {
            self.sift_down(1);
        }

        Ok(min)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Moves every element of `other` into this heap
    ///
    /// Elements are re-inserted one at a time under this heap's comparator.
    pub fn merge(&mut self, other: Self) {
        self.elements.reserve(other.len());
        for value in other.elements {
            self.insert(value);
        }
    }

    /// Returns an iterator that extracts elements in ascending order
    ///
    /// Elements not consumed by the iterator stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap and returns its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        sorted.extend(self.drain_sorted());
        sorted
    }

    /// Checks the heap property over every parent/child pair
    pub fn is_valid_heap(&self) -> bool {
        (2..=self.len()).all(|pos| !self.less(pos, parent(pos)))
    }

    fn get(&self, pos: usize) -> &T {
        &self.elements[pos - 1]
    }

    /// True if the element at `a` orders strictly before the element at `b`
    fn less(&self, a: usize, b: usize) -> bool {
        self.cmp.compares_lt(self.get(a), self.get(b))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a - 1, b - 1);
    }

    /// Move the element at `pos` toward the root while it is smaller than its
    /// parent.
    fn sift_up(&mut self, mut pos: usize) {
        debug_assert!(pos >= 1 && pos <= self.len(), "sift_up from position {} out of range", pos);

        // Equal to parent: stay put.
        while pos > 1 && self.less(pos, parent(pos)) {
            self.swap(pos, parent(pos));
            pos = parent(pos);
        }
    }

    /// Move the element at `pos` toward the leaves, always trading places with
    /// the smaller existing child.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.len();
        debug_assert!(pos >= 1 && pos <= len, "sift_down from position {} out of range", pos);

        loop {
            let l = left(pos);
            let r = right(pos);

            if l > len {
                break;
            }

            // Left wins ties; a missing right child does not compete.
            let smaller = if r <= len && self.less(r, l) { r } else { l };

            if self.less(smaller, pos) {
                self.swap(pos, smaller);
                pos = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T>> Heap<T> for MinHeap<T, C> {
    fn is_empty(&self) -> bool {
        MinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MinHeap::len(self)
    }

    fn insert(&mut self, value: T) {
        MinHeap::insert(self, value)
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        MinHeap::peek_min(self)
    }

    fn extract_min(&mut self) -> Result<T, HeapError> {
        MinHeap::extract_min(self)
    }
}

impl<T, C: Default> Default for MinHeap<T, C> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            cmp: C::default(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("elements", &self.elements)
            .finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.elements.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for MinHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

/// Iterator returned by [`MinHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C: Compare<T>> {
    heap: &'a mut MinHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Compare<T>> FusedIterator for DrainSorted<'_, T, C> {}
