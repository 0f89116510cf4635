//! Pluggable orderings for heaps
//!
//! A heap never calls `Ord::cmp` directly. It asks its comparator, so the same
//! sift-up/sift-down code serves a min-heap ([`Natural`]), a max-heap
//! ([`Reversed`]), or any ordering expressed as a closure.
//!
//! ```rust
//! use binary_min_heap::compare::{Compare, Natural, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
//!
//! let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
//! assert!(by_abs.compares_lt(&-2, &3));
//! ```

use std::cmp::Ordering;

/// A comparison capability over `T`
///
/// Implementations must describe a consistent total order over the values that
/// are actually stored in the heap. Inconsistent comparators do not cause memory
/// unsafety, but the heap's ordering guarantees no longer hold.
pub trait Compare<T: ?Sized> {
    /// Compares two values
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` orders strictly before `b`
    fn compares_lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if `a` orders before or equal to `b`
    fn compares_le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

/// Natural ascending order via `Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
