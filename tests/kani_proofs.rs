//! Kani verification proofs for heap operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use binary_min_heap::compare::{Natural, Reversed};
#[cfg(kani)]
use binary_min_heap::{HeapError, MinHeap};

/// Proof that insert always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_insert_increments_len() {
    let mut heap: MinHeap<u32> = MinHeap::new();
    heap.insert(kani::any());
    heap.insert(kani::any());
    let initial_len = heap.len();

    heap.insert(kani::any());

    assert!(heap.len() == initial_len + 1);
}

/// Proof that extract_min decrements the length (when not empty)
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_extract_decrements_len() {
    let mut heap: MinHeap<u32> = MinHeap::new();
    heap.insert(kani::any());
    heap.insert(kani::any());
    let initial_len = heap.len();

    assert!(heap.extract_min().is_ok());
    assert!(heap.len() == initial_len - 1);
}

/// Proof that an empty heap always reports Empty
#[cfg(kani)]
#[kani::proof]
fn verify_empty_reports_error() {
    let mut heap: MinHeap<u32> = MinHeap::new();
    assert!(heap.peek_min() == Err(HeapError::Empty));
    assert!(heap.extract_min() == Err(HeapError::Empty));
    assert!(heap.is_empty());
}

/// Proof that peek_min returns the minimum of any four inserted values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_peek_is_minimum() {
    let mut heap: MinHeap<u32> = MinHeap::new();
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    let d: u32 = kani::any();

    heap.insert(a);
    heap.insert(b);
    heap.insert(c);
    heap.insert(d);

    let min = a.min(b).min(c).min(d);
    assert!(heap.peek_min() == Ok(&min));
    assert!(heap.is_valid_heap());
}

/// Proof that extraction order is non-decreasing for any four values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_extract_order() {
    let mut heap: MinHeap<u8> = MinHeap::new();
    for _ in 0..4 {
        heap.insert(kani::any());
    }

    let mut last = 0u8;
    while let Ok(value) = heap.extract_min() {
        assert!(value >= last);
        last = value;
        assert!(heap.is_valid_heap());
    }
}

/// Proof that a reversed comparator yields the maximum
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_reversed_yields_maximum() {
    let mut heap = MinHeap::with_comparator(Reversed(Natural));
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();

    heap.insert(a);
    heap.insert(b);
    heap.insert(c);

    assert!(heap.extract_min() == Ok(a.max(b).max(c)));
}
