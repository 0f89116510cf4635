//! Deadline scheduler built on the heap
//!
//! Jobs are ordered by deadline; an empty heap means there is no more work.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example scheduler
//! ```

use binary_min_heap::{HeapError, MaxHeap, MinHeap, PriorityQueue};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Job {
    deadline: u32,
    name: &'static str,
}

fn run_until_idle(queue: &mut MinHeap<Job>) {
    loop {
        match queue.extract_min() {
            Ok(job) => println!("  t={:>3}  {}", job.deadline, job.name),
            Err(HeapError::Empty) => break,
        }
    }
}

fn main() -> Result<(), HeapError> {
    let mut queue = MinHeap::new();
    for (deadline, name) in [(30, "compact"), (5, "flush"), (12, "rotate"), (5, "sync")] {
        queue.insert(Job { deadline, name });
    }

    println!("next deadline: {}", queue.peek_min()?.deadline);
    println!("running {} jobs by deadline:", queue.len());
    run_until_idle(&mut queue);

    let mut largest: MaxHeap<u64> = MinHeap::new_max();
    largest.extend([512, 4096, 64, 2048]);
    println!("largest allocation first: {}", largest.extract_min()?);

    let mut retries = PriorityQueue::new();
    retries.push(3, "upload");
    retries.push(1, "ping");
    while let Some((attempt, task)) = retries.pop() {
        println!("retry #{attempt}: {task}");
    }

    Ok(())
}
