//! Array-Backed Binary Min-Heap with a Pluggable Ordering Key
//!
//! This crate provides a generic binary min-heap whose ordering comes from a
//! key-projection function rather than from the element type itself, so any
//! element can be prioritized by any totally-ordered key it carries.
//!
//! # Features
//!
//! - **Keyed ordering**: elements of type `T` are compared by `key(&T) -> K`,
//!   fixed at construction; `T` itself needs no `Ord` impl
//! - **O(n) bulk construction**: `build` adopts an existing `Vec<T>` and
//!   heapifies it bottom-up in a single pass
//! - **O(log n) insert and extract-min**: iterative sift-up and sift-down
//!   over the owned backing storage
//! - **`BinaryHeap`-shaped convenience**: [`OrdMinHeap`] covers the common
//!   case where the element is its own key
//!
//! # Example
//!
//! ```rust
//! use keyed_binary_heap::MinHeap;
//!
//! struct Task {
//!     name: &'static str,
//!     deadline: u32,
//! }
//!
//! let mut heap = MinHeap::with_key(|t: &Task| t.deadline);
//! heap.build(vec![
//!     Task { name: "ship", deadline: 30 },
//!     Task { name: "review", deadline: 10 },
//!     Task { name: "plan", deadline: 20 },
//! ]);
//!
//! let next = heap.pop().unwrap();
//! assert_eq!(next.name, "review");
//! heap.add(Task { name: "triage", deadline: 5 });
//! assert_eq!(heap.peek().map(|t| t.name), Some("triage"));
//! ```

pub mod error;
pub mod heap;
pub mod stdlib_compat;

// Re-export the main types for convenience
pub use error::EmptyHeapError;
pub use heap::MinHeap;
pub use stdlib_compat::OrdMinHeap;
