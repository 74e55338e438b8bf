//! Error types for heap operations

use std::fmt;

/// Error returned by [`MinHeap::pop`](crate::MinHeap::pop) when called on a
/// heap with zero elements.
///
/// This is the only failure mode in the crate: every other operation is total
/// over any heap state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot pop from an empty heap")
    }
}

impl std::error::Error for EmptyHeapError {}
