//! Error types shared across the library.

use thiserror::Error;

/// Errors surfaced by [`BoundedQueue`](crate::queue::BoundedQueue).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `take()`/`dequeue()` was called on a queue with no elements.
    ///
    /// This is the one fail-fast condition in the library: returning a
    /// sentinel would be ambiguous with legitimately queued values.
    #[error("queue is empty")]
    Empty,
}

/// A failed predicate or mapper invocation.
///
/// Steps report failure as a value instead of panicking, so combinators
/// and chains can apply their documented fallbacks: a failing predicate
/// counts as false, a failing transform step keeps the intermediate
/// result unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step failed: {reason}")]
pub struct StepError {
    pub reason: String,
}

impl StepError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
