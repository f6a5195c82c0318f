//! Asynchronous completion wrapper over [`seqchain_rs::BoundedQueue`].
//!
//! Every operation delegates to the synchronous queue and resolves in a
//! single suspension point; nothing here blocks or waits. The wrapper
//! adds no locking: callers needing an atomic sequence of operations
//! (such as check-size-then-enqueue) serialize those calls themselves,
//! which exclusive access through `&mut self` already enforces per
//! binding.

use seqchain_rs::{BoundedQueue, QueueError, QueueState, Value};

/// A [`BoundedQueue`] with an asynchronous operation surface.
///
/// Invariants and eviction semantics are identical to the synchronous
/// queue; see its documentation for the details.
#[derive(Debug, Clone)]
pub struct AsyncBoundedQueue {
    inner: BoundedQueue,
}

impl AsyncBoundedQueue {
    /// Create an empty queue with a clamped capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: BoundedQueue::new(capacity),
        }
    }

    /// Create a queue and enqueue each initial item in order.
    pub fn with_items(capacity: usize, items: impl IntoIterator<Item = Value>) -> Self {
        Self {
            inner: BoundedQueue::with_items(capacity, items),
        }
    }

    /// Wrap an existing synchronous queue.
    pub fn from_queue(queue: BoundedQueue) -> Self {
        Self { inner: queue }
    }

    /// Unwrap into the synchronous queue.
    pub fn into_inner(self) -> BoundedQueue {
        self.inner
    }

    pub async fn enqueue(&mut self, element: Value) -> QueueState {
        self.inner.enqueue(element)
    }

    pub async fn dequeue(&mut self) -> Result<Value, QueueError> {
        self.inner.dequeue()
    }

    pub async fn take(&mut self) -> Result<Value, QueueError> {
        self.inner.take()
    }

    pub async fn pop(&mut self) -> Option<Value> {
        self.inner.pop()
    }

    pub async fn peek(&self) -> Option<Value> {
        self.inner.peek().cloned()
    }

    pub async fn extend(
        &mut self,
        new_capacity: usize,
        elements: impl IntoIterator<Item = Value>,
    ) -> QueueState {
        self.inner.extend(new_capacity, elements)
    }

    pub async fn shrink(&mut self, new_capacity: usize, evict_newest: bool) -> QueueState {
        self.inner.shrink(new_capacity, evict_newest)
    }

    pub async fn flush(&mut self) -> Vec<Value> {
        self.inner.flush()
    }

    pub async fn clear(&mut self) {
        self.inner.clear();
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub async fn can_take(&self) -> bool {
        self.inner.can_take()
    }

    pub async fn len(&self) -> usize {
        self.inner.len()
    }

    pub async fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub async fn to_vec(&self) -> Vec<Value> {
        self.inner.to_vec()
    }
}
