//! # seqchain-rs
//!
//! Composable filter/map/sort chains and bounded eviction queues over
//! JSON-style values.
//!
//! The library has three layers:
//! - **Function libraries**: named [predicates](predicate),
//!   [mappers](mapper), and [comparators](comparator) over
//!   [`serde_json::Value`], plus combinators that build new functions
//!   from existing ones.
//! - **Transformation pipeline**: a [`Transformer`] wraps one operation
//!   (filter, map, sort, flatten, nested chain); a [`TransformerChain`]
//!   applies transformers in order to a copy of the input,
//!   short-circuiting once the intermediate result is empty and
//!   treating failing steps as logged no-ops.
//! - **Bounded queue**: [`BoundedQueue`], a capacity-limited FIFO that
//!   evicts oldest-first on overflow and reports a [`QueueState`] after
//!   every mutation. The `async-queue` workspace member wraps it for
//!   asynchronous callers.
//!
//! ## Example
//!
//! ```
//! use seqchain_rs::{predicate, FilterChain};
//! use serde_json::json;
//!
//! let chain = FilterChain::new(vec![predicate::is_populated_string()]);
//! let kept = chain.apply_filters(&[
//!     json!(""),
//!     json!("  "),
//!     json!("hello"),
//!     json!(null),
//!     json!("world"),
//! ]);
//! assert_eq!(kept, vec![json!("hello"), json!("world")]);
//! ```

pub mod chains;
pub mod comparator;
pub mod error;
pub mod mapper;
pub mod predicate;
pub mod queue;
pub mod transform;
pub mod value;

pub use comparator::{Comparator, KeyFn};
pub use error::{QueueError, StepError};
pub use mapper::Mapper;
pub use predicate::Predicate;
pub use queue::{BoundedQueue, MAX_QUEUE_SIZE, QueueState};
pub use transform::{
    ComparatorChain, FilterChain, MapperChain, Operation, Transformer, TransformerChain,
};

pub use serde_json::Value;
