//! Composable sequence transformations.
//!
//! A [`Transformer`] wraps one operation (filter, map, sort, flatten,
//! or a nested chain) behind a single dispatch. A [`TransformerChain`]
//! applies its transformers in insertion order to a copy of the input,
//! short-circuiting once an intermediate result is empty. Chains are
//! best-effort: a failing step is logged as a warning and skipped, and
//! the chain continues with the pre-step intermediate unchanged.

use serde_json::Value;
use tracing::warn;

use crate::comparator::{self, Comparator};
use crate::error::StepError;
use crate::mapper::Mapper;
use crate::predicate::Predicate;
use crate::value;

/// The operation a [`Transformer`] performs.
pub enum Operation {
    /// Keep elements the predicate accepts.
    Filter(Predicate),
    /// Replace each element with the mapper's output.
    Map(Mapper),
    /// Stable-sort the whole sequence with the comparator.
    Sort(Comparator),
    /// Splice nested arrays to the given depth; `None` flattens fully.
    Flatten(Option<usize>),
    /// Run an inner chain as one step.
    Nested(TransformerChain),
}

/// One transformation step: an operation fixed at construction.
pub struct Transformer {
    op: Operation,
}

impl Transformer {
    pub fn new(op: Operation) -> Self {
        Self { op }
    }

    pub fn filter(predicate: Predicate) -> Self {
        Self {
            op: Operation::Filter(predicate),
        }
    }

    pub fn map(mapper: Mapper) -> Self {
        Self {
            op: Operation::Map(mapper),
        }
    }

    pub fn sort(comparator: Comparator) -> Self {
        Self {
            op: Operation::Sort(comparator),
        }
    }

    pub fn flatten(depth: Option<usize>) -> Self {
        Self {
            op: Operation::Flatten(depth),
        }
    }

    pub fn nested(chain: TransformerChain) -> Self {
        Self {
            op: Operation::Nested(chain),
        }
    }

    /// Apply this transformer to a sequence, producing a new sequence.
    ///
    /// Filter and map pass `(element, index, input)` to their argument
    /// function; an element-level failure fails the whole step so the
    /// owning chain can fall back to the pre-step intermediate.
    pub fn apply(&self, input: &[Value]) -> Result<Vec<Value>, StepError> {
        match &self.op {
            Operation::Filter(predicate) => {
                let mut kept = Vec::with_capacity(input.len());
                for (i, v) in input.iter().enumerate() {
                    if predicate(v, i, input)? {
                        kept.push(v.clone());
                    }
                }
                Ok(kept)
            }
            Operation::Map(mapper) => {
                let mut mapped = Vec::with_capacity(input.len());
                for (i, v) in input.iter().enumerate() {
                    mapped.push(mapper(v, i, input)?);
                }
                Ok(mapped)
            }
            Operation::Sort(cmp) => {
                let mut out = input.to_vec();
                out.sort_by(|a, b| cmp(a, b));
                Ok(out)
            }
            Operation::Flatten(depth) => Ok(value::flattened(input, *depth)),
            Operation::Nested(chain) => Ok(chain.transform(input)),
        }
    }
}

/// An ordered sequence of transformers applied as one transformation.
#[derive(Default)]
pub struct TransformerChain {
    steps: Vec<Transformer>,
}

impl TransformerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_steps(steps: Vec<Transformer>) -> Self {
        Self { steps }
    }

    /// Append a step, builder style.
    pub fn then(mut self, step: Transformer) -> Self {
        self.steps.push(step);
        self
    }

    pub fn push(&mut self, step: Transformer) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply every step in insertion order to a copy of the input.
    ///
    /// The caller's sequence is never mutated. Once an intermediate
    /// result is empty, remaining steps are skipped. A failing step is
    /// logged as a warning and treated as a no-op.
    pub fn transform(&self, input: &[Value]) -> Vec<Value> {
        let mut current = input.to_vec();
        for step in &self.steps {
            if current.is_empty() {
                break;
            }
            match step.apply(&current) {
                Ok(next) => current = next,
                Err(e) => {
                    warn!(error = %e, "transform step failed, keeping intermediate result");
                }
            }
        }
        current
    }
}

/// A chain constrained to filter steps.
pub struct FilterChain {
    chain: TransformerChain,
}

impl FilterChain {
    pub fn new(predicates: Vec<Predicate>) -> Self {
        let mut chain = TransformerChain::new();
        for p in predicates {
            chain.push(Transformer::filter(p));
        }
        Self { chain }
    }

    /// Synonym for applying the underlying chain.
    pub fn apply_filters(&self, input: &[Value]) -> Vec<Value> {
        self.chain.transform(input)
    }
}

/// A chain constrained to map steps.
pub struct MapperChain {
    chain: TransformerChain,
}

impl MapperChain {
    pub fn new(mappers: Vec<Mapper>) -> Self {
        let mut chain = TransformerChain::new();
        for m in mappers {
            chain.push(Transformer::map(m));
        }
        Self { chain }
    }

    /// Synonym for applying the underlying chain.
    pub fn apply_mappers(&self, input: &[Value]) -> Vec<Value> {
        self.chain.transform(input)
    }
}

/// Comparators composed into a single ordering, applied as one sort.
pub struct ComparatorChain {
    cmp: Comparator,
}

impl ComparatorChain {
    /// Compose with first-non-equal-wins semantics.
    pub fn new(comparators: Vec<Comparator>) -> Self {
        Self {
            cmp: comparator::chain(comparators),
        }
    }

    /// Compose with each comparator's answer reversed per step.
    pub fn descending(comparators: Vec<Comparator>) -> Self {
        Self {
            cmp: comparator::descending(comparators),
        }
    }

    /// Sort a copy of the input once with the composed comparator.
    pub fn sort(&self, input: &[Value]) -> Vec<Value> {
        let mut out = input.to_vec();
        out.sort_by(|a, b| (self.cmp)(a, b));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{comparator::Coerce, mapper, predicate};
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    #[test]
    fn test_filter_step() {
        let t = Transformer::filter(predicate::is_number());
        let out = t.apply(&[json!(1), json!("x"), json!(2)]).unwrap();
        assert_eq!(out, vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_map_step() {
        let t = Transformer::map(mapper::to_uppercase());
        let out = t.apply(&[json!("a"), json!("b")]).unwrap();
        assert_eq!(out, vec![json!("A"), json!("B")]);
    }

    #[test]
    fn test_map_step_fails_whole_step() {
        let t = Transformer::map(mapper::to_number());
        assert!(t.apply(&[json!(1), json!("x")]).is_err());
    }

    #[test]
    fn test_sort_step_is_stable() {
        let t = Transformer::sort(comparator::by_length());
        let out = t
            .apply(&[json!("bb"), json!("aa"), json!("c")])
            .unwrap();
        // equal-length elements keep their relative order
        assert_eq!(out, vec![json!("c"), json!("bb"), json!("aa")]);
    }

    #[test]
    fn test_flatten_step() {
        let t = Transformer::flatten(None);
        let out = t.apply(&[json!([1, [2]]), json!(3)]).unwrap();
        assert_eq!(out, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_nested_chain_step() {
        let inner = TransformerChain::new().then(Transformer::map(mapper::trimmed()));
        let outer = TransformerChain::new()
            .then(Transformer::nested(inner))
            .then(Transformer::filter(predicate::non_empty()));
        assert_eq!(
            outer.transform(&[json!(" a "), json!("   ")]),
            vec![json!("a")]
        );
    }

    #[test]
    fn test_transform_does_not_mutate_input() {
        let input = vec![json!("b"), json!("a")];
        let chain = TransformerChain::new()
            .then(Transformer::sort(comparator::by_string_value()))
            .then(Transformer::map(mapper::to_uppercase()));
        let out = chain.transform(&input);
        assert_eq!(input, vec![json!("b"), json!("a")]);
        assert_eq!(out, vec![json!("A"), json!("B")]);
    }

    #[test]
    fn test_short_circuit_skips_later_steps() {
        // a filter that never matches, then a counting mapper: the
        // mapper must never run
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = Arc::clone(&calls);
        let counting: Mapper = Arc::new(move |v, _, _| {
            calls_in.fetch_add(1, AtomicOrdering::SeqCst);
            Ok(v.clone())
        });
        let chain = TransformerChain::new()
            .then(Transformer::filter(predicate::is_object()))
            .then(Transformer::map(counting));
        let out = chain.transform(&[json!(1), json!(2)]);
        assert!(out.is_empty());
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn test_empty_input_runs_no_steps() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = Arc::clone(&calls);
        let counting: Mapper = Arc::new(move |v, _, _| {
            calls_in.fetch_add(1, AtomicOrdering::SeqCst);
            Ok(v.clone())
        });
        let chain = TransformerChain::new().then(Transformer::map(counting));
        assert!(chain.transform(&[]).is_empty());
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn test_failing_step_keeps_intermediate_result() {
        let chain = TransformerChain::new()
            .then(Transformer::map(mapper::to_number()))
            .then(Transformer::map(mapper::to_string()));
        // the first step fails on "x"; the second still runs on the
        // untouched intermediate
        let out = chain.transform(&[json!(1), json!("x")]);
        assert_eq!(out, vec![json!("1"), json!("x")]);
    }

    #[test]
    fn test_filter_chain_scenario() {
        let chain = FilterChain::new(vec![predicate::is_populated_string()]);
        let out = chain.apply_filters(&[
            json!(""),
            json!("  "),
            json!("hello"),
            json!(null),
            json!("world"),
        ]);
        assert_eq!(out, vec![json!("hello"), json!("world")]);
    }

    #[test]
    fn test_mapper_chain() {
        let chain = MapperChain::new(vec![mapper::trimmed(), mapper::to_lowercase()]);
        assert_eq!(
            chain.apply_mappers(&[json!(" A "), json!("B")]),
            vec![json!("a"), json!("b")]
        );
    }

    #[test]
    fn test_comparator_chain_sorts_once() {
        let chain = ComparatorChain::new(vec![
            comparator::by_length(),
            comparator::by_string_value(),
        ]);
        assert_eq!(
            chain.sort(&[json!("bb"), json!("a"), json!("cc")]),
            vec![json!("a"), json!("bb"), json!("cc")]
        );
    }

    #[test]
    fn test_comparator_chain_descending() {
        let chain = ComparatorChain::descending(vec![comparator::create_default(
            Coerce::AsNumber,
        )]);
        assert_eq!(
            chain.sort(&[json!(1), json!(3), json!(2)]),
            vec![json!(3), json!(2), json!(1)]
        );
    }

    #[test]
    fn test_filters_see_index_and_sequence() {
        // keep elements that equal the first element of the sequence
        let head_only: Predicate =
            Arc::new(|v, _, seq| Ok(seq.first().is_some_and(|h| h == v)));
        let chain = FilterChain::new(vec![head_only]);
        assert_eq!(
            chain.apply_filters(&[json!("a"), json!("b"), json!("a")]),
            vec![json!("a"), json!("a")]
        );
    }
}
