//! Named boolean tests over values, and combinators that build new
//! predicates from other predicates.
//!
//! A predicate receives the element under test, its index, and the full
//! input sequence, and answers `Ok(bool)` or reports a [`StepError`].
//! Combinators never propagate a predicate's error: `matches_all`
//! short-circuits the combination to false, `matches_any` and the
//! counting combinators treat the failing predicate as a non-match.

use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::error::StepError;
use crate::value;

/// A boolean test over `(element, index, sequence)`.
pub type Predicate =
    Arc<dyn Fn(&Value, usize, &[Value]) -> Result<bool, StepError> + Send + Sync>;

/// True for string values.
pub fn is_string() -> Predicate {
    Arc::new(|v, _, _| Ok(v.is_string()))
}

/// True for number values.
pub fn is_number() -> Predicate {
    Arc::new(|v, _, _| Ok(v.is_number()))
}

/// True for numbers and strings that parse to a finite number.
pub fn is_numeric() -> Predicate {
    Arc::new(|v, _, _| {
        Ok(matches!(value::as_number(v), Some(n) if n.is_finite()))
    })
}

/// True for boolean values.
pub fn is_boolean() -> Predicate {
    Arc::new(|v, _, _| Ok(v.is_boolean()))
}

/// True for array values.
pub fn is_array() -> Predicate {
    Arc::new(|v, _, _| Ok(v.is_array()))
}

/// True for object values.
pub fn is_object() -> Predicate {
    Arc::new(|v, _, _| Ok(v.is_object()))
}

/// True for null.
pub fn is_null() -> Predicate {
    Arc::new(|v, _, _| Ok(v.is_null()))
}

/// True for anything except null.
pub fn is_defined() -> Predicate {
    Arc::new(|v, _, _| Ok(!v.is_null()))
}

/// True when the value has a non-zero length, or is a number or boolean.
pub fn non_empty() -> Predicate {
    Arc::new(|v, _, _| {
        Ok(match v {
            Value::Number(_) | Value::Bool(_) => true,
            Value::Null => false,
            Value::String(_) | Value::Array(_) | Value::Object(_) => value::value_len(v) > 0,
        })
    })
}

/// True when the coerced string is non-empty after trimming.
pub fn non_blank() -> Predicate {
    Arc::new(|v, _, _| Ok(!value::is_blank(v)))
}

/// String with non-blank content.
pub fn is_populated_string() -> Predicate {
    matches_all(vec![is_string(), non_blank()])
}

/// Array with at least one element.
pub fn is_populated_array() -> Predicate {
    matches_all(vec![is_array(), non_empty()])
}

/// Object with at least one key.
pub fn is_populated_object() -> Predicate {
    matches_all(vec![is_object(), non_empty()])
}

/// True when the coerced string matches the pattern.
///
/// The pattern is compiled once, up front. A malformed pattern yields a
/// predicate that always answers false; a null element answers false.
pub fn matches_pattern(pattern: &str) -> Predicate {
    let compiled = Regex::new(pattern).ok();
    Arc::new(move |v, _, _| {
        if v.is_null() {
            return Ok(false);
        }
        match &compiled {
            Some(re) => Ok(re.is_match(&value::as_string(v))),
            None => Ok(false),
        }
    })
}

/// True only if every predicate answers true.
///
/// A predicate that answers false or fails short-circuits the
/// combination to false.
pub fn matches_all(predicates: Vec<Predicate>) -> Predicate {
    Arc::new(move |v, i, seq| {
        for p in &predicates {
            if !matches!(p(v, i, seq), Ok(true)) {
                return Ok(false);
            }
        }
        Ok(true)
    })
}

/// True if at least one predicate answers true.
///
/// A failing predicate counts as false for that predicate only.
pub fn matches_any(predicates: Vec<Predicate>) -> Predicate {
    Arc::new(move |v, i, seq| {
        for p in &predicates {
            if matches!(p(v, i, seq), Ok(true)) {
                return Ok(true);
            }
        }
        Ok(false)
    })
}

/// True if at least `n` predicates answer true. `n` is clamped to 1.
pub fn matches_n_or_more(n: usize, predicates: Vec<Predicate>) -> Predicate {
    let n = n.max(1);
    Arc::new(move |v, i, seq| Ok(count_matches(&predicates, v, i, seq) >= n))
}

/// True if exactly `n` predicates answer true. `n` is clamped to 1.
pub fn matches_only_n(n: usize, predicates: Vec<Predicate>) -> Predicate {
    let n = n.max(1);
    Arc::new(move |v, i, seq| Ok(count_matches(&predicates, v, i, seq) == n))
}

/// True if fewer than `n` predicates answer true. `n` is clamped to 1.
pub fn matches_less_than_n(n: usize, predicates: Vec<Predicate>) -> Predicate {
    let n = n.max(1);
    Arc::new(move |v, i, seq| Ok(count_matches(&predicates, v, i, seq) < n))
}

/// True only if none of the predicates match (logical NOR).
pub fn not(predicates: Vec<Predicate>) -> Predicate {
    Arc::new(move |v, i, seq| {
        for p in &predicates {
            if matches!(p(v, i, seq), Ok(true)) {
                return Ok(false);
            }
        }
        Ok(true)
    })
}

/// Membership test against the supplied values, flattened one level so
/// list arguments splice in. Comparison is structural.
pub fn in_values(values: Vec<Value>) -> Predicate {
    let reference = value::flattened(&values, Some(1));
    Arc::new(move |v, _, _| Ok(reference.contains(v)))
}

/// Negated membership test; same reference handling as [`in_values`].
pub fn not_in_values(values: Vec<Value>) -> Predicate {
    let reference = value::flattened(&values, Some(1));
    Arc::new(move |v, _, _| Ok(!reference.contains(v)))
}

fn count_matches(predicates: &[Predicate], v: &Value, i: usize, seq: &[Value]) -> usize {
    predicates
        .iter()
        .filter(|p| matches!(p(v, i, seq), Ok(true)))
        .count()
}
