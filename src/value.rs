//! Coercion and inspection helpers for [`serde_json::Value`] elements.
//!
//! Every helper accepts arbitrary input and returns a safe default rather
//! than failing: coercions fall back to the empty string or zero, length
//! of a scalar is zero, and flattening a non-array passes the value
//! through unchanged.

use serde_json::Value;

/// Coerce a value to its display string.
///
/// Strings are returned verbatim, numbers and booleans via their display
/// form. Null, arrays, and objects coerce to the empty string; callers
/// that need a structured rendering serialize explicitly.
pub fn as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Coerce a value to a number, if it has one.
///
/// Numbers pass through, numeric strings are parsed, booleans count as
/// one and zero. Everything else is `None`.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce a value to a finite number, falling back to zero.
pub fn as_valid_number(value: &Value) -> f64 {
    match as_number(value) {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Build a number value from a float, keeping integral magnitudes as
/// integers so they compare equal to integer literals.
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

/// Computed length of a value: array length, string character count, or
/// object key count. Scalars and null have length zero.
pub fn value_len(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::String(s) => s.chars().count(),
        Value::Object(map) => map.len(),
        Value::Null | Value::Bool(_) | Value::Number(_) => 0,
    }
}

/// True when the coerced string is empty after trimming.
pub fn is_blank(value: &Value) -> bool {
    as_string(value).trim().is_empty()
}

/// True for null, `false`, numeric zero, and the empty string.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Splice nested arrays into a flat sequence.
///
/// `depth` limits how many nesting levels are flattened; `None` flattens
/// fully. Non-array elements pass through unchanged.
pub fn flattened(values: &[Value], depth: Option<usize>) -> Vec<Value> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        flatten_into(value, depth, &mut out);
    }
    out
}

fn flatten_into(value: &Value, depth: Option<usize>, out: &mut Vec<Value>) {
    match (value, depth) {
        (Value::Array(items), None) => {
            for item in items {
                flatten_into(item, None, out);
            }
        }
        (Value::Array(items), Some(d)) if d > 0 => {
            for item in items {
                flatten_into(item, Some(d - 1), out);
            }
        }
        _ => out.push(value.clone()),
    }
}
