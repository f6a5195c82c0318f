//! Named value transforms, usable standalone or chained.
//!
//! A mapper receives the element, its index, and the full input
//! sequence, and produces a new element or reports a [`StepError`].
//! [`chain`] composes mappers left to right while always forwarding the
//! original element's index and sequence, so positional mappers see
//! where the element came from, not where an intermediate value sits.

use std::sync::Arc;

use serde_json::Value;

use crate::error::StepError;
use crate::value;

/// A value transform over `(element, index, sequence)`.
pub type Mapper =
    Arc<dyn Fn(&Value, usize, &[Value]) -> Result<Value, StepError> + Send + Sync>;

/// Coerce the element to its display string.
pub fn to_string() -> Mapper {
    Arc::new(|v, _, _| Ok(Value::String(value::as_string(v))))
}

/// Coerce the element to a number, failing when it has none.
pub fn to_number() -> Mapper {
    Arc::new(|v, _, _| match value::as_number(v) {
        Some(n) if n.is_finite() => Ok(value::number_value(n)),
        _ => Err(StepError::new(format!("cannot coerce {v} to a number"))),
    })
}

/// Coerce the element to a finite number, falling back to zero.
pub fn to_valid_number() -> Mapper {
    Arc::new(|v, _, _| Ok(value::number_value(value::as_valid_number(v))))
}

/// Trim the coerced string.
pub fn trimmed() -> Mapper {
    Arc::new(|v, _, _| Ok(Value::String(value::as_string(v).trim().to_string())))
}

/// Lowercase the coerced string.
pub fn to_lowercase() -> Mapper {
    Arc::new(|v, _, _| Ok(Value::String(value::as_string(v).to_lowercase())))
}

/// Uppercase the coerced string.
pub fn to_uppercase() -> Mapper {
    Arc::new(|v, _, _| Ok(Value::String(value::as_string(v).to_uppercase())))
}

/// Append `suffix` to the coerced string.
pub fn append(suffix: &str) -> Mapper {
    let suffix = suffix.to_string();
    Arc::new(move |v, _, _| {
        Ok(Value::String(format!("{}{}", value::as_string(v), suffix)))
    })
}

/// Prepend `prefix` to the coerced string.
pub fn prepend(prefix: &str) -> Mapper {
    let prefix = prefix.to_string();
    Arc::new(move |v, _, _| {
        Ok(Value::String(format!("{}{}", prefix, value::as_string(v))))
    })
}

/// Replace every occurrence of `search` in the coerced string.
pub fn replace(search: &str, replacement: &str) -> Mapper {
    let search = search.to_string();
    let replacement = replacement.to_string();
    Arc::new(move |v, _, _| {
        Ok(Value::String(
            value::as_string(v).replace(&search, &replacement),
        ))
    })
}

/// Apply mappers left to right, feeding each output into the next input.
///
/// The index and sequence arguments are forwarded unchanged to every
/// inner mapper. A failing inner mapper fails the chained mapper.
pub fn chain(mappers: Vec<Mapper>) -> Mapper {
    Arc::new(move |v, i, seq| {
        let mut current = v.clone();
        for m in &mappers {
            current = m(&current, i, seq)?;
        }
        Ok(current)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apply(m: &Mapper, v: Value) -> Value {
        m(&v, 0, &[]).unwrap()
    }

    #[test]
    fn test_to_string() {
        assert_eq!(apply(&to_string(), json!(42)), json!("42"));
        assert_eq!(apply(&to_string(), json!(null)), json!(""));
    }

    #[test]
    fn test_to_number_coerces() {
        assert_eq!(apply(&to_number(), json!("5")), json!(5));
        assert_eq!(apply(&to_number(), json!("2.5")), json!(2.5));
        assert_eq!(apply(&to_number(), json!(true)), json!(1));
    }

    #[test]
    fn test_to_number_fails_on_non_numeric() {
        assert!(to_number()(&json!("abc"), 0, &[]).is_err());
        assert!(to_number()(&json!(null), 0, &[]).is_err());
    }

    #[test]
    fn test_to_valid_number_falls_back_to_zero() {
        assert_eq!(apply(&to_valid_number(), json!("abc")), json!(0));
        assert_eq!(apply(&to_valid_number(), json!("8")), json!(8));
    }

    #[test]
    fn test_trimmed_and_cases() {
        assert_eq!(apply(&trimmed(), json!("  hi  ")), json!("hi"));
        assert_eq!(apply(&to_lowercase(), json!("HeLLo")), json!("hello"));
        assert_eq!(apply(&to_uppercase(), json!("HeLLo")), json!("HELLO"));
    }

    #[test]
    fn test_append_prepend_replace() {
        assert_eq!(apply(&append(".txt"), json!("file")), json!("file.txt"));
        assert_eq!(apply(&prepend("dir/"), json!("file")), json!("dir/file"));
        assert_eq!(
            apply(&replace("o", "0"), json!("foo boo")),
            json!("f00 b00")
        );
    }

    #[test]
    fn test_chain_applies_left_to_right() {
        let m = chain(vec![trimmed(), to_uppercase(), append("!")]);
        assert_eq!(apply(&m, json!("  hey ")), json!("HEY!"));
    }

    #[test]
    fn test_chain_forwards_original_index() {
        // a positional mapper in second place still sees the original
        // element's index, not an intermediate position
        let positional: Mapper =
            Arc::new(|v, i, _| Ok(json!(format!("{}@{}", value::as_string(v), i))));
        let m = chain(vec![to_uppercase(), positional]);
        let seq = vec![json!("a"), json!("b")];
        assert_eq!(m(&seq[1], 1, &seq).unwrap(), json!("B@1"));
    }

    #[test]
    fn test_chain_propagates_failure() {
        let m = chain(vec![to_number(), append("!")]);
        assert!(m(&json!("abc"), 0, &[]).is_err());
    }
}
