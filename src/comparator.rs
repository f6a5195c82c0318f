//! Two-argument ordering functions and combinators.
//!
//! Comparators return [`Ordering`] and are total over arbitrary value
//! pairs: operands are coerced before comparing, with null treated as
//! the target type's zero value. [`chain`] applies comparators in order
//! until the first non-equal answer; [`descending`] does the same but
//! reverses each individual comparator's answer before checking it.

use std::cmp::Ordering;
use std::sync::Arc;

use serde_json::Value;

use crate::value;

/// An ordering over value pairs, compatible with `sort_by`.
pub type Comparator = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// A key transform applied to elements before a positional lookup.
pub type KeyFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Coercion applied to both operands by [`create_default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerce {
    AsString,
    AsNumber,
    AsBool,
}

/// Comparator that coerces both operands before comparing.
///
/// A null operand coerces to the type's zero value: the empty string,
/// zero, or false.
pub fn create_default(coerce: Coerce) -> Comparator {
    Arc::new(move |a, b| match coerce {
        Coerce::AsString => value::as_string(a).cmp(&value::as_string(b)),
        Coerce::AsNumber => {
            let (x, y) = (value::as_valid_number(a), value::as_valid_number(b));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        Coerce::AsBool => truthy(a).cmp(&truthy(b)),
    })
}

/// Comparator over display strings.
///
/// Operands whose display form is blank fall back to their structured
/// (JSON) serialization. When the primary comparison ties, a second
/// pass over the full serialized form produces a deterministic
/// non-equal order when the operands differ structurally.
pub fn by_string_value() -> Comparator {
    Arc::new(|a, b| {
        let ord = sort_key(a).cmp(&sort_key(b));
        if ord != Ordering::Equal {
            return ord;
        }
        serialized(a).cmp(&serialized(b))
    })
}

/// Comparator over computed lengths: array length, string character
/// count, or object key count.
pub fn by_length() -> Comparator {
    Arc::new(|a, b| value::value_len(a).cmp(&value::value_len(b)))
}

/// Order elements by their position in a reference sequence.
///
/// Elements absent from the reference sort after all present ones.
/// Ties fall back to [`by_string_value`], then to the default string
/// comparator.
pub fn by_position(reference: Vec<Value>) -> Comparator {
    by_position_with(reference, Arc::new(|v: &Value| v.clone()))
}

/// [`by_position`] with a key transform applied before the lookup.
pub fn by_position_with(reference: Vec<Value>, key: KeyFn) -> Comparator {
    let tie = chain(vec![by_string_value(), create_default(Coerce::AsString)]);
    Arc::new(move |a, b| {
        let pa = position_of(&reference, &key(a));
        let pb = position_of(&reference, &key(b));
        match (pa, pb) {
            (Some(x), Some(y)) if x != y => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            _ => tie(a, b),
        }
    })
}

/// Apply comparators in order; the first non-equal answer wins.
pub fn chain(comparators: Vec<Comparator>) -> Comparator {
    Arc::new(move |a, b| {
        for c in &comparators {
            let ord = c(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    })
}

/// Like [`chain`], but each individual comparator's answer is reversed
/// before the non-equal check. The reversal is per step, not a reversal
/// of the chained result.
pub fn descending(comparators: Vec<Comparator>) -> Comparator {
    Arc::new(move |a, b| {
        for c in &comparators {
            let ord = c(a, b).reverse();
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    })
}

fn truthy(v: &Value) -> bool {
    !value::is_falsy(v)
}

fn sort_key(v: &Value) -> String {
    let direct = value::as_string(v);
    if direct.trim().is_empty() {
        serialized(v)
    } else {
        direct
    }
}

fn serialized(v: &Value) -> String {
    serde_json::to_string(v).unwrap_or_default()
}

fn position_of(reference: &[Value], key: &Value) -> Option<usize> {
    reference.iter().position(|r| r == key)
}
