//! Pre-built named cleanup chains, and the text-level entry point the
//! `seq-clean` binary drives.
//!
//! Chains are addressed by kebab-case name:
//! - `string-cleanup` - coerce to string, trim, drop empties
//! - `populated-strings` - keep populated strings only
//! - `non-blank` - drop blank elements
//! - `flattened-strings` - flatten fully, then clean up as strings
//!
//! [`apply_named`] splits its input into lines, parses each line as
//! JSON with a plain-string fallback (so `[1,2]` or `42` on a line
//! become structured values), runs the chain, and renders one coerced
//! string per surviving element.

use serde_json::Value;

use crate::mapper;
use crate::predicate;
use crate::transform::{Transformer, TransformerChain};
use crate::value;

/// Coerce to string, trim, drop empties.
pub fn string_cleanup() -> TransformerChain {
    TransformerChain::new()
        .then(Transformer::map(mapper::to_string()))
        .then(Transformer::map(mapper::trimmed()))
        .then(Transformer::filter(predicate::non_empty()))
}

/// Keep populated strings only.
pub fn populated_strings() -> TransformerChain {
    TransformerChain::new().then(Transformer::filter(predicate::is_populated_string()))
}

/// Drop elements whose coerced string is blank.
pub fn non_blank() -> TransformerChain {
    TransformerChain::new().then(Transformer::filter(predicate::non_blank()))
}

/// Flatten fully, then clean up as strings.
pub fn flattened_strings() -> TransformerChain {
    TransformerChain::new()
        .then(Transformer::flatten(None))
        .then(Transformer::nested(string_cleanup()))
}

/// The registry names accepted by [`named_chain`].
pub fn chain_names() -> &'static [&'static str] {
    &[
        "string-cleanup",
        "populated-strings",
        "non-blank",
        "flattened-strings",
    ]
}

/// Look up a pre-built chain by name.
pub fn named_chain(name: &str) -> Option<TransformerChain> {
    match name {
        "string-cleanup" => Some(string_cleanup()),
        "populated-strings" => Some(populated_strings()),
        "non-blank" => Some(non_blank()),
        "flattened-strings" => Some(flattened_strings()),
        _ => None,
    }
}

/// Run a named chain over line-oriented input text.
///
/// Returns the rendered output lines on success.
pub fn apply_named(name: &str, input_text: &str) -> Result<String, String> {
    let chain = named_chain(name).ok_or_else(|| {
        format!(
            "Unknown chain: {} (try one of: {})",
            name,
            chain_names().join(", ")
        )
    })?;

    let values: Vec<Value> = input_text.lines().map(parse_line).collect();
    let output = chain.transform(&values);

    Ok(output
        .iter()
        .map(value::as_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Parse one input line: JSON if it parses, a plain string otherwise.
fn parse_line(line: &str) -> Value {
    serde_json::from_str(line).unwrap_or_else(|_| Value::String(line.to_string()))
}
