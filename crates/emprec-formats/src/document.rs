//! Shared `records` root handling for the self-describing formats.

use emprec_core::RawRecordFields;
use serde_json::Value;

/// Top-level key holding the record sequence.
pub(crate) const RECORDS_KEY: &str = "records";

/// Pull the `records` sequence out of a parsed JSON or YAML document.
pub(crate) fn records(document: Value) -> Result<Vec<RawRecordFields>, String> {
    let mut root = match document {
        Value::Object(root) => root,
        other => {
            return Err(format!("top-level document is {}, expected a mapping", kind(&other)));
        }
    };

    let items = match root.remove(RECORDS_KEY) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(format!("`{RECORDS_KEY}` is {}, expected a sequence", kind(&other)));
        }
        None => return Err(format!("missing top-level `{RECORDS_KEY}`")),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(object) => Ok(RawRecordFields::from_json_object(object)),
            other => Err(format!("{RECORDS_KEY}[{i}] is {}, expected a mapping", kind(&other))),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
