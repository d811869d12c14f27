//! Flatten a projected record into plain key/value outputs.

use crate::fields::Record;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry {
    pub key: String,
    pub value: Value,
}

impl FlatEntry {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Collapse one level of nesting into `{top}_{nested}` keys.
///
/// Top-level scalars pass through unchanged. A map at the top level yields
/// one entry per nested key; anything deeper than that stays a nested value
/// under its single flattened key.
pub fn flatten(projected: &Record) -> Vec<FlatEntry> {
    let mut out = Vec::new();
    for (key, value) in projected {
        match value {
            Value::Object(nested) => {
                for (nested_key, nested_value) in nested {
                    out.push(FlatEntry::new(
                        format!("{}_{}", key, nested_key),
                        nested_value.clone(),
                    ));
                }
            }
            scalar => out.push(FlatEntry::new(key.clone(), scalar.clone())),
        }
    }
    out
}
