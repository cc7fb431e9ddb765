//! Key spellings used by report producers for each logical mapping field.
//!
//! Each list is in priority order: the first key holding a non-empty value
//! wins. Format drift in key naming is handled by editing these lists.

use serde_json::{Map, Value};

pub const SOURCE_FIELD_KEYS: &[&str] = &["Source Field", "source_field"];

pub const TARGET_FIELD_KEYS: &[&str] = &["Target Field", "target_field"];

pub const CANONICAL_NAME_KEYS: &[&str] = &[
    "Source Canonical Name",
    "Target Canonical Name",
    "canonical_name",
];

pub const SAMPLE_DATA_KEYS: &[&str] = &["source_sample_data", "target_sample_data", "sample_data"];

/// Resolve a logical field through its prioritized key list.
///
/// Returns the empty string when no key holds a non-empty value.
pub fn resolve_field(fields: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| is_present(value))
        .map(value_to_string)
        .unwrap_or_default()
}

/// Like [`resolve_field`], but an unresolved field is `None`
pub fn resolve_optional_field(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    Some(resolve_field(fields, keys)).filter(|value| !value.is_empty())
}

/// Whether a value counts as "set": null, false, zero and empty
/// strings/collections do not.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

/// Render a scalar as text; strings are taken verbatim, anything else as JSON
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
