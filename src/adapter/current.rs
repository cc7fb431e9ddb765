//! Adapter for the comparison tool's current report layout.

use super::fields::{
    is_present, resolve_field, resolve_optional_field, value_to_string, CANONICAL_NAME_KEYS,
    SAMPLE_DATA_KEYS, SOURCE_FIELD_KEYS, TARGET_FIELD_KEYS,
};
use super::raw::{RawMapping, RawTab};
use super::FormatAdapter;
use crate::model::{FieldDiff, ValueMap};
use serde_json::{Map, Value};
use tracing::debug;

const REQUIRED_KEYS: &[&str] = &["report_metadata", "detailed_changes"];

const UNCHANGED: &str = "unchanged";

/// Adapter for the comparison tool's current report layout:
///
/// ```text
/// { "report_metadata": {..},
///   "detailed_changes": { "changed_tabs": [..], "unchanged_tabs": [..] } }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentFormatAdapter;

impl CurrentFormatAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_tab(&self, tab: &Value, is_changed: bool) -> RawTab {
        let change_type = match tab.get("change_type") {
            Some(tag) if is_changed => declared_tag(tag),
            _ => UNCHANGED.to_string(),
        };

        let mappings = tab.get("mappings");
        let list = |key: &str| records(mappings.and_then(|m| m.get(key)));

        RawTab {
            name: string_field(tab, "tab_name").unwrap_or_default(),
            change_type,
            source_system: string_field(tab, "source_system"),
            target_system: string_field(tab, "target_system"),
            added_mappings: self.extract_mappings(list("added_mappings"), "added"),
            deleted_mappings: self.extract_mappings(list("deleted_mappings"), "deleted"),
            modified_mappings: self.extract_modified_mappings(list("modified_mappings")),
            unchanged_mappings: Vec::new(),
        }
    }

    fn extract_mappings(&self, records: &[Value], change_type: &str) -> Vec<RawMapping> {
        records
            .iter()
            .map(|record| {
                let empty = Map::new();
                let fields = mapping_fields(record).unwrap_or(&empty);
                RawMapping {
                    sample_data: resolve_optional_field(fields, SAMPLE_DATA_KEYS),
                    change_type: Some(change_type.to_string()),
                    ..base_mapping(fields)
                }
            })
            .collect()
    }

    fn extract_modified_mappings(&self, records: &[Value]) -> Vec<RawMapping> {
        records
            .iter()
            .map(|record| {
                let empty = Map::new();
                let fields = mapping_fields(record).unwrap_or(&empty);
                let changes = record
                    .get("field_changes")
                    .and_then(Value::as_object)
                    .unwrap_or(&empty);

                let sample_data = match sample_data_change(changes) {
                    Some(change) => change
                        .get("new_value")
                        .filter(|value| !value.is_null())
                        .map(value_to_string),
                    None => resolve_optional_field(fields, SAMPLE_DATA_KEYS),
                };

                RawMapping {
                    sample_data,
                    change_type: Some("modified".to_string()),
                    diff: Some(field_diff(changes)),
                    ..base_mapping(fields)
                }
            })
            .collect()
    }
}

impl FormatAdapter for CurrentFormatAdapter {
    fn validate(&self, document: &Value) -> bool {
        document
            .as_object()
            .is_some_and(|root| REQUIRED_KEYS.iter().all(|key| root.contains_key(*key)))
    }

    fn extract(&self, document: &Value) -> Vec<RawTab> {
        let detailed = document.get("detailed_changes");
        let changed = records(detailed.and_then(|d| d.get("changed_tabs")));
        let unchanged = records(detailed.and_then(|d| d.get("unchanged_tabs")));

        let raw_tabs: Vec<RawTab> = changed
            .iter()
            .map(|tab| self.extract_tab(tab, true))
            .chain(unchanged.iter().map(|tab| self.extract_tab(tab, false)))
            .collect();

        debug!(
            changed = changed.len(),
            unchanged = unchanged.len(),
            "Extracted {} tabs from current format",
            raw_tabs.len()
        );
        raw_tabs
    }

    fn format_version(&self) -> &str {
        "Excel Comparison Tool v2.0"
    }
}

/// Array elements under an optional value; anything that is not an array is empty
fn records(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn mapping_fields(record: &Value) -> Option<&Map<String, Value>> {
    record.get("mapping_fields").and_then(Value::as_object)
}

fn string_field(object: &Value, key: &str) -> Option<String> {
    object
        .get(key)
        .filter(|value| is_present(value))
        .map(value_to_string)
}

/// A declared tab tag taken verbatim; null becomes the empty tag so only an
/// absent key defaults to `"unchanged"`
fn declared_tag(tag: &Value) -> String {
    match tag {
        Value::Null => String::new(),
        other => value_to_string(other),
    }
}

fn base_mapping(fields: &Map<String, Value>) -> RawMapping {
    RawMapping {
        source_field: resolve_field(fields, SOURCE_FIELD_KEYS),
        target_field: resolve_field(fields, TARGET_FIELD_KEYS),
        canonical_name: resolve_optional_field(fields, CANONICAL_NAME_KEYS),
        ..Default::default()
    }
}

/// The first sample-data entry of `field_changes` recorded as an old/new pair
fn sample_data_change(changes: &Map<String, Value>) -> Option<&Map<String, Value>> {
    SAMPLE_DATA_KEYS
        .iter()
        .find_map(|key| changes.get(*key).and_then(Value::as_object))
}

/// Split `field_changes` into field names plus original/new value maps.
///
/// `{"old_value", "new_value"}` objects fill both maps; a bare value only
/// records the new side.
fn field_diff(changes: &Map<String, Value>) -> FieldDiff {
    let mut original_values = ValueMap::new();
    let mut new_values = ValueMap::new();

    for (field, change) in changes {
        match change.as_object() {
            Some(pair) => {
                let side = |key: &str| pair.get(key).cloned().unwrap_or(Value::Null);
                original_values.insert(field.clone(), side("old_value"));
                new_values.insert(field.clone(), side("new_value"));
            }
            None => {
                new_values.insert(field.clone(), change.clone());
            }
        }
    }

    FieldDiff {
        modified_fields: changes.keys().cloned().collect(),
        original_values,
        new_values,
    }
}
