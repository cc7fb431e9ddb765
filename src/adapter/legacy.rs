use super::fields::{is_present, value_to_string};
use super::raw::RawTab;
use super::FormatAdapter;
use serde_json::Value;
use tracing::debug;

/// Adapter for the older report layout with top-level tab collections:
///
/// ```text
/// { "changed_tabs": { "<tab name>": { "type": "mixed" }, .. },
///   "unchanged_tabs": { "<tab name>": {..}, .. } }
/// ```
///
/// Only tab names and change tags are read; that layout never carried
/// per-mapping detail in a form worth recovering.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFormatAdapter;

impl LegacyFormatAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FormatAdapter for LegacyFormatAdapter {
    fn validate(&self, document: &Value) -> bool {
        document.as_object().is_some_and(|root| {
            root.contains_key("changed_tabs") && root.contains_key("unchanged_tabs")
        })
    }

    fn extract(&self, document: &Value) -> Vec<RawTab> {
        let changed = document
            .get("changed_tabs")
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .map(|(name, tab)| {
                let change_type = tab
                    .get("type")
                    .filter(|value| is_present(value))
                    .map(value_to_string)
                    .unwrap_or_else(|| "unknown".to_string());
                RawTab::new(name.as_str(), change_type)
            });

        let unchanged = tab_names(document.get("unchanged_tabs"))
            .into_iter()
            .map(|name| RawTab::new(name, "unchanged"));

        let raw_tabs: Vec<RawTab> = changed.chain(unchanged).collect();
        debug!("Extracted {} tabs from legacy format", raw_tabs.len());
        raw_tabs
    }

    fn format_version(&self) -> &str {
        "Legacy STTM v1.0"
    }
}

/// Unchanged tabs appear either keyed by name or as a list of names
fn tab_names(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Object(tabs)) => tabs.keys().cloned().collect(),
        Some(Value::Array(names)) => names
            .iter()
            .filter(|name| is_present(name))
            .map(value_to_string)
            .collect(),
        _ => Vec::new(),
    }
}
