use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Field name to JSON value, as recorded in a report's `field_changes`.
pub type ValueMap = BTreeMap<String, Value>;

/// Classification of a single mapping between two spreadsheet revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Added,
    Deleted,
    Modified,
    Unchanged,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Deleted => "deleted",
            ChangeType::Modified => "modified",
            ChangeType::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Before/after detail of a modified mapping.
///
/// `modified_fields` keeps the order in which the report listed the changes.
/// A field present in `new_values` but absent from `original_values` was
/// reported as a bare value with no recorded original.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDiff {
    pub modified_fields: Vec<String>,
    pub original_values: ValueMap,
    pub new_values: ValueMap,
}

impl FieldDiff {
    pub fn is_empty(&self) -> bool {
        self.modified_fields.is_empty()
            && self.original_values.is_empty()
            && self.new_values.is_empty()
    }
}

/// One source-field to target-field correspondence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mapping {
    source_field: String,
    target_field: String,
    canonical_name: Option<String>,
    sample_data: Option<String>,
    change_type: Option<ChangeType>,
    modified_fields: Vec<String>,
    original_values: ValueMap,
    new_values: ValueMap,
}

impl Mapping {
    /// Create an unclassified mapping with no diff detail
    pub fn new(source_field: impl Into<String>, target_field: impl Into<String>) -> Self {
        Self {
            source_field: source_field.into(),
            target_field: target_field.into(),
            canonical_name: None,
            sample_data: None,
            change_type: None,
            modified_fields: Vec::new(),
            original_values: ValueMap::new(),
            new_values: ValueMap::new(),
        }
    }

    pub fn with_canonical_name(mut self, canonical_name: Option<String>) -> Self {
        self.canonical_name = canonical_name;
        self
    }

    pub fn with_sample_data(mut self, sample_data: Option<String>) -> Self {
        self.sample_data = sample_data;
        self
    }

    /// Classify the mapping.
    ///
    /// Diff detail only survives on modified mappings, so classifying as
    /// anything else clears it.
    pub fn classified(mut self, change_type: ChangeType) -> Self {
        if change_type != ChangeType::Modified {
            self.modified_fields.clear();
            self.original_values.clear();
            self.new_values.clear();
        }
        self.change_type = Some(change_type);
        self
    }

    /// Attach diff detail, classifying the mapping as modified
    pub fn with_diff(mut self, diff: FieldDiff) -> Self {
        self.change_type = Some(ChangeType::Modified);
        self.modified_fields = diff.modified_fields;
        self.original_values = diff.original_values;
        self.new_values = diff.new_values;
        self
    }

    pub fn source_field(&self) -> &str {
        &self.source_field
    }

    pub fn target_field(&self) -> &str {
        &self.target_field
    }

    pub fn canonical_name(&self) -> Option<&str> {
        self.canonical_name.as_deref()
    }

    pub fn sample_data(&self) -> Option<&str> {
        self.sample_data.as_deref()
    }

    pub fn change_type(&self) -> Option<ChangeType> {
        self.change_type
    }

    pub fn modified_fields(&self) -> &[String] {
        &self.modified_fields
    }

    pub fn original_values(&self) -> &ValueMap {
        &self.original_values
    }

    pub fn new_values(&self) -> &ValueMap {
        &self.new_values
    }

    pub fn is_modified(&self) -> bool {
        self.change_type == Some(ChangeType::Modified)
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source_field, self.target_field)
    }
}
