//! Format-agnostic records produced by adapters.
//!
//! No business rules apply here: change types are plain text tags and every
//! absent piece of data is an empty string, `None` or an empty list.

use crate::model::FieldDiff;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMapping {
    pub source_field: String,
    pub target_field: String,
    pub canonical_name: Option<String>,
    pub sample_data: Option<String>,
    /// Unvalidated change tag, e.g. `"added"`
    pub change_type: Option<String>,
    /// Only populated for modified records
    pub diff: Option<FieldDiff>,
}

impl RawMapping {
    pub fn new(source_field: impl Into<String>, target_field: impl Into<String>) -> Self {
        Self {
            source_field: source_field.into(),
            target_field: target_field.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTab {
    pub name: String,
    /// Unvalidated change tag, e.g. `"mixed"` or `"unchanged"`
    pub change_type: String,
    pub source_system: Option<String>,
    pub target_system: Option<String>,
    pub added_mappings: Vec<RawMapping>,
    pub deleted_mappings: Vec<RawMapping>,
    pub modified_mappings: Vec<RawMapping>,
    pub unchanged_mappings: Vec<RawMapping>,
}

impl RawTab {
    pub fn new(name: impl Into<String>, change_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            change_type: change_type.into(),
            ..Default::default()
        }
    }

    pub fn mapping_count(&self) -> usize {
        self.added_mappings.len()
            + self.deleted_mappings.len()
            + self.modified_mappings.len()
            + self.unchanged_mappings.len()
    }
}
