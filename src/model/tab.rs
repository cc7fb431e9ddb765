use super::mapping::Mapping;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tab-level change category as declared by the report producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabChangeCategory {
    Mixed,
    ModificationsOnly,
    AdditionsOnly,
    DeletionsOnly,
    Unchanged,
}

impl TabChangeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabChangeCategory::Mixed => "mixed",
            TabChangeCategory::ModificationsOnly => "modifications_only",
            TabChangeCategory::AdditionsOnly => "additions_only",
            TabChangeCategory::DeletionsOnly => "deletions_only",
            TabChangeCategory::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for TabChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named section of the mapping document with its categorized mappings.
///
/// The four mapping lists are disjoint. [`Tab::all_mappings`] always yields
/// them in added, deleted, modified, unchanged order. The change category is
/// whatever the report declared; it is not recomputed from the lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    name: String,
    change_category: TabChangeCategory,
    #[serde(rename = "added_mappings")]
    added: Vec<Mapping>,
    #[serde(rename = "deleted_mappings")]
    deleted: Vec<Mapping>,
    #[serde(rename = "modified_mappings")]
    modified: Vec<Mapping>,
    #[serde(rename = "unchanged_mappings")]
    unchanged: Vec<Mapping>,
}

impl Tab {
    pub fn new(name: impl Into<String>, change_category: TabChangeCategory) -> Self {
        Self {
            name: name.into(),
            change_category,
            added: Vec::new(),
            deleted: Vec::new(),
            modified: Vec::new(),
            unchanged: Vec::new(),
        }
    }

    pub fn with_added(mut self, mappings: Vec<Mapping>) -> Self {
        self.added = mappings;
        self
    }

    pub fn with_deleted(mut self, mappings: Vec<Mapping>) -> Self {
        self.deleted = mappings;
        self
    }

    pub fn with_modified(mut self, mappings: Vec<Mapping>) -> Self {
        self.modified = mappings;
        self
    }

    pub fn with_unchanged(mut self, mappings: Vec<Mapping>) -> Self {
        self.unchanged = mappings;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn change_category(&self) -> TabChangeCategory {
        self.change_category
    }

    pub fn added_mappings(&self) -> &[Mapping] {
        &self.added
    }

    pub fn deleted_mappings(&self) -> &[Mapping] {
        &self.deleted
    }

    pub fn modified_mappings(&self) -> &[Mapping] {
        &self.modified
    }

    pub fn unchanged_mappings(&self) -> &[Mapping] {
        &self.unchanged
    }

    /// Every mapping of the tab: added, then deleted, modified, unchanged
    pub fn all_mappings(&self) -> impl Iterator<Item = &Mapping> + '_ {
        self.added
            .iter()
            .chain(&self.deleted)
            .chain(&self.modified)
            .chain(&self.unchanged)
    }

    pub fn mapping_count(&self) -> usize {
        self.added.len() + self.deleted.len() + self.modified.len() + self.unchanged.len()
    }

    /// Added + deleted + modified mappings
    pub fn total_changes(&self) -> usize {
        self.added.len() + self.deleted.len() + self.modified.len()
    }

    pub fn has_changes(&self) -> bool {
        self.total_changes() > 0
    }

    /// Human-readable change summary, e.g. `"2 added, 1 modified"`
    pub fn change_summary(&self) -> String {
        let parts: Vec<String> = [
            (self.added.len(), "added"),
            (self.deleted.len(), "deleted"),
            (self.modified.len(), "modified"),
        ]
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{} {}", count, label))
        .collect();

        if parts.is_empty() {
            "no changes".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
