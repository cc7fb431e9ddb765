use super::mapping::Mapping;
use super::tab::{Tab, TabChangeCategory};
use serde::{Deserialize, Serialize};

/// A complete parsed STTM difference report.
///
/// Totals are computed once from the tab lists when the document is built,
/// so they always agree with the per-tab data:
/// - `total_tabs` = changed + unchanged tab count
/// - `total_mappings` = every mapping of every tab
/// - `total_changes` = added + deleted + modified over changed tabs only
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    changed_tabs: Vec<Tab>,
    unchanged_tabs: Vec<Tab>,
    total_tabs: usize,
    total_mappings: usize,
    total_changes: usize,
}

impl Document {
    pub fn new(changed_tabs: Vec<Tab>, unchanged_tabs: Vec<Tab>) -> Self {
        let total_tabs = changed_tabs.len() + unchanged_tabs.len();
        let total_mappings = changed_tabs
            .iter()
            .chain(&unchanged_tabs)
            .map(Tab::mapping_count)
            .sum();
        let total_changes = changed_tabs.iter().map(Tab::total_changes).sum();

        Self {
            changed_tabs,
            unchanged_tabs,
            total_tabs,
            total_mappings,
            total_changes,
        }
    }

    pub fn changed_tabs(&self) -> &[Tab] {
        &self.changed_tabs
    }

    pub fn unchanged_tabs(&self) -> &[Tab] {
        &self.unchanged_tabs
    }

    pub fn total_tabs(&self) -> usize {
        self.total_tabs
    }

    pub fn total_mappings(&self) -> usize {
        self.total_mappings
    }

    pub fn total_changes(&self) -> usize {
        self.total_changes
    }

    /// Changed tabs followed by unchanged tabs
    pub fn all_tabs(&self) -> impl Iterator<Item = &Tab> + '_ {
        self.changed_tabs.iter().chain(&self.unchanged_tabs)
    }

    /// Find a tab by name, ignoring case
    pub fn tab_by_name(&self, name: &str) -> Option<&Tab> {
        self.all_tabs().find(|tab| tab.is_named(name))
    }

    /// Changed tabs that actually carry added, deleted or modified mappings
    pub fn tabs_with_changes(&self) -> Vec<&Tab> {
        self.changed_tabs
            .iter()
            .filter(|tab| tab.has_changes())
            .collect()
    }

    /// Added, deleted and modified mappings of every changed tab, in tab order
    pub fn all_changed_mappings(&self) -> Vec<&Mapping> {
        self.changed_tabs
            .iter()
            .flat_map(|tab| {
                tab.added_mappings()
                    .iter()
                    .chain(tab.deleted_mappings())
                    .chain(tab.modified_mappings())
            })
            .collect()
    }

    pub fn summary(&self) -> DocumentSummary {
        let count_category = |category: TabChangeCategory| {
            self.changed_tabs
                .iter()
                .filter(|tab| tab.change_category() == category)
                .count()
        };

        DocumentSummary {
            total_tabs: self.total_tabs,
            changed_tabs: self.changed_tabs.len(),
            unchanged_tabs: self.unchanged_tabs.len(),
            total_changes: self.total_changes,
            tabs_by_change_type: TabsByChangeType {
                additions_only: count_category(TabChangeCategory::AdditionsOnly),
                deletions_only: count_category(TabChangeCategory::DeletionsOnly),
                modifications_only: count_category(TabChangeCategory::ModificationsOnly),
                mixed: count_category(TabChangeCategory::Mixed),
            },
        }
    }
}

/// Aggregate view of a [`Document`] handed to reporting collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub total_tabs: usize,
    pub changed_tabs: usize,
    pub unchanged_tabs: usize,
    pub total_changes: usize,
    pub tabs_by_change_type: TabsByChangeType,
}

/// Changed-tab counts per declared category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsByChangeType {
    pub additions_only: usize,
    pub deletions_only: usize,
    pub modifications_only: usize,
    pub mixed: usize,
}
