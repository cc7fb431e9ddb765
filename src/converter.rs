//! Conversion of raw adapter output into the domain model.

use crate::adapter::{RawMapping, RawTab};
use crate::model::{ChangeType, Document, Mapping, Tab, TabChangeCategory};
use tracing::debug;

/// Raw tab tag that routes a tab into the document's unchanged list
const UNCHANGED_TAG: &str = "unchanged";

static CHANGE_CATEGORY_TABLE: &[(&str, TabChangeCategory)] = &[
    ("mixed", TabChangeCategory::Mixed),
    ("modifications_only", TabChangeCategory::ModificationsOnly),
    ("additions_only", TabChangeCategory::AdditionsOnly),
    ("deletions_only", TabChangeCategory::DeletionsOnly),
    ("unchanged", TabChangeCategory::Unchanged),
];

/// Map a raw tab tag to its category; unknown tags are `Unchanged`
pub fn change_category(tag: &str) -> TabChangeCategory {
    CHANGE_CATEGORY_TABLE
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, category)| *category)
        .unwrap_or_else(|| {
            debug!("Unrecognized tab change type {:?}, treating as unchanged", tag);
            TabChangeCategory::Unchanged
        })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DomainConverter;

impl DomainConverter {
    pub fn new() -> Self {
        Self
    }

    /// Build a [`Document`] from raw tabs.
    ///
    /// A tab lands in the unchanged list only when its raw tag is exactly
    /// `"unchanged"`; its mapping lists and mapped category play no part in
    /// the placement. Totals are computed by [`Document::new`] once every tab
    /// is built.
    pub fn convert(&self, raw_tabs: Vec<RawTab>) -> Document {
        let (unchanged, changed): (Vec<RawTab>, Vec<RawTab>) = raw_tabs
            .into_iter()
            .partition(|raw| raw.change_type == UNCHANGED_TAG);

        let document = Document::new(
            changed.into_iter().map(|raw| self.convert_tab(raw)).collect(),
            unchanged.into_iter().map(|raw| self.convert_tab(raw)).collect(),
        );

        debug!(
            total_tabs = document.total_tabs(),
            total_mappings = document.total_mappings(),
            total_changes = document.total_changes(),
            "Converted raw tabs to document"
        );
        document
    }

    fn convert_tab(&self, raw: RawTab) -> Tab {
        let classify = |mappings: Vec<RawMapping>, change_type: ChangeType| -> Vec<Mapping> {
            mappings
                .into_iter()
                .map(|raw| convert_mapping(raw, change_type))
                .collect()
        };

        Tab::new(raw.name, change_category(&raw.change_type))
            .with_added(classify(raw.added_mappings, ChangeType::Added))
            .with_deleted(classify(raw.deleted_mappings, ChangeType::Deleted))
            .with_modified(classify(raw.modified_mappings, ChangeType::Modified))
            .with_unchanged(classify(raw.unchanged_mappings, ChangeType::Unchanged))
    }
}

/// Diff detail is kept for modified mappings only; a modified record without
/// any detail gets empty field lists.
fn convert_mapping(raw: RawMapping, change_type: ChangeType) -> Mapping {
    let mapping = Mapping::new(raw.source_field, raw.target_field)
        .with_canonical_name(raw.canonical_name)
        .with_sample_data(raw.sample_data);

    match change_type {
        ChangeType::Modified => mapping.with_diff(raw.diff.unwrap_or_default()),
        other => mapping.classified(other),
    }
}
