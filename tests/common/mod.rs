// Test utility module for sttm-impact integration tests
#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Report in the current layout: `Customer` is mixed with one addition and
/// one deletion, `Orders` is unchanged.
pub fn customer_orders_report() -> Value {
    json!({
        "report_metadata": {"generated_by": "Excel Comparison Tool v2.0"},
        "detailed_changes": {
            "changed_tabs": [{
                "tab_name": "Customer",
                "change_type": "mixed",
                "source_system": "CRM",
                "target_system": "Warehouse",
                "mappings": {
                    "added_mappings": [
                        {"mapping_fields": {"source_field": "cust_id", "target_field": "id"}}
                    ],
                    "deleted_mappings": [
                        {"mapping_fields": {"source_field": "cust_name", "target_field": "name"}}
                    ]
                }
            }],
            "unchanged_tabs": [{"tab_name": "Orders"}]
        }
    })
}

/// Report in the legacy layout with tab names only
pub fn legacy_report() -> Value {
    json!({
        "changed_tabs": {
            "Customer": {"type": "additions_only"},
            "Accounts": {"type": "deletions_only"}
        },
        "unchanged_tabs": {"Orders": {}}
    })
}

/// Current-layout report holding a single changed tab
pub fn single_tab_report(tab: Value) -> Value {
    json!({
        "report_metadata": {},
        "detailed_changes": {"changed_tabs": [tab], "unchanged_tabs": []}
    })
}

/// Writes `report` into a fresh temp dir; keep the dir alive while the file is used
pub fn write_report(report: &Value) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("sttm_diff.json");
    fs::write(&path, serde_json::to_string_pretty(report).expect("Failed to serialize"))
        .expect("Failed to write report");
    (dir, path)
}
