mod common;

use common::{customer_orders_report, legacy_report, single_tab_report, write_report};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sttm_impact::{
    parse_sttm_file, AdapterSelector, ChangeType, Error, FormatAdapter, SttmParser,
    TabChangeCategory,
};

#[test]
fn test_customer_orders_report_end_to_end() {
    let (_dir, path) = write_report(&customer_orders_report());
    let document = parse_sttm_file(&path).unwrap();

    assert_eq!(document.total_tabs(), 2);
    assert_eq!(document.changed_tabs().len(), 1);
    assert_eq!(document.unchanged_tabs().len(), 1);
    assert_eq!(document.total_changes(), 2);
    assert_eq!(document.total_mappings(), 2);

    let customer = document.tab_by_name("customer").unwrap();
    assert_eq!(customer.change_category(), TabChangeCategory::Mixed);
    assert_eq!(customer.added_mappings()[0].source_field(), "cust_id");
    assert_eq!(customer.added_mappings()[0].target_field(), "id");
    assert_eq!(customer.added_mappings()[0].change_type(), Some(ChangeType::Added));
    assert_eq!(customer.deleted_mappings()[0].source_field(), "cust_name");
    assert_eq!(customer.deleted_mappings()[0].change_type(), Some(ChangeType::Deleted));
    assert_eq!(customer.change_summary(), "1 added, 1 deleted");

    let orders = &document.unchanged_tabs()[0];
    assert_eq!(orders.name(), "Orders");
    assert_eq!(orders.change_category(), TabChangeCategory::Unchanged);
    assert_eq!(orders.mapping_count(), 0);

    let summary = document.summary();
    assert_eq!(summary.tabs_by_change_type.mixed, 1);
    assert_eq!(summary.tabs_by_change_type.additions_only, 0);
}

#[test]
fn test_modified_mapping_takes_sample_data_from_field_changes() {
    let report = single_tab_report(json!({
        "tab_name": "Customer",
        "change_type": "modifications_only",
        "mappings": {
            "modified_mappings": [{
                "mapping_fields": {
                    "source_field": "cust_id",
                    "target_field": "id",
                    "source_sample_data": "A"
                },
                "field_changes": {
                    "source_sample_data": {"old_value": "A", "new_value": "B"},
                    "Canonical Name": {"old_value": "Customer ID", "new_value": "Customer Key"}
                }
            }]
        }
    }));

    let document = SttmParser::new().parse_value(&report).unwrap();
    let mapping = &document.changed_tabs()[0].modified_mappings()[0];

    assert_eq!(mapping.sample_data(), Some("B"));
    assert_eq!(mapping.change_type(), Some(ChangeType::Modified));
    assert_eq!(
        mapping.modified_fields(),
        &["source_sample_data".to_string(), "Canonical Name".to_string()]
    );
    assert_eq!(mapping.original_values()["source_sample_data"], json!("A"));
    assert_eq!(mapping.new_values()["Canonical Name"], json!("Customer Key"));
}

#[test]
fn test_display_keys_take_priority_over_snake_case() {
    let report = single_tab_report(json!({
        "tab_name": "Customer",
        "change_type": "additions_only",
        "mappings": {
            "added_mappings": [{
                "mapping_fields": {
                    "Source Field": "CUST_ID",
                    "source_field": "cust_id",
                    "Target Field": "",
                    "target_field": "id",
                    "canonical_name": "Customer Identifier"
                }
            }]
        }
    }));

    let document = SttmParser::new().parse_value(&report).unwrap();
    let mapping = &document.changed_tabs()[0].added_mappings()[0];

    assert_eq!(mapping.source_field(), "CUST_ID");
    assert_eq!(mapping.target_field(), "id");
    assert_eq!(mapping.canonical_name(), Some("Customer Identifier"));
}

#[test]
fn test_blank_tab_tag_keeps_tab_in_changed_list() {
    let report = single_tab_report(json!({
        "tab_name": "Customer",
        "change_type": "",
        "mappings": {
            "added_mappings": [
                {"mapping_fields": {"source_field": "cust_id", "target_field": "id"}}
            ]
        }
    }));

    let document = SttmParser::new().parse_value(&report).unwrap();

    assert_eq!(document.changed_tabs().len(), 1);
    assert!(document.unchanged_tabs().is_empty());
    assert_eq!(document.total_changes(), 1);
    assert_eq!(
        document.changed_tabs()[0].change_category(),
        TabChangeCategory::Unchanged
    );
}

#[test]
fn test_legacy_report_yields_tabs_without_mappings() {
    let document = SttmParser::new().parse_value(&legacy_report()).unwrap();

    assert_eq!(document.total_tabs(), 3);
    assert_eq!(document.total_mappings(), 0);
    assert_eq!(document.total_changes(), 0);
    assert_eq!(
        document.tab_by_name("Customer").unwrap().change_category(),
        TabChangeCategory::AdditionsOnly
    );
    assert_eq!(document.unchanged_tabs()[0].name(), "Orders");
}

#[test]
fn test_unrecognized_shape_falls_back_to_current_adapter() {
    let document = SttmParser::new()
        .parse_value(&json!({"something": "else"}))
        .unwrap();
    assert_eq!(document.total_tabs(), 0);

    let selector = AdapterSelector::new();
    let unknown = json!({"something": "else"});
    assert_eq!(
        selector.select(&unknown).format_version(),
        "Excel Comparison Tool v2.0"
    );
}

#[test]
fn test_fallback_selection_is_idempotent() {
    let selector = AdapterSelector::new();
    let document = json!([1, 2, 3]);
    let first = selector.select(&document).format_version().to_string();
    let second = selector.select(&document).format_version().to_string();
    assert_eq!(first, second);
}

#[test]
fn test_non_object_root_is_rejected() {
    let err = SttmParser::new().parse_str("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, Error::NotAnObject { found: "array" }));
}

#[test]
fn test_missing_file_reports_path() {
    let err = parse_sttm_file(std::path::Path::new("/nonexistent/sttm_diff.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/sttm_diff.json"));
}

#[test]
fn test_invalid_json_is_reported() {
    let err = SttmParser::new().parse_str("{not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

struct EverythingAdapter;

impl FormatAdapter for EverythingAdapter {
    fn validate(&self, _document: &Value) -> bool {
        true
    }

    fn extract(&self, _document: &Value) -> Vec<sttm_impact::RawTab> {
        vec![sttm_impact::RawTab::new("Injected", "deletions_only")]
    }

    fn format_version(&self) -> &str {
        "Everything v0"
    }
}

#[test]
fn test_registered_adapter_is_consulted_first() {
    let mut parser = SttmParser::new();
    parser.register_adapter(Box::new(EverythingAdapter));

    let document = parser.parse_value(&customer_orders_report()).unwrap();
    assert_eq!(document.total_tabs(), 1);
    assert_eq!(document.changed_tabs()[0].name(), "Injected");
    assert_eq!(
        document.changed_tabs()[0].change_category(),
        TabChangeCategory::DeletionsOnly
    );
}
