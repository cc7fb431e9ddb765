//! Result reports for the command line: a serializable [`ParseReport`] and
//! its summary, detailed and JSON renderings.

use crate::model::{Document, DocumentSummary, Tab};
use clap::ValueEnum;
use serde::Serialize;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Summary,
    Detailed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReport {
    pub success: bool,
    pub file_type: &'static str,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DocumentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ReportDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_details: Option<Vec<TabDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDetails {
    pub changed_tabs: Vec<String>,
    pub unchanged_tabs: Vec<String>,
    pub tabs_with_changes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabDetail {
    pub name: String,
    pub change_category: String,
    pub change_summary: String,
    pub mappings: MappingCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MappingCounts {
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
}

impl TabDetail {
    fn from_tab(tab: &Tab) -> Self {
        Self {
            name: tab.name().to_string(),
            change_category: tab.change_category().to_string(),
            change_summary: tab.change_summary(),
            mappings: MappingCounts {
                added: tab.added_mappings().len(),
                deleted: tab.deleted_mappings().len(),
                modified: tab.modified_mappings().len(),
            },
        }
    }
}

impl ParseReport {
    pub fn from_document(
        file_path: impl Into<String>,
        document: &Document,
        detailed: bool,
    ) -> Self {
        let names = |tabs: &[Tab]| -> Vec<String> {
            tabs.iter().map(|t| t.name().to_string()).collect()
        };
        let tabs_with_changes = document.tabs_with_changes();

        Self {
            success: true,
            file_type: "STTM",
            file_path: file_path.into(),
            summary: Some(document.summary()),
            details: Some(ReportDetails {
                changed_tabs: names(document.changed_tabs()),
                unchanged_tabs: names(document.unchanged_tabs()),
                tabs_with_changes: tabs_with_changes
                    .iter()
                    .map(|t| t.name().to_string())
                    .collect(),
            }),
            tab_details: detailed.then(|| {
                tabs_with_changes
                    .iter()
                    .map(|tab| TabDetail::from_tab(tab))
                    .collect()
            }),
            error: None,
        }
    }

    pub fn failure(file_path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            file_type: "STTM",
            file_path: file_path.into(),
            summary: None,
            details: None,
            tab_details: None,
            error: Some(error.into()),
        }
    }
}

pub fn render(report: &ParseReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Summary => Ok(format_summary(report)),
        OutputFormat::Detailed => Ok(format_detailed(report)),
    }
}

pub fn format_summary(report: &ParseReport) -> String {
    let (Some(summary), true) = (report.summary.as_ref(), report.success) else {
        return format!(
            "PARSING FAILED: {}",
            report.error.as_deref().unwrap_or("unknown error")
        );
    };

    let mut lines = vec![
        "STTM PARSING RESULTS:".to_string(),
        format!("  - Total tabs: {}", summary.total_tabs),
        format!("  - Changed tabs: {}", summary.changed_tabs),
        format!("  - Unchanged tabs: {}", summary.unchanged_tabs),
        format!("  - Total changes: {}", summary.total_changes),
    ];

    if let Some(details) = &report.details {
        lines.push(String::new());
        lines.push("Changed Tabs:".to_string());
        lines.extend(
            details
                .tabs_with_changes
                .iter()
                .map(|name| format!("  - {}", name)),
        );
    }

    lines.join("\n")
}

pub fn format_detailed(report: &ParseReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        format_summary(report),
        String::new(),
        rule.clone(),
        "DETAILED INFORMATION:".to_string(),
        rule,
    ];

    if let Some(tabs) = &report.tab_details {
        lines.push(String::new());
        lines.push("Tab Details:".to_string());
        for tab in tabs {
            lines.push(format!("  {}:", tab.name));
            lines.push(format!("    Category: {}", tab.change_category));
            lines.push(format!("    Changes: {}", tab.change_summary));
        }
    }

    lines.join("\n")
}
