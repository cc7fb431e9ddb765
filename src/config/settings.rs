use serde::{Deserialize, Serialize};

use super::scoring::ImpactScoringConfig;

/// Root configuration for sttm-impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SttmConfig {
    pub log_level: String,
    pub output_directory: String,
    pub temp_directory: String,

    pub parallel_processing: bool,
    pub max_workers: usize,

    // Tables last so the TOML rendering stays valid
    pub matching: MatchingConfig,
    pub impact_scoring: ImpactScoringConfig,
    pub parsing: ParsingConfig,
    pub reporting: ReportConfig,
}

impl Default for SttmConfig {
    fn default() -> Self {
        Self {
            matching: MatchingConfig::default(),
            impact_scoring: ImpactScoringConfig::default(),
            parsing: ParsingConfig::default(),
            reporting: ReportConfig::default(),
            log_level: "INFO".to_string(),
            output_directory: "./output".to_string(),
            temp_directory: "./temp".to_string(),
            parallel_processing: false,
            max_workers: 4,
        }
    }
}

impl SttmConfig {
    /// Validate every section, reporting all problems at once
    pub fn validate(&self) -> Result<(), String> {
        let mut errors: Vec<String> = [
            self.matching.validate(),
            self.impact_scoring.validate(),
            self.parsing.validate(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if self.max_workers == 0 {
            errors.push("max_workers must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("; "))
        }
    }
}

/// Tab and field matching between mapping changes and test cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Fuzzy similarity (0.0-1.0) required to match tab names
    pub tab_name_threshold: f64,
    /// Fuzzy similarity (0.0-1.0) required to match field names
    pub field_name_threshold: f64,
    pub content_matching_threshold: f64,

    pub case_sensitive_tab_matching: bool,
    pub case_sensitive_field_matching: bool,

    pub use_fuzzy_matching: bool,
    pub use_keyword_extraction: bool,
    pub use_partial_matching: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            tab_name_threshold: 0.8,
            field_name_threshold: 0.7,
            content_matching_threshold: 0.6,
            case_sensitive_tab_matching: false,
            case_sensitive_field_matching: false,
            use_fuzzy_matching: true,
            use_keyword_extraction: true,
            use_partial_matching: true,
        }
    }
}

impl MatchingConfig {
    pub fn validate(&self) -> Result<(), String> {
        [
            (self.tab_name_threshold, "tab_name_threshold"),
            (self.field_name_threshold, "field_name_threshold"),
            (self.content_matching_threshold, "content_matching_threshold"),
        ]
        .into_iter()
        .try_for_each(|(value, name)| validate_ratio(value, name))
    }
}

/// Input file parsing behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    pub skip_empty_rows: bool,
    pub trim_whitespace: bool,
    pub case_insensitive_columns: bool,

    /// Confidence (0.0-1.0) required before a detected test ID pattern is used
    pub min_confidence_for_pattern: f64,
    pub max_sample_ids_for_analysis: usize,

    pub continue_on_parsing_errors: bool,
    pub log_parsing_warnings: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            skip_empty_rows: true,
            trim_whitespace: true,
            case_insensitive_columns: true,
            min_confidence_for_pattern: 0.7,
            max_sample_ids_for_analysis: 50,
            continue_on_parsing_errors: true,
            log_parsing_warnings: true,
        }
    }
}

impl ParsingConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_ratio(self.min_confidence_for_pattern, "min_confidence_for_pattern")
    }
}

/// Report generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub generate_json: bool,
    pub generate_html: bool,
    pub generate_markdown: bool,
    pub generate_excel: bool,

    pub include_executive_summary: bool,
    pub include_detailed_analysis: bool,
    pub include_new_test_generation: bool,
    pub include_gap_analysis: bool,

    pub max_description_length: usize,
    pub show_confidence_scores: bool,
    pub group_by_impact_level: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            generate_json: true,
            generate_html: false,
            generate_markdown: false,
            generate_excel: false,
            include_executive_summary: true,
            include_detailed_analysis: true,
            include_new_test_generation: true,
            include_gap_analysis: true,
            max_description_length: 500,
            show_confidence_scores: true,
            group_by_impact_level: true,
        }
    }
}

// Pure function: Check a ratio lies in [0.0, 1.0]
fn validate_ratio(value: f64, name: &str) -> Result<(), String> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} must be between 0.0 and 1.0, got {}", name, value))
    }
}
