//! Impact scoring configuration.
//!
//! Only the configuration surface exists for now; the scoring stage that
//! consumes these weights operates on a parsed [`Document`](crate::model::Document).

use serde::{Deserialize, Serialize};

/// Weights and thresholds for scoring the impact of mapping changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactScoringConfig {
    /// Weight of a deleted mapping
    #[serde(default = "default_deleted_mapping_weight")]
    pub deleted_mapping_weight: f64,

    /// Weight of a modified mapping
    #[serde(default = "default_modified_mapping_weight")]
    pub modified_mapping_weight: f64,

    /// Weight of an added mapping
    #[serde(default = "default_added_mapping_weight")]
    pub added_mapping_weight: f64,

    #[serde(default = "default_sample_data_change_weight")]
    pub sample_data_change_weight: f64,

    #[serde(default = "default_canonical_name_change_weight")]
    pub canonical_name_change_weight: f64,

    #[serde(default = "default_field_name_change_weight")]
    pub field_name_change_weight: f64,

    #[serde(default = "default_high_confidence_multiplier")]
    pub high_confidence_multiplier: f64,

    #[serde(default = "default_medium_confidence_multiplier")]
    pub medium_confidence_multiplier: f64,

    #[serde(default = "default_low_confidence_multiplier")]
    pub low_confidence_multiplier: f64,

    /// Scores at or above this are high impact
    #[serde(default = "default_high_impact_threshold")]
    pub high_impact_threshold: f64,

    /// Scores at or above this (and below high) are medium impact
    #[serde(default = "default_medium_impact_threshold")]
    pub medium_impact_threshold: f64,
}

impl Default for ImpactScoringConfig {
    fn default() -> Self {
        Self {
            deleted_mapping_weight: default_deleted_mapping_weight(),
            modified_mapping_weight: default_modified_mapping_weight(),
            added_mapping_weight: default_added_mapping_weight(),
            sample_data_change_weight: default_sample_data_change_weight(),
            canonical_name_change_weight: default_canonical_name_change_weight(),
            field_name_change_weight: default_field_name_change_weight(),
            high_confidence_multiplier: default_high_confidence_multiplier(),
            medium_confidence_multiplier: default_medium_confidence_multiplier(),
            low_confidence_multiplier: default_low_confidence_multiplier(),
            high_impact_threshold: default_high_impact_threshold(),
            medium_impact_threshold: default_medium_impact_threshold(),
        }
    }
}

impl ImpactScoringConfig {
    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if weight.is_finite() && weight >= 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a non-negative number", name))
        }
    }

    // Pure function: Collect all weight validations
    pub fn collect_weight_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_weight(self.deleted_mapping_weight, "deleted_mapping_weight"),
            Self::validate_weight(self.modified_mapping_weight, "modified_mapping_weight"),
            Self::validate_weight(self.added_mapping_weight, "added_mapping_weight"),
            Self::validate_weight(self.sample_data_change_weight, "sample_data_change_weight"),
            Self::validate_weight(
                self.canonical_name_change_weight,
                "canonical_name_change_weight",
            ),
            Self::validate_weight(self.field_name_change_weight, "field_name_change_weight"),
            Self::validate_weight(self.high_confidence_multiplier, "high_confidence_multiplier"),
            Self::validate_weight(
                self.medium_confidence_multiplier,
                "medium_confidence_multiplier",
            ),
            Self::validate_weight(self.low_confidence_multiplier, "low_confidence_multiplier"),
            Self::validate_weight(self.high_impact_threshold, "high_impact_threshold"),
            Self::validate_weight(self.medium_impact_threshold, "medium_impact_threshold"),
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_weight_validations() {
            validation?;
        }

        if self.medium_impact_threshold > self.high_impact_threshold {
            return Err(format!(
                "medium_impact_threshold ({}) must not exceed high_impact_threshold ({})",
                self.medium_impact_threshold, self.high_impact_threshold
            ));
        }

        Ok(())
    }
}

pub fn default_deleted_mapping_weight() -> f64 {
    10.0 // deletions break existing tests outright
}
pub fn default_modified_mapping_weight() -> f64 {
    5.0
}
pub fn default_added_mapping_weight() -> f64 {
    3.0
}
pub fn default_sample_data_change_weight() -> f64 {
    8.0
}
pub fn default_canonical_name_change_weight() -> f64 {
    6.0
}
pub fn default_field_name_change_weight() -> f64 {
    4.0
}
pub fn default_high_confidence_multiplier() -> f64 {
    1.2
}
pub fn default_medium_confidence_multiplier() -> f64 {
    1.0
}
pub fn default_low_confidence_multiplier() -> f64 {
    0.8
}
pub fn default_high_impact_threshold() -> f64 {
    8.0
}
pub fn default_medium_impact_threshold() -> f64 {
    4.0
}
