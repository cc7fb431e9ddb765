//! Configuration presets.
//!
//! - **Strict**: tight matching thresholds, low impact thresholds
//! - **Balanced**: the defaults
//! - **Lenient**: loose matching, high impact thresholds

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::settings::{MatchingConfig, SttmConfig};
use super::scoring::ImpactScoringConfig;
use crate::errors::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetLevel {
    Strict,
    Balanced,
    Lenient,
}

impl PresetLevel {
    pub const ALL: [PresetLevel; 3] = [
        PresetLevel::Strict,
        PresetLevel::Balanced,
        PresetLevel::Lenient,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PresetLevel::Strict => "strict",
            PresetLevel::Balanced => "balanced",
            PresetLevel::Lenient => "lenient",
        }
    }

    pub fn to_config(self) -> SttmConfig {
        SttmConfig {
            matching: self.matching(),
            impact_scoring: self.impact_scoring(),
            ..SttmConfig::default()
        }
    }

    pub fn matching(self) -> MatchingConfig {
        match self {
            PresetLevel::Strict => MatchingConfig {
                tab_name_threshold: 0.9,
                field_name_threshold: 0.85,
                content_matching_threshold: 0.8,
                case_sensitive_tab_matching: true,
                ..MatchingConfig::default()
            },
            PresetLevel::Balanced => MatchingConfig::default(),
            PresetLevel::Lenient => MatchingConfig {
                tab_name_threshold: 0.6,
                field_name_threshold: 0.5,
                content_matching_threshold: 0.4,
                ..MatchingConfig::default()
            },
        }
    }

    pub fn impact_scoring(self) -> ImpactScoringConfig {
        match self {
            PresetLevel::Strict => ImpactScoringConfig {
                high_impact_threshold: 6.0,
                medium_impact_threshold: 3.0,
                ..ImpactScoringConfig::default()
            },
            PresetLevel::Balanced => ImpactScoringConfig::default(),
            PresetLevel::Lenient => ImpactScoringConfig {
                high_impact_threshold: 10.0,
                medium_impact_threshold: 6.0,
                ..ImpactScoringConfig::default()
            },
        }
    }
}

impl FromStr for PresetLevel {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| {
                let available: Vec<&str> = Self::ALL.iter().map(|p| p.name()).collect();
                Error::Config(format!(
                    "Unknown preset '{}'. Available presets: {}",
                    name,
                    available.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_is_default() {
        assert_eq!(PresetLevel::Balanced.to_config(), SttmConfig::default());
    }

    #[test]
    fn test_strict_preset() {
        let config = PresetLevel::Strict.to_config();
        assert_eq!(config.matching.tab_name_threshold, 0.9);
        assert!(config.matching.case_sensitive_tab_matching);
        assert!(!config.matching.case_sensitive_field_matching);
        assert_eq!(config.impact_scoring.high_impact_threshold, 6.0);
        assert_eq!(config.impact_scoring.deleted_mapping_weight, 10.0);
    }

    #[test]
    fn test_every_preset_validates() {
        for preset in PresetLevel::ALL {
            assert!(preset.to_config().validate().is_ok(), "{}", preset.name());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("lenient".parse::<PresetLevel>().unwrap(), PresetLevel::Lenient);

        let err = "aggressive".parse::<PresetLevel>().unwrap_err();
        assert!(err.to_string().contains("Unknown preset 'aggressive'"));
        assert!(err.to_string().contains("strict, balanced, lenient"));
    }
}
