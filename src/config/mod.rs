//! Configuration for sttm-impact.
//!
//! Matching, scoring and reporting settings are carried here for the
//! analysis stages that consume a parsed report. Files are TOML by default,
//! or JSON when the path ends in `.json`.

mod settings;
mod loader;
pub mod presets;
mod scoring;

pub use settings::{MatchingConfig, ParsingConfig, ReportConfig, SttmConfig};

pub use scoring::{
    default_added_mapping_weight, default_canonical_name_change_weight,
    default_deleted_mapping_weight, default_field_name_change_weight,
    default_high_confidence_multiplier, default_high_impact_threshold,
    default_low_confidence_multiplier, default_medium_confidence_multiplier,
    default_medium_impact_threshold, default_modified_mapping_weight,
    default_sample_data_change_weight, ImpactScoringConfig,
};

pub use loader::{
    load_config, load_config_from_path, parse_and_validate_config, render_config,
    save_default_config, ConfigFormat, DEFAULT_CONFIG_FILE,
};

pub use presets::PresetLevel;
