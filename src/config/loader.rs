use std::fs;
use std::path::Path;

use super::settings::SttmConfig;
use crate::errors::{Error, Result};

/// Default file written by `sttm-impact init`
pub const DEFAULT_CONFIG_FILE: &str = "sttm_config.toml";

/// On-disk encoding, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Pure function to parse and validate config contents
pub fn parse_and_validate_config(
    contents: &str,
    format: ConfigFormat,
) -> std::result::Result<SttmConfig, String> {
    let config = match format {
        ConfigFormat::Toml => toml::from_str::<SttmConfig>(contents).map_err(|e| e.to_string())?,
        ConfigFormat::Json => {
            serde_json::from_str::<SttmConfig>(contents).map_err(|e| e.to_string())?
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load and validate a configuration file
pub fn load_config_from_path(path: &Path) -> Result<SttmConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_and_validate_config(&contents, ConfigFormat::from_path(path))
        .map_err(|message| Error::config_parse(path, message))
}

/// Load configuration, falling back to defaults.
///
/// A missing, unreadable or invalid file is logged and replaced by
/// [`SttmConfig::default`].
pub fn load_config(path: Option<&Path>) -> SttmConfig {
    let Some(path) = path else {
        return SttmConfig::default();
    };

    if !path.exists() {
        tracing::warn!(
            "Config file {} not found. Using default configuration.",
            path.display()
        );
        return SttmConfig::default();
    }

    match load_config_from_path(path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("{}. Using default configuration.", e);
            SttmConfig::default()
        }
    }
}

/// Render a configuration in the format implied by `path`
pub fn render_config(config: &SttmConfig, format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Toml => toml::to_string_pretty(config)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e))),
        ConfigFormat::Json => Ok(serde_json::to_string_pretty(config)?),
    }
}

/// Write the default configuration for customization
pub fn save_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "Configuration file {} already exists. Use --force to overwrite.",
            path.display()
        )));
    }

    let contents = render_config(&SttmConfig::default(), ConfigFormat::from_path(path))?;
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    tracing::info!("Default configuration saved to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let contents = indoc! {r#"
            log_level = "DEBUG"

            [matching]
            tab_name_threshold = 0.95

            [impact_scoring]
            added_mapping_weight = 2.5
        "#};

        let config = parse_and_validate_config(contents, ConfigFormat::Toml).unwrap();
        assert_eq!(config.log_level, "DEBUG");
        assert_eq!(config.matching.tab_name_threshold, 0.95);
        assert_eq!(config.matching.field_name_threshold, 0.7);
        assert_eq!(config.impact_scoring.added_mapping_weight, 2.5);
        assert_eq!(config.impact_scoring.deleted_mapping_weight, 10.0);
    }

    #[test]
    fn test_json_config() {
        let contents = r#"{"parsing": {"max_sample_ids_for_analysis": 10}, "max_workers": 8}"#;
        let config = parse_and_validate_config(contents, ConfigFormat::Json).unwrap();
        assert_eq!(config.parsing.max_sample_ids_for_analysis, 10);
        assert_eq!(config.max_workers, 8);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let contents = "[matching]\ntab_name_threshold = 3.0\n";
        let err = parse_and_validate_config(contents, ConfigFormat::Toml).unwrap_err();
        assert!(err.contains("tab_name_threshold"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Toml);
    }

    #[test]
    fn test_load_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_config(None), SttmConfig::default());
        assert_eq!(
            load_config(Some(dir.path().join("missing.toml").as_path())),
            SttmConfig::default()
        );

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "matching = [").unwrap();
        assert_eq!(load_config(Some(broken.as_path())), SttmConfig::default());
    }

    #[test]
    fn test_save_default_config_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        save_default_config(&path, false).unwrap();
        assert_eq!(load_config_from_path(&path).unwrap(), SttmConfig::default());

        let err = save_default_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert!(save_default_config(&path, true).is_ok());
    }

    #[test]
    fn test_save_json_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sttm_config.json");

        save_default_config(&path, false).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"tab_name_threshold\": 0.8"));
    }
}
