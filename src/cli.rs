use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{PresetLevel, DEFAULT_CONFIG_FILE};
use crate::logging::LogLevel;
use crate::output::OutputFormat;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConfigPreset {
    /// Tight matching thresholds, low impact thresholds
    Strict,
    /// Default settings
    Balanced,
    /// Loose matching, high impact thresholds
    Lenient,
}

impl From<ConfigPreset> for PresetLevel {
    fn from(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Strict => PresetLevel::Strict,
            ConfigPreset::Balanced => PresetLevel::Balanced,
            ConfigPreset::Lenient => PresetLevel::Lenient,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sttm-impact")]
#[command(about = "Parse STTM difference reports for impact analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Logging level (RUST_LOG overrides it)
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse an STTM difference JSON report
    Parse {
        /// STTM difference report
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (TOML, or JSON with a .json extension)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use a built-in configuration preset instead of a file
        #[arg(long, value_enum, conflicts_with = "config")]
        preset: Option<ConfigPreset>,
    },

    /// Write the default configuration for customization
    Init {
        /// Destination file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["sttm-impact", "parse", "diff.json"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Info);
        match cli.command {
            Commands::Parse {
                file,
                format,
                output,
                preset,
                ..
            } => {
                assert_eq!(file, PathBuf::from("diff.json"));
                assert_eq!(format, OutputFormat::Summary);
                assert!(output.is_none());
                assert!(preset.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_preset_conflicts_with_config() {
        let result = Cli::try_parse_from([
            "sttm-impact",
            "parse",
            "diff.json",
            "--config",
            "c.toml",
            "--preset",
            "strict",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_warning_alias_and_global_flags() {
        let cli = Cli::try_parse_from(["sttm-impact", "init", "--log-level", "warning"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Warn);
        match cli.command {
            Commands::Init { output, force } => {
                assert_eq!(output, PathBuf::from(DEFAULT_CONFIG_FILE));
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
