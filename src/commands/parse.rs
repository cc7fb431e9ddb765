use crate::config::{self, PresetLevel, SttmConfig};
use crate::output::{self, OutputFormat, ParseReport};
use crate::parser::SttmParser;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub struct ParseConfig {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub preset: Option<PresetLevel>,
}

// =============================================================================
// Pure Functions
// =============================================================================

/// Parse a report into a [`ParseReport`]; parse failures become a failed report
pub fn build_report(parser: &SttmParser, file: &Path, format: OutputFormat) -> ParseReport {
    let file_path = file.display().to_string();

    match parser.parse_file(file) {
        Ok(document) => {
            let summary = document.summary();
            info!(
                tabs = summary.total_tabs,
                changed = summary.changed_tabs,
                changes = summary.total_changes,
                "Successfully parsed STTM file"
            );
            ParseReport::from_document(file_path, &document, format == OutputFormat::Detailed)
        }
        Err(e) => {
            error!("Failed to parse STTM file: {}", e);
            ParseReport::failure(file_path, e.to_string())
        }
    }
}

fn resolve_config(config_path: Option<&Path>, preset: Option<PresetLevel>) -> SttmConfig {
    match preset {
        Some(preset) => {
            debug!("Using {} configuration preset", preset.name());
            preset.to_config()
        }
        None => config::load_config(config_path),
    }
}

// =============================================================================
// I/O Shell Functions (Side Effects at Boundaries)
// =============================================================================

fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Results written to: {}", path.display());
        }
        None => {
            let rule = "=".repeat(60);
            println!("\n{}\nRESULTS:\n{}\n{}", rule, rule, content);
        }
    }
    Ok(())
}

/// Run the parse command; returns whether parsing succeeded
pub fn handle_parse(config: ParseConfig) -> Result<bool> {
    let settings = resolve_config(config.config.as_deref(), config.preset);
    debug!(?settings, "Resolved configuration");

    let parser = SttmParser::new();
    let report = build_report(&parser, &config.file, config.format);
    let content = output::render(&report, config.format).context("Failed to render results")?;
    write_output(&content, config.output.as_deref())?;

    Ok(report.success)
}
