use anyhow::Result;
use clap::Parser;
use sttm_impact::cli::{Cli, Commands};
use sttm_impact::commands::{self, ParseConfig};
use sttm_impact::logging::init_logging;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Parse {
            file,
            format,
            output,
            config,
            preset,
        } => {
            let success = commands::handle_parse(ParseConfig {
                file,
                format,
                output,
                config,
                preset: preset.map(Into::into),
            })?;
            Ok(if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Init { output, force } => {
            commands::init_config(&output, force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
