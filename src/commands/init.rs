use crate::config;
use anyhow::Result;
use std::path::Path;

pub fn init_config(output: &Path, force: bool) -> Result<()> {
    config::save_default_config(output, force)?;
    println!("Default configuration saved to: {}", output.display());
    Ok(())
}
