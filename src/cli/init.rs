//! Init command - write an example langprofile.toml

use anyhow::{Context, Result};
use console::style;
use langprofile::config::{CONFIG_FILE_NAME, EXAMPLE_CONFIG};
use std::path::Path;

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists; remove it first to start over",
            config_path.display()
        );
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;

    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    println!(
        "  Put one <language>.txt per language under {} and run {}",
        style("corpora/").cyan(),
        style("langprofile train").bold()
    );
    Ok(())
}
