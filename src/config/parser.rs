use super::Config;
use anyhow::{Context, Result};
use std::path::Path;

/// Read, parse and validate a configuration file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML or holds
/// invalid values.
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Parse and validate configuration text
///
/// # Errors
///
/// Returns an error if the text is not valid TOML or holds invalid values.
pub fn parse_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("Failed to parse TOML config")?;

    // Validate and return validation errors directly without wrapping
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.snapshot.directory.as_os_str().is_empty() {
        anyhow::bail!("Snapshot directory cannot be empty");
    }
    Ok(())
}
