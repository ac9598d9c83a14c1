//! TOML configuration file parsing

use super::Config;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // A positional URL on the command line overrides the file's target
    if let Some(ref url) = cli.url {
        config.target.url = url.clone();
    }
    if cli.timeout.is_some() {
        config.target.timeout_secs = cli.timeout;
    }

    // Override worker settings
    if cli.processes != 1 {
        config.workers.processes = cli.processes;
    }
    if cli.requests != 1 {
        config.workers.requests_per_process = cli.requests;
    }

    // Override output settings
    if cli.verbose {
        config.output.verbose = true;
    }
    if cli.show_percentiles {
        config.output.show_percentiles = true;
    }
    if cli.debug {
        config.output.debug = true;
    }

    Ok(config)
}
