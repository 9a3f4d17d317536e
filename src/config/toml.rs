//! TOML configuration file parsing
//!
//! ```toml
//! [run]
//! vector_size = 1000000
//! seed = 42
//! workers = 8
//! max_iters = 500
//!
//! [output]
//! json_output = "report.json"
//!
//! [runtime]
//! verify = true
//! ```
//!
//! Every section and key is optional; missing values take the defaults.

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::parse_count;
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
    // Override run parameters
    if let Some(p) = cli.vector_size {
        config.run.vector_size = parse_count("vector size", p)?;
    }
    if let Some(seed) = cli.seed {
        config.run.seed = seed;
    }
    if let Some(n) = cli.workers {
        config.run.workers = parse_count("workers", n)?;
    }
    if let Some(i) = cli.max_iters {
        config.run.max_iters = parse_count("max iterations", i)?;
    }

    // Override output settings
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.show_vectors {
        config.output.show_vectors = true;
    }

    // Override runtime flags
    if cli.verify {
        config.runtime.verify = true;
    }
    if cli.dry_run {
        config.runtime.dry_run = true;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    Ok(config)
}
