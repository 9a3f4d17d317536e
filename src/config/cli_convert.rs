//! CLI to Config conversion utilities

use crate::config::cli::Cli;
use crate::config::{toml, Config};
use anyhow::{Context, Result};

/// Convert a signed CLI count into a `usize`
///
/// Counts are taken as `i64` on the command line so that `-n -3` produces a
/// clear message instead of a parser error. Range checks are left to
/// [`validate_config`](crate::config::validator::validate_config).
pub fn parse_count(field: &str, value: i64) -> Result<usize> {
    usize::try_from(value).with_context(|| format!("{} cannot be negative, got {}", field, value))
}

/// Build a configuration from CLI arguments alone
///
/// Starts from the defaults and applies every option that was given.
pub fn build_config_from_cli(cli: &Cli) -> Result<Config> {
    toml::merge_cli_with_config(cli, Config::default())
}

/// Build the effective configuration: TOML file (if any) overlaid with the CLI
pub fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => {
            let config = toml::parse_toml_file(path)?;
            toml::merge_cli_with_config(cli, config)
        }
        None => build_config_from_cli(cli),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("workers", 4).unwrap(), 4);
        assert_eq!(parse_count("workers", 0).unwrap(), 0);
        assert!(parse_count("workers", -1).is_err());
    }

    #[test]
    fn test_parse_count_message() {
        let err = parse_count("max_iters", -7).unwrap_err();
        assert_eq!(err.to_string(), "max_iters cannot be negative, got -7");
    }

    #[test]
    fn test_zero_count_caught_by_validator() {
        let cli = Cli::try_parse_from(["parsaxpy", "-i", "0"]).unwrap();
        let config = build_config_from_cli(&cli).unwrap();
        let err = crate::config::validator::validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("max_iters must be at least 1"));
    }

    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::try_parse_from(["parsaxpy"]).unwrap();
        let config = build_config_from_cli(&cli).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_build_config_overrides() {
        let cli = Cli::try_parse_from(["parsaxpy", "-p", "64", "-n", "8", "--dry-run"]).unwrap();
        let config = build_config_from_cli(&cli).unwrap();
        assert_eq!(config.run.vector_size, 64);
        assert_eq!(config.run.workers, 8);
        assert_eq!(config.run.max_iters, 1000);
        assert!(config.runtime.dry_run);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(&path, "[run]\nvector_size = 128\nworkers = 3\n").unwrap();

        let cli = Cli::try_parse_from([
            "parsaxpy",
            "-c",
            path.to_str().unwrap(),
            "-n",
            "5",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.run.vector_size, 128);
        assert_eq!(config.run.workers, 5);
    }

    #[test]
    fn test_load_config_missing_file() {
        let cli = Cli::try_parse_from(["parsaxpy", "-c", "/nonexistent/parsaxpy.toml"]).unwrap();
        assert!(load_config(&cli).is_err());
    }
}
