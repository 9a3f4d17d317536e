//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default vector length
pub const DEFAULT_VECTOR_SIZE: usize = 10_000_000;
/// Default RNG seed
pub const DEFAULT_SEED: i64 = 1;
/// Default number of worker threads
pub const DEFAULT_WORKERS: usize = 2;
/// Default number of SAXPY passes
pub const DEFAULT_MAX_ITERS: usize = 1000;
/// Largest accepted vector length (2^31 - 1)
pub const MAX_VECTOR_SIZE: usize = i32::MAX as usize;

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Parameters of the computation itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Length of X and Y
    #[serde(default = "default_vector_size")]
    pub vector_size: usize,
    /// Seed for generating X, Y and a
    #[serde(default = "default_seed")]
    pub seed: i64,
    /// Number of parallel workers
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Number of SAXPY passes
    #[serde(default = "default_max_iters")]
    pub max_iters: usize,
}

fn default_vector_size() -> usize {
    DEFAULT_VECTOR_SIZE
}

fn default_seed() -> i64 {
    DEFAULT_SEED
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_max_iters() -> usize {
    DEFAULT_MAX_ITERS
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            vector_size: default_vector_size(),
            seed: default_seed(),
            workers: default_workers(),
            max_iters: default_max_iters(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON report file path
    #[serde(default)]
    pub json_output: Option<PathBuf>,
    /// Print full input and output vectors
    #[serde(default)]
    pub show_vectors: bool,
}

/// Runtime behavior
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Re-run sequentially and compare results
    #[serde(default)]
    pub verify: bool,
    /// Validate configuration without executing
    #[serde(default)]
    pub dry_run: bool,
    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

// Display trait implementations

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Run: {}", self.run)?;
        writeln!(f, "  Output: {}", self.output)?;
        writeln!(f, "  Runtime: {}", self.runtime)?;
        Ok(())
    }
}

impl fmt::Display for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p = {}, seed = {}, workers = {}, max_iters = {}",
            self.vector_size, self.seed, self.workers, self.max_iters
        )
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref path) = self.json_output {
            parts.push(format!("json={}", path.display()));
        }
        if self.show_vectors {
            parts.push("show_vectors".to_string());
        }
        if parts.is_empty() {
            write!(f, "text output")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

impl fmt::Display for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.verify {
            parts.push("verify");
        }
        if self.dry_run {
            parts.push("dry_run");
        }
        if self.debug {
            parts.push("debug");
        }
        if parts.is_empty() {
            write!(f, "default")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}
