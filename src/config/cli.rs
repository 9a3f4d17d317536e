//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// parsaxpy - iterative parallel SAXPY with per-iteration means
///
/// Computes Y = Y + a*X for a fixed number of iterations over randomly
/// generated vectors, split across worker threads.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "parsaxpy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Run Options ===
    /// Vector size (1 to 2147483647) [default: 10000000]
    #[arg(short = 'p', long, env = "PARSAXPY_VECTOR_SIZE", allow_negative_numbers = true)]
    pub vector_size: Option<i64>,

    /// Seed for the input generator [default: 1]
    #[arg(short = 's', long, env = "PARSAXPY_SEED", allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Number of worker threads [default: 2]
    #[arg(short = 'n', long, env = "PARSAXPY_WORKERS", allow_negative_numbers = true)]
    pub workers: Option<i64>,

    /// Maximum iterations [default: 1000]
    #[arg(short = 'i', long, env = "PARSAXPY_MAX_ITERS", allow_negative_numbers = true)]
    pub max_iters: Option<i64>,

    // === Output Options ===
    /// Write a JSON report to this file
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Print X, the initial and final Y, and a
    #[arg(long)]
    pub show_vectors: bool,

    // === Runtime Options ===
    /// Re-run the computation sequentially and compare results
    #[arg(long)]
    pub verify: bool,

    // === Configuration File ===
    /// TOML configuration file (command-line values take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - validate configuration without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
