//! Configuration validation

use super::*;
use crate::coordinator::MAX_WORKERS;
use anyhow::Result;

/// Validate complete configuration
///
/// Hard limits are errors. Settings that are legal but likely unintended
/// (more workers than CPUs or than elements) are only logged.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_run(&config.run)?;
    validate_output(&config.output)?;
    Ok(())
}

/// Validate run parameters
pub fn validate_run(run: &RunConfig) -> Result<()> {
    if run.vector_size == 0 || run.vector_size > MAX_VECTOR_SIZE {
        anyhow::bail!(
            "vector_size must be between 1 and {}, got {}",
            MAX_VECTOR_SIZE,
            run.vector_size
        );
    }

    if run.workers == 0 || run.workers > MAX_WORKERS {
        anyhow::bail!(
            "workers must be between 1 and {}, got {}",
            MAX_WORKERS,
            run.workers
        );
    }

    if run.max_iters == 0 {
        anyhow::bail!("max_iters must be at least 1, got {}", run.max_iters);
    }

    let cpus = num_cpus::get();
    if run.workers > cpus {
        log::warn!(
            "{} workers requested but only {} CPUs available; workers will time-share",
            run.workers,
            cpus
        );
    }

    if run.workers > run.vector_size {
        log::warn!(
            "{} workers for {} elements: {} workers will have an empty range",
            run.workers,
            run.vector_size,
            run.workers - 1
        );
    }

    Ok(())
}

/// Validate output configuration
fn validate_output(output: &OutputConfig) -> Result<()> {
    if let Some(ref path) = output.json_output {
        if path.as_os_str().is_empty() {
            anyhow::bail!("json_output path cannot be empty");
        }
        if path.is_dir() {
            anyhow::bail!("json_output must be a file, {} is a directory", path.display());
        }
    }
    Ok(())
}
