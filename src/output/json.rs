//! JSON output formatting
//!
//! Serializes a finished run into a single report file: configuration,
//! partition plan, timing, the full per-iteration averages, the tail of Y,
//! and the verification outcome when one was performed.

use crate::config::RunConfig;
use crate::coordinator::partition::Partition;
use crate::output::text::TAIL_LEN;
use crate::util::time::{as_millis_f64, calculate_update_rate, format_duration};
use crate::util::verification::VerificationReport;
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Duration with both milliseconds and human-readable format
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuration {
    pub millis: f64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        Self {
            millis: as_millis_f64(d),
            human: format_duration(d),
        }
    }
}

/// Complete report of one run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// RFC 3339 timestamp of report creation
    pub timestamp: String,
    pub version: String,
    pub config: RunConfig,
    /// Coefficient used for the run
    pub a: f64,
    pub execution_time: JsonDuration,
    /// Element updates per second
    pub update_rate: f64,
    pub partitions: Vec<Partition>,
    /// Mean of Y after each iteration
    pub y_avgs: Vec<f64>,
    /// Last values of the final Y
    pub y_tail: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationReport>,
}

impl RunReport {
    /// Build a report from the results of a run
    pub fn new(
        config: &RunConfig,
        a: f64,
        duration: Duration,
        partitions: &[Partition],
        y: &[f64],
        y_avgs: &[f64],
        verification: Option<VerificationReport>,
    ) -> Self {
        let tail_start = y.len().saturating_sub(TAIL_LEN);
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config: config.clone(),
            a,
            execution_time: JsonDuration::from_duration(duration),
            update_rate: calculate_update_rate(config.vector_size, config.max_iters, duration),
            partitions: partitions.to_vec(),
            y_avgs: y_avgs.to_vec(),
            y_tail: y[tail_start..].to_vec(),
            verification,
        }
    }
}

/// Write a report as pretty-printed JSON
pub fn write_json_report(path: &Path, report: &RunReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("Failed to write JSON report: {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush JSON report: {}", path.display()))?;

    Ok(())
}
