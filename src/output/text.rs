//! Human-readable text output

use crate::config::{Config, RunConfig};
use crate::util::time::{as_millis_f64, calculate_update_rate, format_rate};
use crate::util::verification::{VerificationReport, AVERAGE_TOLERANCE};
use std::time::Duration;

/// Number of trailing values shown for Y and the averages
pub const TAIL_LEN: usize = 3;

/// Print the effective configuration
pub fn print_configuration(config: &Config) {
    println!("{}", config.run);
    println!("Output: {}", config.output);
    println!("Runtime: {}", config.runtime);
}

/// Format the last `n` values (or fewer if the slice is shorter)
///
/// ```
/// use parsaxpy::output::text::format_tail;
///
/// assert_eq!(format_tail(&[1.0, 2.0, 3.0, 4.0], 3), "2.000000, 3.000000, 4.000000");
/// assert_eq!(format_tail(&[0.5], 3), "0.500000");
/// ```
pub fn format_tail(values: &[f64], n: usize) -> String {
    let start = values.len().saturating_sub(n);
    values[start..]
        .iter()
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a whole vector as `name= [ v0, v1, ... ]`
pub fn format_vector(name: &str, values: &[f64]) -> String {
    let body = values
        .iter()
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}= [ {} ]", name, body)
}

/// Print a whole vector (used with `--show-vectors`)
pub fn print_vector(name: &str, values: &[f64]) {
    println!("{}", format_vector(name, values));
}

/// Render the summary of a finished run
pub fn render_results(run: &RunConfig, y: &[f64], y_avgs: &[f64], duration: Duration) -> String {
    let rate = calculate_update_rate(run.vector_size, run.max_iters, duration);

    let mut out = String::new();
    out.push_str(&format!("Execution time: {:.6} ms\n", as_millis_f64(duration)));
    out.push_str(&format!("Update rate: {} elements/s\n", format_rate(rate)));
    out.push_str(&format!("Last {} values of Y: {}\n", TAIL_LEN.min(y.len()), format_tail(y, TAIL_LEN)));
    out.push_str(&format!(
        "Last {} values of Y_avgs: {}\n",
        TAIL_LEN.min(y_avgs.len()),
        format_tail(y_avgs, TAIL_LEN)
    ));
    out
}

/// Print the summary of a finished run
pub fn print_results(run: &RunConfig, y: &[f64], y_avgs: &[f64], duration: Duration) {
    print!("{}", render_results(run, y, y_avgs, duration));
}

/// Render the verification outcome
pub fn render_verification(report: &VerificationReport) -> String {
    let status = if report.passed() { "PASSED" } else { "FAILED" };
    let mut out = format!("Verification: {}\n", status);
    out.push_str(&format!("  Y mismatches:       {}", report.y_mismatches));
    if let Some(index) = report.first_y_mismatch {
        out.push_str(&format!(" (first at index {})", index));
    }
    out.push('\n');
    out.push_str(&format!(
        "  Max avg rel. error: {:e} (tolerance {:e})\n",
        report.max_avg_relative_error, AVERAGE_TOLERANCE
    ));
    out
}

/// Print the verification outcome
pub fn print_verification(report: &VerificationReport) {
    print!("{}", render_verification(report));
}
