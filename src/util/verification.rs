//! Result verification utilities
//!
//! Compares a parallel run against the sequential reference. Y must match
//! bit for bit, because every element goes through the same sequence of
//! operations regardless of partitioning. The averages only have to agree
//! within a relative tolerance, since the reduction adds partial sums in a
//! different grouping than a single running sum.

use crate::error::SaxpyResult;
use crate::reference::saxpy_sequential;
use rayon::prelude::*;
use serde::Serialize;

/// Relative tolerance accepted between parallel and sequential averages
pub const AVERAGE_TOLERANCE: f64 = 1e-9;

/// Outcome of comparing a parallel run with the sequential reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    /// Number of Y elements whose bits differ
    pub y_mismatches: usize,
    /// First differing Y index, if any
    pub first_y_mismatch: Option<usize>,
    /// Largest relative error over all averages
    pub max_avg_relative_error: f64,
    /// Whether the averages are within `AVERAGE_TOLERANCE`
    pub averages_match: bool,
}

impl VerificationReport {
    /// True when Y matches exactly and the averages are within tolerance
    pub fn passed(&self) -> bool {
        self.y_mismatches == 0 && self.averages_match
    }
}

/// Re-run the computation sequentially and compare
///
/// # Arguments
///
/// * `x` - The X vector used for the parallel run
/// * `y_initial` - Y as it was before the parallel run
/// * `a` - Coefficient
/// * `max_iters` - Iterations
/// * `y_parallel` / `avgs_parallel` - Output of the parallel run
pub fn verify_run(
    x: &[f64],
    y_initial: &[f64],
    a: f64,
    max_iters: usize,
    y_parallel: &[f64],
    avgs_parallel: &[f64],
) -> SaxpyResult<VerificationReport> {
    let mut y_reference = y_initial.to_vec();
    let avgs_reference = saxpy_sequential(x, &mut y_reference, a, max_iters)?;

    Ok(compare_results(&y_reference, &avgs_reference, y_parallel, avgs_parallel))
}

/// Compare two result sets
pub fn compare_results(
    y_expected: &[f64],
    avgs_expected: &[f64],
    y_actual: &[f64],
    avgs_actual: &[f64],
) -> VerificationReport {
    let length_diff = y_expected.len().abs_diff(y_actual.len());

    let y_mismatches = y_expected
        .par_iter()
        .zip(y_actual.par_iter())
        .filter(|(e, a)| e.to_bits() != a.to_bits())
        .count()
        + length_diff;

    let first_y_mismatch = y_expected
        .par_iter()
        .zip(y_actual.par_iter())
        .position_first(|(e, a)| e.to_bits() != a.to_bits())
        .or_else(|| (length_diff > 0).then(|| y_expected.len().min(y_actual.len())));

    let max_avg_relative_error = avgs_expected
        .par_iter()
        .zip(avgs_actual.par_iter())
        .map(|(&e, &a)| relative_error(e, a))
        .reduce(|| 0.0, f64::max);

    let averages_match = avgs_expected.len() == avgs_actual.len()
        && max_avg_relative_error < AVERAGE_TOLERANCE;

    VerificationReport {
        y_mismatches,
        first_y_mismatch,
        max_avg_relative_error,
        averages_match,
    }
}

/// Relative error of `actual` against `expected`
///
/// Falls back to the absolute error when `expected` is zero. Identical
/// values (including identical infinities, or two NaNs) have zero error;
/// a NaN on only one side is an infinite error.
pub fn relative_error(expected: f64, actual: f64) -> f64 {
    if expected == actual || (expected.is_nan() && actual.is_nan()) {
        return 0.0;
    }
    if expected.is_nan() || actual.is_nan() {
        return f64::INFINITY;
    }
    let diff = (expected - actual).abs();
    if expected == 0.0 {
        diff
    } else {
        diff / expected.abs()
    }
}
