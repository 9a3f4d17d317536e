//! Sequential reference implementation
//!
//! A plain single-threaded SAXPY loop used to check the parallel path. With
//! one worker the parallel run performs exactly the same floating-point
//! operations in the same order, so the two must agree bit for bit.

use crate::error::{invalid_config, try_alloc_zeroed, SaxpyError, SaxpyResult};

/// Run `max_iters` iterations of `Y = Y + a * X` on the calling thread
///
/// Returns the mean of Y after each iteration.
pub fn saxpy_sequential(x: &[f64], y: &mut [f64], a: f64, max_iters: usize) -> SaxpyResult<Vec<f64>> {
    if x.len() != y.len() {
        return Err(SaxpyError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if y.is_empty() {
        return Err(invalid_config("vector_size", "must be at least 1, got 0"));
    }
    if max_iters == 0 {
        return Err(invalid_config("max_iters", "must be at least 1, got 0"));
    }

    let len = y.len() as f64;
    let mut averages = try_alloc_zeroed("Y averages", max_iters)?;

    for avg in averages.iter_mut() {
        let mut sum = 0.0;
        for (yi, &xi) in y.iter_mut().zip(x) {
            *yi += a * xi;
            sum += *yi;
        }
        *avg = sum / len;
    }

    Ok(averages)
}
