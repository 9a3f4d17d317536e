//! Index-range partitioning
//!
//! Splits `[0, len)` into one contiguous range per worker. Every worker
//! gets `len / workers` elements, and the last worker additionally absorbs
//! the remainder of the division so the ranges always cover the whole
//! vector.
//!
//! # Example
//!
//! ```
//! use parsaxpy::coordinator::partition::partition;
//!
//! let ranges = partition(10, 3).unwrap();
//! let bounds: Vec<(usize, usize)> = ranges.iter().map(|r| (r.start(), r.end())).collect();
//! assert_eq!(bounds, vec![(0, 3), (3, 6), (6, 10)]);
//! ```

use super::MAX_WORKERS;
use crate::error::{invalid_config, try_with_capacity, SaxpyResult};
use serde::Serialize;
use std::ops::Range;

/// Contiguous index range `[start, end)` assigned to one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Partition {
    worker: usize,
    start: usize,
    end: usize,
}

impl Partition {
    /// Index of the worker that owns this range
    pub fn worker(&self) -> usize {
        self.worker
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of elements in the range
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the worker has nothing to update (more workers than elements)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `[0, len)` into `workers` contiguous ranges
///
/// Worker `k` is assigned `[k * (len / workers), (k + 1) * (len / workers))`,
/// except the last worker whose end is always `len`. When `workers > len`
/// the chunk size is zero, so every worker but the last gets an empty
/// range and the last one covers the whole vector.
///
/// # Errors
///
/// Returns `SaxpyError::InvalidConfig` if `len` or `workers` is zero or
/// `workers` exceeds [`MAX_WORKERS`], and `SaxpyError::Allocation` if the
/// partition list cannot be allocated.
pub fn partition(len: usize, workers: usize) -> SaxpyResult<Vec<Partition>> {
    if len == 0 {
        return Err(invalid_config("vector_size", "must be at least 1, got 0"));
    }
    if workers == 0 {
        return Err(invalid_config("workers", "must be at least 1, got 0"));
    }
    if workers > MAX_WORKERS {
        return Err(invalid_config(
            "workers",
            format!("must be at most {}, got {}", MAX_WORKERS, workers),
        ));
    }

    let chunk = len / workers;
    let mut parts = try_with_capacity("partitions", workers)?;

    for worker in 0..workers {
        let start = worker * chunk;
        let end = if worker == workers - 1 {
            len // Last worker absorbs the remainder
        } else {
            start + chunk
        };
        parts.push(Partition { worker, start, end });
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(parts: &[Partition]) -> Vec<(usize, usize)> {
        parts.iter().map(|p| (p.start(), p.end())).collect()
    }

    #[test]
    fn test_even_split() {
        let parts = partition(8, 4).unwrap();
        assert_eq!(bounds(&parts), vec![(0, 2), (2, 4), (4, 6), (6, 8)]);
        assert!(parts.iter().all(|p| p.len() == 2));
    }

    #[test]
    fn test_remainder_goes_to_last_worker() {
        let parts = partition(10, 4).unwrap();
        assert_eq!(bounds(&parts), vec![(0, 2), (2, 4), (4, 6), (6, 10)]);
    }

    #[test]
    fn test_single_worker_covers_everything() {
        let parts = partition(7, 1).unwrap();
        assert_eq!(bounds(&parts), vec![(0, 7)]);
    }

    #[test]
    fn test_more_workers_than_elements() {
        let parts = partition(3, 5).unwrap();
        assert_eq!(parts.len(), 5);
        assert_eq!(bounds(&parts), vec![(0, 0), (0, 0), (0, 0), (0, 0), (0, 3)]);
        assert!(parts[..4].iter().all(Partition::is_empty));
    }

    #[test]
    fn test_worker_ids_are_sequential() {
        let parts = partition(100, 6).unwrap();
        for (i, p) in parts.iter().enumerate() {
            assert_eq!(p.worker(), i);
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(partition(0, 2).is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(partition(10, 0).is_err());
    }

    #[test]
    fn test_worker_count_above_cap_rejected() {
        let err = partition(4, MAX_WORKERS + 1).unwrap_err();
        assert!(matches!(err, crate::error::SaxpyError::InvalidConfig { field: "workers", .. }));
        assert!(partition(4, usize::MAX).is_err());
    }
}
