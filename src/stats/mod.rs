//! Partial-sum collection and reduction
//!
//! Each worker hands back one row of per-iteration sums. The coordinator
//! collects those rows into a [`PartialSums`] table indexed by
//! `(worker, iteration)` and reduces it into the per-iteration mean of Y.
//!
//! # Reduction order
//!
//! Floating-point addition is not associative, so the order in which rows
//! are added changes the low-order bits of the result. [`PartialSums::averages`]
//! always starts from `0.0` and adds rows in ascending worker order, which
//! makes the output reproducible across runs with the same worker count.
//!
//! # Example
//!
//! ```
//! use parsaxpy::stats::PartialSums;
//!
//! let mut table = PartialSums::new(2, 2).unwrap();
//! table.insert_row(0, vec![4.0, 8.0]).unwrap();
//! table.insert_row(1, vec![4.0, 8.0]).unwrap();
//!
//! assert_eq!(table.averages(4).unwrap(), vec![2.0, 4.0]);
//! ```

use crate::error::{invalid_config, try_alloc_zeroed, try_with_capacity, SaxpyResult};

/// Table of per-worker, per-iteration partial sums
///
/// Rows are owned buffers moved in from the workers after the join
/// barrier; no cell is ever shared between workers.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialSums {
    max_iters: usize,
    rows: Vec<Option<Vec<f64>>>,
}

impl PartialSums {
    /// Create an empty table for `workers` rows of `max_iters` cells
    ///
    /// # Errors
    ///
    /// `Allocation` if the row table cannot be reserved.
    pub fn new(workers: usize, max_iters: usize) -> SaxpyResult<Self> {
        let mut rows = try_with_capacity("partial sums table", workers)?;
        rows.resize(workers, None);
        Ok(Self { max_iters, rows })
    }

    /// Number of rows (workers)
    pub fn workers(&self) -> usize {
        self.rows.len()
    }

    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Store the row produced by `worker`
    ///
    /// # Errors
    ///
    /// Rejects an out-of-range worker index, a row of the wrong length, or
    /// a second row for the same worker.
    pub fn insert_row(&mut self, worker: usize, row: Vec<f64>) -> SaxpyResult<()> {
        let workers = self.rows.len();
        let slot = self.rows.get_mut(worker).ok_or_else(|| {
            invalid_config("worker", format!("index {} out of range for {} workers", worker, workers))
        })?;

        if row.len() != self.max_iters {
            return Err(invalid_config(
                "partial sums row",
                format!("has {} cells, expected {}", row.len(), self.max_iters),
            ));
        }
        if slot.is_some() {
            return Err(invalid_config(
                "partial sums row",
                format!("for worker {} was already collected", worker),
            ));
        }

        *slot = Some(row);
        Ok(())
    }

    /// Row written by `worker`, if it has been collected
    pub fn row(&self, worker: usize) -> Option<&[f64]> {
        self.rows.get(worker).and_then(|r| r.as_deref())
    }

    /// Single cell `(worker, iteration)`
    pub fn get(&self, worker: usize, iteration: usize) -> Option<f64> {
        self.row(worker).and_then(|r| r.get(iteration).copied())
    }

    /// True once every worker has handed back its row
    pub fn is_complete(&self) -> bool {
        self.rows.iter().all(Option::is_some)
    }

    /// Reduce the table into the per-iteration mean over `len` elements
    ///
    /// `len` is the full vector length, not any partition size, so empty
    /// partitions contribute nothing to the numerator and do not shrink the
    /// divisor.
    ///
    /// # Errors
    ///
    /// Fails if `len` is zero, a row is still missing, or the output buffer
    /// cannot be allocated.
    pub fn averages(&self, len: usize) -> SaxpyResult<Vec<f64>> {
        if len == 0 {
            return Err(invalid_config("vector_size", "must be at least 1, got 0"));
        }

        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(worker, row)| {
                row.as_deref().ok_or_else(|| {
                    invalid_config(
                        "partial sums row",
                        format!("for worker {} was never collected", worker),
                    )
                })
            })
            .collect::<SaxpyResult<Vec<&[f64]>>>()?;

        let mut averages = try_alloc_zeroed("Y averages", self.max_iters)?;
        let divisor = len as f64;

        for (it, avg) in averages.iter_mut().enumerate() {
            let mut total = 0.0;
            for row in &rows {
                total += row[it];
            }
            *avg = total / divisor;
        }

        Ok(averages)
    }
}
