//! Worker implementation
//!
//! A worker owns one contiguous slice of Y for the whole run. For every
//! iteration it applies `Y[i] = Y[i] + a * X[i]` over its slice and records
//! the sum of the updated values in its private output row. Workers never
//! see each other's data, so they run without any locking.
//!
//! # Lifecycle
//!
//! 1. **Creation**: `Worker::new()` allocates the output row
//! 2. **Execution**: `run()` performs all iterations in order
//! 3. **Completion**: returns `WorkerOutput`, handing the row back to the
//!    coordinator
//!
//! # Example
//!
//! ```
//! use parsaxpy::coordinator::partition::partition;
//! use parsaxpy::worker::Worker;
//!
//! let x = vec![1.0; 4];
//! let mut y = vec![0.0; 4];
//! let part = partition(4, 1).unwrap()[0];
//!
//! let worker = Worker::new(part, 2)?;
//! let output = worker.run(&x, &mut y, 2.0);
//!
//! assert_eq!(y, vec![4.0; 4]);
//! assert_eq!(output.sums(), &[8.0, 16.0]);
//! # Ok::<(), parsaxpy::error::SaxpyError>(())
//! ```

use crate::coordinator::partition::Partition;
use crate::error::{try_alloc_zeroed, SaxpyResult};

/// One unit of parallel work
#[derive(Debug)]
pub struct Worker {
    partition: Partition,
    sums: Vec<f64>,
}

/// Per-iteration partial sums produced by a finished worker
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerOutput {
    partition: Partition,
    sums: Vec<f64>,
}

impl Worker {
    /// Create a worker for `partition` that will run `max_iters` iterations
    ///
    /// The output row is allocated here, on the coordinator's thread, so an
    /// allocation failure is reported before any thread is spawned.
    pub fn new(partition: Partition, max_iters: usize) -> SaxpyResult<Self> {
        let sums = try_alloc_zeroed("partial sums row", max_iters)?;
        Ok(Self { partition, sums })
    }

    pub fn id(&self) -> usize {
        self.partition.worker()
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Run all iterations over the worker's slices
    ///
    /// `x` and `y` are the worker's own views of X and Y, both exactly
    /// `partition.len()` long. Iterations run strictly in order because
    /// iteration `t + 1` reads what iteration `t` wrote. An empty slice
    /// still runs every iteration and records `0.0` in each slot.
    ///
    /// # Panics
    ///
    /// Panics if the slice lengths do not match the partition. The
    /// coordinator always slices them from the same partition.
    pub fn run(mut self, x: &[f64], y: &mut [f64], a: f64) -> WorkerOutput {
        assert_eq!(x.len(), self.partition.len(), "X slice does not match partition");
        assert_eq!(y.len(), self.partition.len(), "Y slice does not match partition");

        for slot in self.sums.iter_mut() {
            let mut sum = 0.0;
            for (yi, &xi) in y.iter_mut().zip(x) {
                *yi += a * xi;
                sum += *yi;
            }
            *slot = sum;
        }

        WorkerOutput {
            partition: self.partition,
            sums: self.sums,
        }
    }
}

impl WorkerOutput {
    pub fn worker(&self) -> usize {
        self.partition.worker()
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Sum of this worker's Y values after each iteration
    pub fn sums(&self) -> &[f64] {
        &self.sums
    }

    pub fn into_sums(self) -> Vec<f64> {
        self.sums
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::partition::partition;

    #[test]
    fn test_worker_creation() {
        let part = partition(10, 2).unwrap()[1];
        let worker = Worker::new(part, 5).unwrap();
        assert_eq!(worker.id(), 1);
        assert_eq!(worker.partition().range(), 5..10);
    }

    #[test]
    fn test_single_iteration() {
        let part = partition(3, 1).unwrap()[0];
        let x = vec![1.0, 2.0, 3.0];
        let mut y = vec![10.0, 20.0, 30.0];

        let output = Worker::new(part, 1).unwrap().run(&x, &mut y, 0.5);

        assert_eq!(y, vec![10.5, 21.0, 31.5]);
        assert_eq!(output.sums(), &[63.0]);
    }

    #[test]
    fn test_iterations_build_on_each_other() {
        let part = partition(2, 1).unwrap()[0];
        let x = vec![1.0, 3.0];
        let mut y = vec![0.0, 0.0];

        let output = Worker::new(part, 3).unwrap().run(&x, &mut y, 1.0);

        assert_eq!(y, vec![3.0, 9.0]);
        assert_eq!(output.sums(), &[4.0, 8.0, 12.0]);
    }

    #[test]
    fn test_empty_range_writes_zeros() {
        let part = partition(1, 3).unwrap()[0];
        assert!(part.is_empty());

        let output = Worker::new(part, 4).unwrap().run(&[], &mut [], 2.0);

        assert_eq!(output.sums(), &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_into_sums() {
        let part = partition(1, 1).unwrap()[0];
        let mut y = vec![1.0];
        let output = Worker::new(part, 2).unwrap().run(&[1.0], &mut y, 1.0);
        assert_eq!(output.worker(), 0);
        assert_eq!(output.into_sums(), vec![2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "Y slice does not match partition")]
    fn test_mismatched_slice_panics() {
        let part = partition(2, 1).unwrap()[0];
        let mut y = vec![0.0];
        Worker::new(part, 1).unwrap().run(&[1.0, 1.0], &mut y, 1.0);
    }
}
