//! Coordinator module
//!
//! Orchestrates workers and reduces their results.
//!
//! The coordinator partitions the index range, hands every worker an
//! exclusive `&mut` slice of Y (carved out with `split_at_mut`, so two
//! workers can never alias the same element), spawns one scoped thread per
//! worker, joins all of them, and only then reads their partial sums.
//!
//! # Example
//!
//! ```
//! use parsaxpy::coordinator::Coordinator;
//!
//! let x = vec![1.0; 4];
//! let mut y = vec![0.0; 4];
//!
//! let coordinator = Coordinator::new(2, 2)?;
//! let outcome = coordinator.run(&x, &mut y, 2.0)?;
//!
//! assert_eq!(y, vec![4.0; 4]);
//! assert_eq!(outcome.y_avgs(), &[2.0, 4.0]);
//! # Ok::<(), parsaxpy::error::SaxpyError>(())
//! ```

pub mod partition;

use crate::error::{invalid_config, try_with_capacity, SaxpyError, SaxpyResult};
use crate::stats::PartialSums;
use crate::worker::{Worker, WorkerOutput};
use partition::{partition, Partition};
use std::thread;

/// Largest accepted worker count (2^31 - 1)
pub const MAX_WORKERS: usize = i32::MAX as usize;

/// Drives one parallel SAXPY run
#[derive(Debug, Clone, Copy)]
pub struct Coordinator {
    workers: usize,
    max_iters: usize,
}

/// Everything a finished run produces besides the mutated Y
#[derive(Debug, Clone)]
pub struct RunOutcome {
    partitions: Vec<Partition>,
    partial_sums: PartialSums,
    y_avgs: Vec<f64>,
}

impl Coordinator {
    /// Create a coordinator for `workers` workers and `max_iters` iterations
    ///
    /// # Errors
    ///
    /// Both values must be at least 1, and `workers` at most [`MAX_WORKERS`].
    pub fn new(workers: usize, max_iters: usize) -> SaxpyResult<Self> {
        if workers == 0 {
            return Err(invalid_config("workers", "must be at least 1, got 0"));
        }
        if workers > MAX_WORKERS {
            return Err(invalid_config(
                "workers",
                format!("must be at most {}, got {}", MAX_WORKERS, workers),
            ));
        }
        if max_iters == 0 {
            return Err(invalid_config("max_iters", "must be at least 1, got 0"));
        }
        Ok(Self { workers, max_iters })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Run `max_iters` iterations of `Y = Y + a * X` in parallel
    ///
    /// Y is updated in place. Returns the per-iteration mean of Y along with
    /// the partition plan and the raw partial sums.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` / `InvalidConfig` for bad inputs, before anything
    ///   is allocated or spawned
    /// - `Allocation` if the partition, worker or partial-sum tables cannot
    ///   be allocated
    /// - `Spawn` if the OS refuses to create a thread
    /// - `WorkerPanicked` if a worker thread panics
    pub fn run(&self, x: &[f64], y: &mut [f64], a: f64) -> SaxpyResult<RunOutcome> {
        if x.len() != y.len() {
            return Err(SaxpyError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let len = y.len();
        let partitions = partition(len, self.workers)?;

        log::debug!(
            "Partitioned {} elements across {} workers (chunk {}, last worker takes {})",
            len,
            self.workers,
            len / self.workers,
            partitions.last().map(Partition::len).unwrap_or(0)
        );

        let mut workers = try_with_capacity("workers", partitions.len())?;
        for &p in &partitions {
            workers.push(Worker::new(p, self.max_iters)?);
        }

        let outputs = spawn_workers(workers, x, y, a, Worker::run)?;

        let mut partial_sums = PartialSums::new(self.workers, self.max_iters)?;
        for output in outputs {
            let worker = output.worker();
            partial_sums.insert_row(worker, output.into_sums())?;
        }

        let y_avgs = partial_sums.averages(len)?;
        log::debug!("Reduced {} partial-sum rows into {} averages", self.workers, y_avgs.len());

        Ok(RunOutcome {
            partitions,
            partial_sums,
            y_avgs,
        })
    }
}

/// Spawn one scoped thread per worker and wait for all of them
///
/// Y is split into consecutive disjoint slices matching the partitions.
/// Every handle is joined even if an earlier one failed, so the caller
/// never observes a run with workers still in flight. When several workers
/// panic, the lowest worker id is reported.
fn spawn_workers<F>(
    workers: Vec<Worker>,
    x: &[f64],
    y: &mut [f64],
    a: f64,
    task: F,
) -> SaxpyResult<Vec<WorkerOutput>>
where
    F: Fn(Worker, &[f64], &mut [f64], f64) -> WorkerOutput + Sync,
{
    let mut y_slices: Vec<&mut [f64]> = try_with_capacity("Y slices", workers.len())?;
    let mut rest = y;
    for worker in &workers {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(worker.partition().len());
        y_slices.push(head);
        rest = tail;
    }

    let task = &task;
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers.len());
        let mut spawn_error = None;

        for (worker, y_part) in workers.into_iter().zip(y_slices) {
            let id = worker.id();
            let x_part = &x[worker.partition().range()];

            let spawned = thread::Builder::new()
                .name(format!("saxpy-worker-{}", id))
                .spawn_scoped(scope, move || {
                    log::debug!("Worker {} started on [{}, {})", id, worker.partition().start(), worker.partition().end());
                    let output = task(worker, x_part, y_part, a);
                    log::debug!("Worker {} finished", id);
                    output
                });

            match spawned {
                Ok(handle) => handles.push((id, handle)),
                Err(source) => {
                    spawn_error = Some(SaxpyError::Spawn { worker: id, source });
                    break;
                }
            }
        }

        // Wait for all workers to complete
        let joined: Vec<SaxpyResult<WorkerOutput>> = handles
            .into_iter()
            .map(|(id, handle)| {
                handle
                    .join()
                    .map_err(|_| SaxpyError::WorkerPanicked { worker: id })
            })
            .collect();

        if let Some(err) = spawn_error {
            return Err(err);
        }
        joined.into_iter().collect()
    })
}

impl RunOutcome {
    /// Per-iteration mean of Y, one entry per iteration
    pub fn y_avgs(&self) -> &[f64] {
        &self.y_avgs
    }

    pub fn into_y_avgs(self) -> Vec<f64> {
        self.y_avgs
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn partial_sums(&self) -> &PartialSums {
        &self.partial_sums
    }
}

/// Convenience wrapper: run the parallel SAXPY and return only the averages
pub fn saxpy_parallel(
    x: &[f64],
    y: &mut [f64],
    a: f64,
    max_iters: usize,
    workers: usize,
) -> SaxpyResult<Vec<f64>> {
    Coordinator::new(workers, max_iters)?
        .run(x, y, a)
        .map(RunOutcome::into_y_avgs)
}
