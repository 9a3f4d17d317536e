//! parsaxpy - iterative parallel SAXPY
//!
//! Computes `Y = Y + a * X` for a fixed number of iterations over a large
//! vector, split across worker threads, and tracks the mean of Y after
//! every iteration.
//!
//! # Architecture
//!
//! - **Partitioning**: contiguous, non-overlapping ranges; the last worker
//!   absorbs the remainder
//! - **Workers**: each owns an exclusive `&mut` slice of Y and its own row
//!   of per-iteration partial sums
//! - **Coordinator**: spawns scoped threads, joins all of them, then reduces
//!   the partial sums in worker order
//! - **Verification**: optional comparison against a sequential reference
//!
//! # Example
//!
//! ```
//! use parsaxpy::coordinator::saxpy_parallel;
//!
//! let x = vec![1.0; 4];
//! let mut y = vec![0.0; 4];
//! let y_avgs = saxpy_parallel(&x, &mut y, 2.0, 2, 2)?;
//!
//! assert_eq!(y, vec![4.0; 4]);
//! assert_eq!(y_avgs, vec![2.0, 4.0]);
//! # Ok::<(), parsaxpy::error::SaxpyError>(())
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod input;
pub mod output;
pub mod reference;
pub mod stats;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use coordinator::{saxpy_parallel, Coordinator, RunOutcome};
pub use error::{SaxpyError, SaxpyResult};

/// Result type used by the application layer
pub type Result<T> = anyhow::Result<T>;
