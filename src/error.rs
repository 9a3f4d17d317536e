//! Error types for the SAXPY core
//!
//! The computation itself cannot fail: floating-point overflow or NaN is a
//! numerical outcome, not an error. What can fail is the setup around it
//! (bad parameters, allocation, thread creation) and, in the worst case, a
//! worker thread panicking.

use thiserror::Error;

/// Errors produced by the partitioner, workers and coordinator
#[derive(Debug, Error)]
pub enum SaxpyError {
    /// A run parameter is out of range (rejected before any allocation)
    #[error("invalid configuration: {field} {message}")]
    InvalidConfig {
        /// Name of the offending parameter
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// X and Y must have the same length
    #[error("vector length mismatch: X has {x_len} elements, Y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// A core buffer could not be allocated
    #[error("failed to allocate {what} ({elements} elements)")]
    Allocation {
        what: &'static str,
        elements: usize,
        #[source]
        source: std::collections::TryReserveError,
    },

    /// The OS refused to create a worker thread
    #[error("failed to spawn worker {worker}")]
    Spawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked before handing back its partial sums
    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}

/// Result type for core operations
pub type SaxpyResult<T> = std::result::Result<T, SaxpyError>;

/// Build an `InvalidConfig` error
pub fn invalid_config(field: &'static str, message: impl Into<String>) -> SaxpyError {
    SaxpyError::InvalidConfig {
        field,
        message: message.into(),
    }
}

/// Allocate a zero-filled `Vec<f64>` without aborting on allocation failure
///
/// Core buffers can be tens of millions of elements long, so running out
/// of memory is reported as [`SaxpyError::Allocation`] instead of aborting
/// the process.
pub fn try_alloc_zeroed(what: &'static str, elements: usize) -> SaxpyResult<Vec<f64>> {
    let mut buf = try_with_capacity(what, elements)?;
    buf.resize(elements, 0.0);
    Ok(buf)
}

/// Empty `Vec` with room for exactly `elements` items, or `Allocation`
pub fn try_with_capacity<T>(what: &'static str, elements: usize) -> SaxpyResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(elements)
        .map_err(|source| SaxpyError::Allocation {
            what,
            elements,
            source,
        })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let error = invalid_config("workers", "must be at least 1, got 0");
        let display = format!("{}", error);
        assert!(display.contains("invalid configuration"));
        assert!(display.contains("workers must be at least 1, got 0"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let error = SaxpyError::LengthMismatch { x_len: 4, y_len: 3 };
        assert_eq!(
            error.to_string(),
            "vector length mismatch: X has 4 elements, Y has 3"
        );
    }

    #[test]
    fn test_worker_panicked_display() {
        let error = SaxpyError::WorkerPanicked { worker: 7 };
        assert_eq!(error.to_string(), "worker 7 panicked");
    }

    #[test]
    fn test_try_alloc_zeroed() {
        let buf = try_alloc_zeroed("test buffer", 16).unwrap();
        assert_eq!(buf.len(), 16);
        assert!(buf.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_try_alloc_zeroed_too_large() {
        let err = try_alloc_zeroed("huge buffer", usize::MAX).unwrap_err();
        match err {
            SaxpyError::Allocation { what, elements, .. } => {
                assert_eq!(what, "huge buffer");
                assert_eq!(elements, usize::MAX);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = invalid_config("max_iters", "must be at least 1");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn test_try_with_capacity_overflow_is_error() {
        let err = try_with_capacity::<(usize, usize)>("ranges", usize::MAX).unwrap_err();
        assert!(matches!(err, SaxpyError::Allocation { what: "ranges", .. }));

        let buf = try_with_capacity::<u8>("bytes", 8).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 8);
    }
}
