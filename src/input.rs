//! Deterministic input generation
//!
//! Produces the X and Y vectors and the coefficient `a` from a seed. All
//! values are uniform in `[0, 1)`. Values are drawn in the order X[0], Y[0],
//! X[1], Y[1], ..., and finally `a`, so the same seed always yields the same
//! inputs regardless of worker count.
//!
//! # Example
//!
//! ```
//! use parsaxpy::input::InputGenerator;
//!
//! let inputs = InputGenerator::with_seed(1).generate(1000)?;
//! assert_eq!(inputs.x.len(), 1000);
//! assert!((0.0..1.0).contains(&inputs.a));
//! # Ok::<(), parsaxpy::error::SaxpyError>(())
//! ```

use crate::error::{invalid_config, try_alloc_zeroed, SaxpyResult};
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generated SAXPY inputs
#[derive(Debug, Clone, PartialEq)]
pub struct SaxpyInputs {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub a: f64,
}

/// Seeded generator for SAXPY inputs
///
/// Uses xoshiro256++, which is fast and reproducible across platforms.
pub struct InputGenerator {
    rng: Xoshiro256PlusPlus,
}

impl InputGenerator {
    /// Create a generator from a signed seed
    ///
    /// Negative seeds are reinterpreted as their two's complement bit
    /// pattern, so every `i64` is a distinct valid seed.
    pub fn with_seed(seed: i64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed as u64),
        }
    }

    /// Draw one value in `[0, 1)`
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Generate X, Y of length `len` and the coefficient `a`
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `len` is zero, `Allocation` if the vectors do not
    /// fit in memory.
    pub fn generate(mut self, len: usize) -> SaxpyResult<SaxpyInputs> {
        if len == 0 {
            return Err(invalid_config("vector_size", "must be at least 1, got 0"));
        }

        let mut x = try_alloc_zeroed("vector X", len)?;
        let mut y = try_alloc_zeroed("vector Y", len)?;

        for (xi, yi) in x.iter_mut().zip(y.iter_mut()) {
            *xi = self.next_unit();
            *yi = self.next_unit();
        }
        let a = self.next_unit();

        Ok(SaxpyInputs { x, y, a })
    }
}
