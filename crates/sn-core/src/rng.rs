//! The simulation-wide deterministic RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `SimConfig::seed`.  It is
//! threaded by `&mut` through agent generation, like-score computation, and
//! every step of the daily scheduler, always in the same order.  Two runs
//! with the same seed and configuration therefore make identical draws and
//! produce identical friendship graphs.
//!
//! Nothing in the workspace draws from `thread_rng()` or any other implicit
//! generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only from the single thread that owns the simulation context.  If
/// independent runs are needed, give each its own `SimRng` seeded with
/// [`SimRng::run_seed`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed for the `run`-th of several independent runs sharing one base
    /// seed.  Consecutive run indices are spread across the seed space.
    pub fn run_seed(base_seed: u64, run: u64) -> u64 {
        base_seed ^ run.wrapping_mul(MIXING_CONSTANT)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`WeightedIndex`, `seq::index::sample`, …).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    ///
    /// # Panics
    /// Panics if `range` is empty, exactly like `rand::Rng::gen_range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform real in `[lo, hi)`.  A degenerate range (`lo >= hi`) returns
    /// `lo` without consuming a draw.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            lo
        } else {
            self.0.gen_range(lo..hi)
        }
    }

    /// Uniform integer in `[lo, hi)`.  A degenerate range (`lo >= hi`)
    /// returns `lo` without consuming a draw.
    #[inline]
    pub fn uniform_u32(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            lo
        } else {
            self.0.gen_range(lo..hi)
        }
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// `amount` distinct indices drawn without replacement from `0..length`,
    /// in draw order.
    ///
    /// # Panics
    /// Panics if `amount > length`.
    #[inline]
    pub fn sample_distinct(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
