//! Categorical sampling over one probability row.

use rand::distributions::{Distribution, WeightedIndex};
use sn_core::{AgentId, SimRng};

use crate::{ScheduleError, ScheduleResult};

/// Draws partner ids in proportion to a weight row, with replacement.
///
/// Backed by `rand`'s `WeightedIndex` (cumulative weights + binary search),
/// so each draw is O(log N) after an O(N) setup.  Zero-weight entries, such
/// as the owner's own slot, are never returned.
pub struct CategoricalSampler {
    index: WeightedIndex<f64>,
}

impl CategoricalSampler {
    /// Build a sampler for `owner` over `weights`.  Weights need not be
    /// normalised but must be non-negative with a positive sum.
    pub fn new(owner: AgentId, weights: &[f64]) -> ScheduleResult<Self> {
        let index = WeightedIndex::new(weights).map_err(|_| ScheduleError::EmptyDistribution(owner))?;
        Ok(Self { index })
    }

    /// One draw.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> AgentId {
        AgentId(self.index.sample(rng.inner()) as u32)
    }

    /// `count` independent draws, in draw order.  Repeats are allowed.
    pub fn sample_n(&self, rng: &mut SimRng, count: usize) -> Vec<AgentId> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}
