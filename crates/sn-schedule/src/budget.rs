//! Per-agent daily interaction budget.
//!
//! Every agent starts the day with a random number of interactions.  Both
//! sides of an encounter spend one unit: the proposer always, the partner
//! only if it still had budget left.

use sn_core::{AgentId, SimRng};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionBudget {
    left: Vec<u32>,
}

impl InteractionBudget {
    /// Draw `uniform[min, max)` independently for each of `count` agents, in
    /// id order.  Equal bounds give every agent exactly `min`.
    pub fn draw(count: usize, min: u32, max: u32, rng: &mut SimRng) -> Self {
        let left = (0..count).map(|_| rng.uniform_u32(min, max)).collect();
        Self { left }
    }

    /// Use explicit counters, indexed by agent.
    pub fn from_counts(left: Vec<u32>) -> Self {
        Self { left }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Interactions `agent` may still take part in today.
    #[inline]
    pub fn left(&self, agent: AgentId) -> u32 {
        self.left[agent.index()]
    }

    /// Spend one unit of `agent`'s budget.  Spending an exhausted budget is a
    /// no-op.
    #[inline]
    pub fn consume(&mut self, agent: AgentId) {
        let slot = &mut self.left[agent.index()];
        debug_assert!(*slot > 0, "{agent} spent past an empty budget");
        *slot = slot.saturating_sub(1);
    }

    /// Sum of all remaining budget.
    pub fn total(&self) -> u64 {
        self.left.iter().map(|&x| x as u64).sum()
    }
}
