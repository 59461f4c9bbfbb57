//! Friendship-biased interaction probabilities.
//!
//! Row `i` is a probability distribution over who agent `i` bumps into:
//!
//! ```text
//! w[i][j] = 1
//!         + direct_friend    · [j is a friend of i]
//!         + friend_of_friend · (number of friends of i who are friends of j)
//! w[i][i] = 0
//! p[i][j] = w[i][j] / Σ_j w[i][j]
//! ```
//!
//! The base weight of 1 on every off-diagonal cell guarantees a positive row
//! sum whenever there are at least two agents.

use sn_core::AgentId;
use sn_graph::FriendGraph;

use crate::{CategoricalSampler, ScheduleResult};

// ── InteractionWeights ────────────────────────────────────────────────────────

/// Extra weight given to known agents when building probabilities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionWeights {
    /// Added once per direct friend.  Default: 10.
    pub direct_friend:    f64,
    /// Added once per two-hop path through a friend.  Default: 2.
    pub friend_of_friend: f64,
}

impl Default for InteractionWeights {
    fn default() -> Self {
        Self { direct_friend: 10.0, friend_of_friend: 2.0 }
    }
}

// ── InteractionProbabilities ──────────────────────────────────────────────────

/// Dense row-major N×N row-stochastic matrix with a zero diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionProbabilities {
    n:     usize,
    probs: Vec<f64>,
}

impl InteractionProbabilities {
    /// Build from the current friendship graph.
    ///
    /// Time complexity: O(N² + Σ_i Σ_{f ∈ friends(i)} deg(f)).
    pub fn build(graph: &FriendGraph, weights: InteractionWeights) -> Self {
        let n = graph.node_count();
        let mut probs = vec![1.0; n * n];

        for (i, row) in probs.chunks_exact_mut(n.max(1)).enumerate().take(n) {
            let agent = AgentId(i as u32);
            for &friend in graph.friends(agent) {
                row[friend.index()] += weights.direct_friend;
                for &fof in graph.friends(friend) {
                    row[fof.index()] += weights.friend_of_friend;
                }
            }
            row[i] = 0.0;

            let total: f64 = row.iter().sum();
            if total > 0.0 {
                for w in row.iter_mut() {
                    *w /= total;
                }
            }
        }

        Self { n, probs }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Probability that `from` meets `to` on a single draw.
    #[inline]
    pub fn get(&self, from: AgentId, to: AgentId) -> f64 {
        self.probs[from.index() * self.n + to.index()]
    }

    /// `from`'s full distribution, indexed by partner.
    #[inline]
    pub fn row(&self, from: AgentId) -> &[f64] {
        let start = from.index() * self.n;
        &self.probs[start..start + self.n]
    }

    /// A sampler over `from`'s row.
    pub fn sampler(&self, from: AgentId) -> ScheduleResult<CategoricalSampler> {
        CategoricalSampler::new(from, self.row(from))
    }
}
