//! Read-only inputs shared by every step of one simulated day.

use sn_agent::{AgentStore, LikeScoreMatrix};
use sn_core::AgentId;
use sn_graph::FriendGraph;

use crate::{InteractionWeights, ScheduleError, ScheduleResult};

/// Everything the scheduler reads but never writes.
///
/// Built once per day by the simulation; the only mutable state during the
/// day is the friendship graph, the budget array, and the RNG, which are
/// passed separately.
#[derive(Clone, Copy)]
pub struct DayContext<'a> {
    pub agents: &'a AgentStore,

    pub like_scores: &'a LikeScoreMatrix,

    pub weights: InteractionWeights,

    /// Inclusive lower bound of the daily budget.
    pub min_interactions: u32,

    /// Exclusive upper bound of the daily budget.
    pub max_interactions: u32,
}

impl<'a> DayContext<'a> {
    #[inline]
    pub fn new(
        agents:           &'a AgentStore,
        like_scores:      &'a LikeScoreMatrix,
        weights:          InteractionWeights,
        min_interactions: u32,
        max_interactions: u32,
    ) -> Self {
        Self { agents, like_scores, weights, min_interactions, max_interactions }
    }

    /// Number of agents.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.count
    }

    /// `true` once `agent` holds as many friends as it ever can.
    #[inline]
    pub fn at_capacity(&self, graph: &FriendGraph, agent: AgentId) -> bool {
        graph.degree(agent) >= self.agents.max_friends[agent.index()] as usize
    }

    /// Error unless the matrix and graph both cover exactly the population.
    pub fn check_sizes(&self, graph: &FriendGraph) -> ScheduleResult<()> {
        let expected = self.agents.count;
        if self.like_scores.len() != expected {
            return Err(ScheduleError::SizeMismatch {
                expected,
                got: self.like_scores.len(),
                what: "like-score matrix",
            });
        }
        if graph.node_count() != expected {
            return Err(ScheduleError::SizeMismatch {
                expected,
                got: graph.node_count(),
                what: "friendship graph",
            });
        }
        Ok(())
    }
}
