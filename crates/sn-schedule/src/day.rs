//! One simulated day: state preparation and proposal processing.

use sn_core::{AgentId, SimRng};
use sn_graph::FriendGraph;
use tracing::{debug, trace};

use crate::{DayContext, InteractionBudget, InteractionProbabilities, ScheduleResult};

// ── DayOutcome ────────────────────────────────────────────────────────────────

/// Counters for one simulated day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayOutcome {
    /// Friendships formed today.
    pub new_friendships: u32,
    /// Partner draws made (each spends one unit of the proposer's budget).
    pub proposals:       u64,
    /// Proposals whose partner had no budget left.
    pub declined:        u64,
    /// Proposals that became a mutual encounter.
    pub encounters:      u64,
    /// Encounters between eligible strangers that failed mutual acceptance.
    pub rejected:        u64,
    /// Agents passed over because they were full or had no budget.
    pub skipped_agents:  u32,
}

// ── DayState ──────────────────────────────────────────────────────────────────

/// Ephemeral state rebuilt at the start of every day and dropped at its end.
pub struct DayState {
    pub probabilities:    InteractionProbabilities,
    pub budget:           InteractionBudget,
    pub processing_order: Vec<AgentId>,
}

impl DayState {
    /// Build today's probabilities from `graph`, then draw the budget, then
    /// shuffle the processing order.
    pub fn prepare(ctx: &DayContext<'_>, graph: &FriendGraph, rng: &mut SimRng) -> ScheduleResult<Self> {
        ctx.check_sizes(graph)?;

        let probabilities = InteractionProbabilities::build(graph, ctx.weights);
        let budget = InteractionBudget::draw(
            ctx.agent_count(),
            ctx.min_interactions,
            ctx.max_interactions,
            rng,
        );
        let mut processing_order: Vec<AgentId> = ctx.agents.agent_ids().collect();
        rng.shuffle(&mut processing_order);

        Ok(Self { probabilities, budget, processing_order })
    }

    /// Walk the processing order and apply every proposal to `graph`.
    pub fn process(
        self,
        ctx:   &DayContext<'_>,
        graph: &mut FriendGraph,
        rng:   &mut SimRng,
    ) -> ScheduleResult<DayOutcome> {
        let DayState { probabilities, mut budget, processing_order } = self;
        let mut outcome = DayOutcome::default();

        for &agent in &processing_order {
            let draws = budget.left(agent);
            if draws == 0 || ctx.at_capacity(graph, agent) {
                outcome.skipped_agents += 1;
                continue;
            }

            let partners = probabilities.sampler(agent)?.sample_n(rng, draws as usize);
            for partner in partners {
                budget.consume(agent);
                outcome.proposals += 1;

                if budget.left(partner) == 0 {
                    outcome.declined += 1;
                    continue;
                }
                budget.consume(partner);
                outcome.encounters += 1;

                if graph.are_friends(agent, partner)
                    || ctx.at_capacity(graph, agent)
                    || ctx.at_capacity(graph, partner)
                {
                    continue;
                }

                if mutual_acceptance(ctx, agent, partner) {
                    if graph.add_friendship(agent, partner)? {
                        outcome.new_friendships += 1;
                        trace!(%agent, %partner, "friendship formed");
                    }
                } else {
                    outcome.rejected += 1;
                }
            }
        }

        debug!(
            new_friendships = outcome.new_friendships,
            proposals = outcome.proposals,
            declined = outcome.declined,
            encounters = outcome.encounters,
            rejected = outcome.rejected,
            skipped = outcome.skipped_agents,
            "day processed"
        );
        Ok(outcome)
    }
}

/// `true` iff each of `a` and `b` likes the other at least as much as its
/// own friend threshold.
#[inline]
pub fn mutual_acceptance(ctx: &DayContext<'_>, a: AgentId, b: AgentId) -> bool {
    let thresholds = &ctx.agents.friend_threshold;
    ctx.like_scores.get(a, b) >= thresholds[a.index()]
        && ctx.like_scores.get(b, a) >= thresholds[b.index()]
}

/// Simulate one day: prepare the day state from the current graph, then
/// process every agent.  Returns the day's counters.
pub fn simulate_day(
    ctx:   &DayContext<'_>,
    graph: &mut FriendGraph,
    rng:   &mut SimRng,
) -> ScheduleResult<DayOutcome> {
    DayState::prepare(ctx, graph, rng)?.process(ctx, graph, rng)
}
