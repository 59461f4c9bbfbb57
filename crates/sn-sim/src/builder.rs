//! Fluent builder for constructing a [`Sim`].

use sn_agent::{AgentStore, LikeScoreMatrix, generate};
use sn_core::{SimConfig, SimRng};
use sn_graph::FriendGraph;
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                              |
/// |---------------------|------------------------------------------------------|
/// | `.agents(store)`    | Generated from `config` with the run's RNG           |
/// | `.like_scores(m)`   | Computed from the agents and `initial_score_range`   |
///
/// Setup draws from the single run RNG in a fixed order (agents first, then
/// like scores), so supplying one input changes the draws for the rest.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .like_scores(LikeScoreMatrix::filled(config.num_agents, 1.0))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:      SimConfig,
    agents:      Option<AgentStore>,
    like_scores: Option<LikeScoreMatrix>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, agents: None, like_scores: None }
    }

    /// Use a hand-built population instead of generating one.  Must hold
    /// exactly `config.num_agents` agents.
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Force the like scores instead of computing them.  Must be
    /// `num_agents × num_agents`.
    pub fn like_scores(mut self, like_scores: LikeScoreMatrix) -> Self {
        self.like_scores = Some(like_scores);
        self
    }

    /// Validate the configuration and inputs, generate whatever was not
    /// supplied, and return a [`Sim`] positioned before day 0.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let expected = config.num_agents;
        let mut rng = SimRng::new(config.seed);

        let agents = match self.agents {
            Some(a) => {
                if a.count != expected {
                    return Err(SimError::AgentCountMismatch {
                        expected,
                        got:  a.count,
                        what: "agent store",
                    });
                }
                a
            }
            None => generate(
                expected,
                config.min_friends_per_agent,
                config.max_friends_per_agent,
                &mut rng,
            )?,
        };

        let like_scores = match self.like_scores {
            Some(m) => {
                m.check_covers(&agents)?;
                m
            }
            None => LikeScoreMatrix::compute(&agents, config.initial_score_range, &mut rng),
        };

        info!(
            seed = config.seed,
            agents = expected,
            days = config.num_days,
            work_bound = config.work_bound(),
            "simulation built"
        );

        Ok(Sim::from_parts(config, rng, agents, like_scores, FriendGraph::new(expected)))
    }
}
