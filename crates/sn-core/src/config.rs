//! Run configuration.
//!
//! `SimConfig` is a plain struct with public fields and a `Default` that
//! matches the reference parameter set.  Applications typically load it from
//! a TOML file (with the `serde` feature) and override individual fields from
//! the command line before handing it to the simulation builder, which calls
//! [`SimConfig::validate`] and fails fast on any inconsistency.

use crate::{SnError, SnResult};

// ── ScoreRange ────────────────────────────────────────────────────────────────

/// Half-open interval `[lo, hi)` from which the random baseline of every
/// directed like score is drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRange {
    pub lo: f64,
    pub hi: f64,
}

impl ScoreRange {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// `true` when the range collapses to a single value.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self::new(0.3, 0.9)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Population size.  Must be at least 2.
    pub num_agents: usize,

    /// Lower bound (inclusive) of each agent's `max_friends`.
    pub min_friends_per_agent: u32,

    /// Upper bound (inclusive) of each agent's `max_friends`.
    pub max_friends_per_agent: u32,

    /// Lower bound (inclusive) of the daily interaction budget.
    pub min_interactions_per_day: u32,

    /// Upper bound (exclusive) of the daily interaction budget.  Equal bounds
    /// give every agent exactly `min_interactions_per_day`.
    pub max_interactions_per_day: u32,

    /// Number of days `Sim::run` simulates.
    pub num_days: u32,

    /// Extra interaction weight toward each direct friend.
    pub direct_friend_weight: f64,

    /// Extra interaction weight per friend-of-friend path.
    pub fof_weight: f64,

    /// Range of the random baseline in every like score.
    pub initial_score_range: ScoreRange,

    /// Run the graph analytics every N days.  1 = every day; 0 = only once
    /// after the final day.
    pub analytics_interval_days: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                     42,
            num_agents:               100,
            min_friends_per_agent:    3,
            max_friends_per_agent:    20,
            min_interactions_per_day: 5,
            max_interactions_per_day: 30,
            num_days:                 28,
            direct_friend_weight:     10.0,
            fof_weight:               2.0,
            initial_score_range:      ScoreRange::default(),
            analytics_interval_days:  1,
        }
    }
}

impl SimConfig {
    /// Check every field and paired bound.  Returns the first problem found
    /// as [`SnError::Config`].
    pub fn validate(&self) -> SnResult<()> {
        if self.num_agents <= 1 {
            return Err(config_err(format!(
                "num_agents must be at least 2, got {}",
                self.num_agents
            )));
        }
        if u32::try_from(self.num_agents).is_err() {
            return Err(config_err(format!(
                "num_agents {} exceeds the AgentId range",
                self.num_agents
            )));
        }
        if self.min_friends_per_agent > self.max_friends_per_agent {
            return Err(config_err(format!(
                "min_friends_per_agent ({}) > max_friends_per_agent ({})",
                self.min_friends_per_agent, self.max_friends_per_agent
            )));
        }
        if self.min_interactions_per_day > self.max_interactions_per_day {
            return Err(config_err(format!(
                "min_interactions_per_day ({}) > max_interactions_per_day ({})",
                self.min_interactions_per_day, self.max_interactions_per_day
            )));
        }
        if self.num_days == 0 {
            return Err(config_err("num_days must be positive".to_owned()));
        }
        check_weight("direct_friend_weight", self.direct_friend_weight)?;
        check_weight("fof_weight", self.fof_weight)?;

        let range = self.initial_score_range;
        if !range.lo.is_finite() || !range.hi.is_finite() {
            return Err(config_err(format!(
                "initial_score_range must be finite, got [{}, {})",
                range.lo, range.hi
            )));
        }
        if range.lo > range.hi {
            return Err(config_err(format!(
                "initial_score_range lower bound {} > upper bound {}",
                range.lo, range.hi
            )));
        }
        Ok(())
    }

    /// Upper bound on the number of partner proposals a full run can make:
    /// `num_days × num_agents × max_interactions_per_day`.
    pub fn work_bound(&self) -> u64 {
        self.num_days as u64 * self.num_agents as u64 * self.max_interactions_per_day as u64
    }
}

fn check_weight(name: &str, value: f64) -> SnResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(config_err(format!(
            "{name} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

fn config_err(msg: String) -> SnError {
    SnError::Config(msg)
}
