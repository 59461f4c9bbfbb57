//! Random population generation.
//!
//! # Usage
//!
//! ```rust
//! use sn_agent::AgentStoreBuilder;
//! use sn_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let store = AgentStoreBuilder::new(100)
//!     .max_friends_range(3, 20)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(store.count, 100);
//! assert!(store.max_friends.iter().all(|&m| (3..=20).contains(&m)));
//! ```

use sn_core::SimRng;
use tracing::debug;

use crate::{Agent, AgentError, AgentResult, AgentStore, Characteristics, Preferences};

/// Lower bound (inclusive) of a generated friend threshold.
pub const MIN_FRIEND_THRESHOLD: f64 = 0.5;
/// Upper bound (exclusive) of a generated friend threshold.
pub const MAX_FRIEND_THRESHOLD: f64 = 0.9;

/// Fluent builder for a randomly generated [`AgentStore`].
///
/// All arrays are pre-allocated, then filled agent by agent so that the
/// sequence of draws for agent `k` never depends on anything generated after
/// it.
pub struct AgentStoreBuilder {
    count:           usize,
    min_max_friends: u32,
    max_max_friends: u32,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents.  `max_friends` defaults to the
    /// reference range `3..=20`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            min_max_friends: 3,
            max_max_friends: 20,
        }
    }

    /// Each agent's capacity is drawn uniformly from `min..=max`.
    pub fn max_friends_range(mut self, min: u32, max: u32) -> Self {
        self.min_max_friends = min;
        self.max_max_friends = max;
        self
    }

    /// Generate the population.
    ///
    /// Per agent, in order: capacity, friend threshold, characteristics,
    /// preference parameters.
    pub fn build(self, rng: &mut SimRng) -> AgentResult<AgentStore> {
        if self.min_max_friends > self.max_max_friends {
            return Err(AgentError::InvertedBounds {
                min: self.min_max_friends,
                max: self.max_max_friends,
            });
        }
        if u32::try_from(self.count).is_err() {
            return Err(AgentError::TooManyAgents(self.count));
        }

        let mut store = AgentStore::with_capacity(self.count);
        for _ in 0..self.count {
            let max_friends = rng.gen_range(self.min_max_friends..=self.max_max_friends);
            let friend_threshold = rng.uniform(MIN_FRIEND_THRESHOLD, MAX_FRIEND_THRESHOLD);
            let characteristics = Characteristics::random(rng);
            let preferences = Preferences::random(&characteristics, rng);
            store.push(Agent {
                max_friends,
                friend_threshold,
                characteristics,
                preferences,
            })?;
        }

        debug!(agents = store.count, "generated population");
        Ok(store)
    }
}

/// Generate `count` agents with capacities in `min_max_friends..=max_max_friends`.
pub fn generate(
    count:           usize,
    min_max_friends: u32,
    max_max_friends: u32,
    rng:             &mut SimRng,
) -> AgentResult<AgentStore> {
    AgentStoreBuilder::new(count)
        .max_friends_range(min_max_friends, max_max_friends)
        .build(rng)
}
