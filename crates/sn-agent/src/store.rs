//! Agent storage: `Agent` (one fully specified agent) and `AgentStore`
//! (Structure-of-Arrays over the whole population).
//!
//! # Layout
//!
//! Every `Vec` field of [`AgentStore`] has exactly `count` elements and the
//! `AgentId` value is the index into all of them:
//!
//! ```ignore
//! let cap = store.max_friends[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! The scheduler's hot loop only touches `max_friends` and
//! `friend_threshold`, so those two live in their own dense arrays rather
//! than inside a per-agent struct.

use sn_core::AgentId;

use crate::{AgentError, AgentResult, Characteristics, Preferences};

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One agent's fixed state, used to push hand-built agents into a store and
/// returned by [`AgentStore::get`].
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    /// Friendship capacity, fixed at creation.
    pub max_friends:      u32,
    /// Minimum like score this agent requires toward a counterpart.
    pub friend_threshold: f64,
    pub characteristics:  Characteristics,
    pub preferences:      Preferences,
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all fixed agent state.
///
/// Nothing here changes after setup.  Friend sets are derived from the
/// friendship graph, never stored per agent.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub max_friends: Vec<u32>,

    /// In `[0.5, 0.9)` for generated agents.
    pub friend_threshold: Vec<f64>,

    pub characteristics: Vec<Characteristics>,

    pub preferences: Vec<Preferences>,
}

impl AgentStore {
    /// An empty store with room for `capacity` agents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            count:            0,
            max_friends:      Vec::with_capacity(capacity),
            friend_threshold: Vec::with_capacity(capacity),
            characteristics:  Vec::with_capacity(capacity),
            preferences:      Vec::with_capacity(capacity),
        }
    }

    /// Build a store from fully specified agents, numbered in slice order.
    pub fn from_agents(agents: Vec<Agent>) -> AgentResult<Self> {
        let mut store = Self::with_capacity(agents.len());
        for agent in agents {
            store.push(agent)?;
        }
        Ok(store)
    }

    /// Append an agent and return its id.
    pub fn push(&mut self, agent: Agent) -> AgentResult<AgentId> {
        let id = AgentId::try_from(self.count).map_err(|_| AgentError::TooManyAgents(self.count + 1))?;
        self.max_friends.push(agent.max_friends);
        self.friend_threshold.push(agent.friend_threshold);
        self.characteristics.push(agent.characteristics);
        self.preferences.push(agent.preferences);
        self.count += 1;
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `true` if `agent` indexes into this store.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        AgentId::range(self.count)
    }

    /// Copy out one agent's full record.
    pub fn get(&self, agent: AgentId) -> AgentResult<Agent> {
        if !self.contains(agent) {
            return Err(AgentError::NotFound(agent));
        }
        let i = agent.index();
        Ok(Agent {
            max_friends:      self.max_friends[i],
            friend_threshold: self.friend_threshold[i],
            characteristics:  self.characteristics[i],
            preferences:      self.preferences[i].clone(),
        })
    }
}
