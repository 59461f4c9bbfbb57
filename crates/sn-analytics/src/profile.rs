//! Snapshot of one agent's attributes and standing in the graph.

use sn_agent::{AgentStore, PreferenceParams};
use sn_core::AgentId;
use sn_graph::FriendGraph;

use crate::AnalyticsResult;
use crate::error::check_sizes;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentProfile {
    pub agent:            AgentId,
    pub age:              u8,
    pub gender:           u8,
    pub race:             u8,
    pub friends:          usize,
    pub friend_threshold: f64,
    pub preferences:      PreferenceParams,
}

impl AgentProfile {
    pub fn of(agents: &AgentStore, graph: &FriendGraph, agent: AgentId) -> AnalyticsResult<Self> {
        check_sizes(agents, graph)?;
        let a = agents.get(agent)?;
        Ok(Self {
            agent,
            age:              a.characteristics.age(),
            gender:           a.characteristics.gender(),
            race:             a.characteristics.race(),
            friends:          graph.degree(agent),
            friend_threshold: a.friend_threshold,
            preferences:      a.preferences.params,
        })
    }
}
