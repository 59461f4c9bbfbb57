//! Plain data row types written by output backends.

/// One metric value recorded at the end of a day.  Long format: one row per
/// `(day, metric)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayMetricRow {
    pub day:    u32,
    pub metric: String,
    /// `None` when the metric was not measurable that day.
    pub value:  Option<f64>,
}

/// A friendship and the day it formed.  `agent_a < agent_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriendshipRow {
    pub day:     u32,
    pub agent_a: u32,
    pub agent_b: u32,
}

/// One agent's fixed attributes and friend count at a snapshot day.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRow {
    pub day:              u32,
    pub agent_id:         u32,
    pub age:              u8,
    pub gender:           u8,
    pub race:             u8,
    /// Sorted hobby ids joined with `;`, e.g. `1;4;9;17`.
    pub hobbies:          String,
    pub max_friends:      u32,
    pub friend_threshold: f64,
    pub friends:          u32,
}
