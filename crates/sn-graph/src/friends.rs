//! The friendship relation.
//!
//! # Data layout
//!
//! Each agent has a sorted adjacency `Vec<AgentId>`; membership tests are a
//! binary search and neighbor iteration is a contiguous scan.  A parallel
//! edge list records every friendship once, as `(lower id, higher id)`, in
//! the order friendships formed.
//!
//! `FriendGraph` is the only place friendships are stored.  An agent's friend
//! set is `graph.friends(id)`; nothing else keeps a copy.
//!
//! Edges are never removed, so the relation on day `k` is always a subset of
//! the relation on day `k + 1`.

use sn_core::AgentId;

use crate::{GraphError, GraphResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FriendGraph {
    adjacency: Vec<Vec<AgentId>>,
    edges:     Vec<(AgentId, AgentId)>,
}

impl FriendGraph {
    /// A relation over `agent_count` agents with no friendships.
    pub fn new(agent_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); agent_count],
            edges:     Vec::new(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of friendships (unordered pairs).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Record that `a` and `b` are friends.
    ///
    /// Returns `Ok(true)` if the pair is new and `Ok(false)` if they were
    /// already friends (idempotent).
    pub fn add_friendship(&mut self, a: AgentId, b: AgentId) -> GraphResult<bool> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        self.check(a)?;
        self.check(b)?;

        let pos_a = match self.adjacency[a.index()].binary_search(&b) {
            Ok(_) => return Ok(false),
            Err(pos) => pos,
        };
        self.adjacency[a.index()].insert(pos_a, b);

        let list_b = &mut self.adjacency[b.index()];
        let pos_b = list_b.binary_search(&a).unwrap_or_else(|p| p);
        list_b.insert(pos_b, a);

        self.edges.push((a.min(b), a.max(b)));
        Ok(true)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `a` and `b` are friends.  Unknown ids are never friends.
    #[inline]
    pub fn are_friends(&self, a: AgentId, b: AgentId) -> bool {
        self.adjacency
            .get(a.index())
            .is_some_and(|list| list.binary_search(&b).is_ok())
    }

    /// Friends of `agent`, ascending.
    ///
    /// # Panics
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn friends(&self, agent: AgentId) -> &[AgentId] {
        &self.adjacency[agent.index()]
    }

    /// Number of friends of `agent`.
    #[inline]
    pub fn degree(&self, agent: AgentId) -> usize {
        self.adjacency[agent.index()].len()
    }

    /// Every friendship once, `(lower, higher)`, in formation order.
    pub fn edges(&self) -> &[(AgentId, AgentId)] {
        &self.edges
    }

    /// Agents with no friends, ascending.
    pub fn isolated(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, list)| list.is_empty())
            .map(|(i, _)| AgentId(i as u32))
    }

    fn check(&self, agent: AgentId) -> GraphResult<()> {
        if agent.index() >= self.adjacency.len() {
            return Err(GraphError::UnknownAgent(agent));
        }
        Ok(())
    }
}
