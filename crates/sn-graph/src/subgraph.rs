//! Induced subgraph in Compressed Sparse Row form.
//!
//! # Data layout
//!
//! Vertices are renumbered `0..len` in the order given.  The neighbors of
//! local vertex `v` occupy
//!
//! ```text
//! targets[ out_start[v] .. out_start[v + 1] ]
//! ```
//!
//! and only include vertices inside the set.  BFS over the subgraph is then a
//! contiguous scan per vertex with a flat `Vec<u32>` distance array, which
//! matters because the separation analysis runs one BFS per vertex.

use rustc_hash::FxHashMap;
use sn_core::AgentId;

use crate::{FriendGraph, GraphError, GraphResult};

/// Sentinel for "not yet reached" in BFS distance arrays.
const UNREACHED: u32 = u32::MAX;

pub struct InducedSubgraph {
    /// Local index → agent.
    vertices:  Vec<AgentId>,
    /// Agent → local index.
    local_of:  FxHashMap<AgentId, u32>,
    /// CSR row pointer, length `vertices.len() + 1`.
    out_start: Vec<u32>,
    /// Local neighbor indices, grouped by source vertex.
    targets:   Vec<u32>,
}

impl InducedSubgraph {
    /// Induce the subgraph of `graph` on `vertices`.  Duplicate entries are
    /// ignored after the first.
    pub fn new(graph: &FriendGraph, vertices: &[AgentId]) -> GraphResult<Self> {
        let mut local_of = FxHashMap::default();
        local_of.reserve(vertices.len());
        let mut kept = Vec::with_capacity(vertices.len());
        for &v in vertices {
            if v.index() >= graph.node_count() {
                return Err(GraphError::UnknownAgent(v));
            }
            if !local_of.contains_key(&v) {
                local_of.insert(v, kept.len() as u32);
                kept.push(v);
            }
        }

        let mut out_start = Vec::with_capacity(kept.len() + 1);
        let mut targets = Vec::new();
        out_start.push(0u32);
        for &v in &kept {
            targets.extend(graph.friends(v).iter().filter_map(|f| local_of.get(f).copied()));
            out_start.push(targets.len() as u32);
        }

        Ok(Self {
            vertices: kept,
            local_of,
            out_start,
            targets,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of undirected edges inside the subgraph.
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Agents in local-index order.
    pub fn vertices(&self) -> &[AgentId] {
        &self.vertices
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.local_of.contains_key(&agent)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    #[inline]
    fn neighbors(&self, local: u32) -> &[u32] {
        let start = self.out_start[local as usize] as usize;
        let end = self.out_start[local as usize + 1] as usize;
        &self.targets[start..end]
    }

    /// Breadth-first layers from `source`: layer 0 is `[source]`, layer `k`
    /// holds every vertex at hop distance exactly `k`.  Vertices unreachable
    /// from `source` do not appear.  Within a layer, agents are in discovery
    /// order.
    pub fn bfs_layers(&self, source: AgentId) -> GraphResult<Vec<Vec<AgentId>>> {
        let start = *self
            .local_of
            .get(&source)
            .ok_or(GraphError::NotInSubgraph(source))?;

        let mut dist = vec![UNREACHED; self.len()];
        dist[start as usize] = 0;

        let mut layers = Vec::new();
        let mut frontier = vec![start];
        let mut depth = 0u32;
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for &v in &frontier {
                for &w in self.neighbors(v) {
                    if dist[w as usize] == UNREACHED {
                        dist[w as usize] = depth + 1;
                        next.push(w);
                    }
                }
            }
            layers.push(frontier.iter().map(|&v| self.vertices[v as usize]).collect());
            frontier = next;
            depth += 1;
        }
        Ok(layers)
    }
}
