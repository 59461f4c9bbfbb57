//! Connected components ("friend groups").
//!
//! Only agents with at least one friend take part: an isolated agent is a
//! loner, not a group of one.

use sn_core::AgentId;

use crate::FriendGraph;

/// Partition every agent that has a friend into connected components.
///
/// Deterministic: groups are ordered by their smallest member, and each
/// group's members are sorted ascending.  Calling this twice on an unchanged
/// graph returns identical output.
///
/// Time complexity: O(V + E).
pub fn friend_groups(graph: &FriendGraph) -> Vec<Vec<AgentId>> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut groups = Vec::new();
    let mut stack = Vec::new();

    for seed in AgentId::range(n) {
        if visited[seed.index()] || graph.degree(seed) == 0 {
            continue;
        }

        // Flood fill from `seed`.
        let mut group = Vec::new();
        visited[seed.index()] = true;
        stack.push(seed);
        while let Some(v) = stack.pop() {
            group.push(v);
            for &w in graph.friends(v) {
                if !visited[w.index()] {
                    visited[w.index()] = true;
                    stack.push(w);
                }
            }
        }
        group.sort_unstable();
        groups.push(group);
    }
    groups
}
