//! Degree of separation inside the largest friend group.
//!
//! For every member `v`, BFS layers out from `v` inside the group give the
//! mean hop distance to every other member:
//!
//! ```text
//! avg(v) = Σ_d  d · |layer_d|  /  (group_size − 1)
//! ```
//!
//! The group's mean, minimum (most central member) and maximum (least
//! central member) of `avg` are reported, along with the largest layer index
//! seen from any source.  That last value is reported as an approximate upper
//! bound on the group's diameter, not as an exact diameter.

use sn_core::AgentId;
use sn_graph::{FriendGraph, InducedSubgraph};
use tracing::debug;

use crate::{AnalyticsError, AnalyticsResult, FriendGroups};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparationStats {
    /// Members in the analysed group.
    pub group_size:     usize,
    /// Mean over members of their average separation.
    pub mean:           f64,
    pub min:            f64,
    /// Member with the lowest average; first in id order on ties.
    pub most_central:   AgentId,
    pub max:            f64,
    /// Member with the highest average; first in id order on ties.
    pub least_central:  AgentId,
    /// Deepest BFS layer reached from any source.
    pub max_distance:   usize,
    /// Mean friend count of the group's members.
    pub mean_friends:   f64,
}

/// Average hop distance from a BFS source given its layers (layer 0 is the
/// source alone).  Zero when the source has nobody else to reach.
pub fn average_separation(layers: &[Vec<AgentId>]) -> f64 {
    let others: usize = layers.iter().skip(1).map(Vec::len).sum();
    if others == 0 {
        return 0.0;
    }
    let weighted: usize = layers.iter().enumerate().map(|(d, layer)| d * layer.len()).sum();
    weighted as f64 / others as f64
}

/// Analyse the largest of `groups`.
///
/// Errors with [`AnalyticsError::NoComponent`] when there are no groups.
pub fn degree_of_separation(graph: &FriendGraph, groups: &FriendGroups) -> AnalyticsResult<SeparationStats> {
    let members = groups.largest().ok_or(AnalyticsError::NoComponent)?;
    let sub = InducedSubgraph::new(graph, members)?;

    let per_node = per_node_separation(&sub)?;

    let mut mean = 0.0;
    let (mut min, mut most_central) = (f64::INFINITY, AgentId::INVALID);
    let (mut max, mut least_central) = (f64::NEG_INFINITY, AgentId::INVALID);
    let mut max_distance = 0;

    for &(agent, avg, depth) in &per_node {
        mean += avg;
        if avg < min {
            min = avg;
            most_central = agent;
        }
        if avg > max {
            max = avg;
            least_central = agent;
        }
        max_distance = max_distance.max(depth);
    }
    mean /= per_node.len() as f64;

    let friend_total: usize = members.iter().map(|&m| graph.degree(m)).sum();
    let stats = SeparationStats {
        group_size: members.len(),
        mean,
        min,
        most_central,
        max,
        least_central,
        max_distance,
        mean_friends: friend_total as f64 / members.len() as f64,
    };
    debug!(
        group_size = stats.group_size,
        mean = stats.mean,
        max_distance = stats.max_distance,
        "degree of separation"
    );
    Ok(stats)
}

/// `(agent, average, deepest layer)` for every subgraph vertex, in vertex
/// order.
fn per_node_separation(sub: &InducedSubgraph) -> AnalyticsResult<Vec<(AgentId, f64, usize)>> {
    let one = |&source: &AgentId| -> AnalyticsResult<(AgentId, f64, usize)> {
        let layers = sub.bfs_layers(source)?;
        Ok((source, average_separation(&layers), layers.len().saturating_sub(1)))
    };

    #[cfg(not(feature = "parallel"))]
    {
        sub.vertices().iter().map(one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Indexed collect keeps vertex order.
        sub.vertices().par_iter().map(one).collect()
    }
}
