//! Friend groups: connected components of the friendship graph restricted to
//! agents with at least one friend.

use sn_core::AgentId;
use sn_graph::{FriendGraph, friend_groups};

use crate::{AnalyticsError, AnalyticsResult};

/// Every friend group, ordered by smallest member, each sorted ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FriendGroups {
    pub groups: Vec<Vec<AgentId>>,
}

/// Headline numbers for [`FriendGroups`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSummary {
    pub count:        usize,
    pub mean_size:    f64,
    pub largest_size: usize,
}

impl FriendGroups {
    pub fn compute(graph: &FriendGraph) -> Self {
        Self { groups: friend_groups(graph) }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The largest group.  Ties go to the group holding the smallest id.
    pub fn largest(&self) -> Option<&[AgentId]> {
        let mut best: Option<&Vec<AgentId>> = None;
        for group in &self.groups {
            if best.is_none_or(|b| group.len() > b.len()) {
                best = Some(group);
            }
        }
        best.map(Vec::as_slice)
    }

    pub fn summary(&self) -> AnalyticsResult<GroupSummary> {
        let largest_size = self.largest().ok_or(AnalyticsError::NoComponent)?.len();
        let members: usize = self.groups.iter().map(Vec::len).sum();
        Ok(GroupSummary {
            count: self.count(),
            mean_size: members as f64 / self.count() as f64,
            largest_size,
        })
    }
}
