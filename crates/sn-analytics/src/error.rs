use sn_agent::{AgentError, AgentStore};
use sn_graph::{FriendGraph, GraphError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("no friend group exists yet")]
    NoComponent,

    #[error("friendship graph covers {graph} agents but the population has {agents}")]
    SizeMismatch { agents: usize, graph: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Store and graph must describe the same population.
pub(crate) fn check_sizes(agents: &AgentStore, graph: &FriendGraph) -> AnalyticsResult<()> {
    if agents.count != graph.node_count() {
        return Err(AnalyticsError::SizeMismatch { agents: agents.count, graph: graph.node_count() });
    }
    Ok(())
}
