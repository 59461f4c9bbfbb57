//! Graph error type.

use thiserror::Error;

use sn_core::AgentId;

/// Errors produced by `sn-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("agent {0} cannot befriend itself")]
    SelfLoop(AgentId),

    #[error("agent {0} not in the graph")]
    UnknownAgent(AgentId),

    #[error("agent {0} not in the induced subgraph")]
    NotInSubgraph(AgentId),
}

pub type GraphResult<T> = Result<T, GraphError>;
