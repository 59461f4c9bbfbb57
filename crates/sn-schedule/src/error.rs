use sn_core::AgentId;
use sn_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("interaction distribution for agent {0} has no positive weight")]
    EmptyDistribution(AgentId),

    #[error("{what} covers {got} agents but the population has {expected}")]
    SizeMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("friendship graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
