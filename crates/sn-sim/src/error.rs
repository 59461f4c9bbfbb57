use sn_agent::AgentError;
use sn_analytics::AnalyticsError;
use sn_core::SnError;
use sn_graph::GraphError;
use sn_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] SnError),

    #[error("{what} covers {got} agents but the population has {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}

pub type SimResult<T> = Result<T, SimError>;
