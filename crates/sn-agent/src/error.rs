use sn_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{field} {value} outside the allowed range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min:   u32,
        max:   u32,
    },

    #[error("hobby {0} listed more than once")]
    DuplicateHobby(u8),

    #[error("max_friends bounds inverted: {min} > {max}")]
    InvertedBounds { min: u32, max: u32 },

    #[error("agent count {0} exceeds the AgentId range")]
    TooManyAgents(usize),

    #[error("like-score matrix must be square with {expected} rows of {expected}; row {row} has {got}")]
    NotSquare {
        expected: usize,
        row:      usize,
        got:      usize,
    },

    #[error("like-score matrix covers {matrix} agents but the store holds {agents}")]
    SizeMismatch { matrix: usize, agents: usize },

    #[error("agent {0} not found")]
    NotFound(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
