//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `SnError` as one variant
//! where configuration problems can surface.

use thiserror::Error;

/// The top-level error type for `sn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SnError {
    /// Fatal, raised at construction time before any day is simulated.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sn-*` crates.
pub type SnResult<T> = Result<T, SnError>;
