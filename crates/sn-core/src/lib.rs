//! `sn-core`: foundational types for the `rust_sn` social network simulation.
//!
//! This crate is a dependency of every other `sn-*` crate.  It has no `sn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `Day` counter                                         |
//! | [`config`]      | `SimConfig`, `ScoreRange` and their validation        |
//! | [`rng`]         | `SimRng` (the single run-wide random source)          |
//! | [`error`]       | `SnError`, `SnResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ScoreRange, SimConfig};
pub use error::{SnError, SnResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::Day;
