//! `sn-analytics`: read-only structural analysis of the friendship graph.
//!
//! Nothing in this crate mutates the graph or touches the simulation RNG, so
//! any analysis may run after any day.
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`groups`]     | `FriendGroups`, `GroupSummary`                         |
//! | [`separation`] | `SeparationStats`, `degree_of_separation`              |
//! | [`loners`]     | `LonerStats`, `LonerAverages`                          |
//! | [`profile`]    | `AgentProfile` of one agent (e.g. the most central)    |
//! | [`error`]      | `AnalyticsError`, `AnalyticsResult<T>`                 |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Per-node BFS traversals run on Rayon; results unchanged.   |

pub mod error;
pub mod groups;
pub mod loners;
pub mod profile;
pub mod separation;


pub use error::{AnalyticsError, AnalyticsResult};
pub use groups::{FriendGroups, GroupSummary};
pub use loners::{LonerAverages, LonerStats};
pub use profile::AgentProfile;
pub use separation::{SeparationStats, average_separation, degree_of_separation};
