//! `sn-agent`: the agent model and affinity engine for `rust_sn`.
//!
//! # Crate layout
//!
//! | Module              | Contents                                               |
//! |---------------------|--------------------------------------------------------|
//! | [`characteristics`] | `Characteristics` (age, gender, race, hobbies)         |
//! | [`preferences`]     | `PreferenceParams`, derived `Preferences` vectors      |
//! | [`store`]           | `Agent`, `AgentStore` (SoA arrays)                     |
//! | [`builder`]         | `AgentStoreBuilder`, `generate`                        |
//! | [`affinity`]        | `LikeScoreMatrix`, `PreferenceTerms`                   |
//! | [`error`]           | `AgentError`, `AgentResult<T>`                         |
//!
//! Agents never hold their own friend lists.  The friendship relation lives
//! in `sn-graph` and an agent's friends are read from there.

pub mod affinity;
pub mod builder;
pub mod characteristics;
pub mod error;
pub mod preferences;
pub mod store;


pub use affinity::{LikeScoreMatrix, PreferenceTerms, preference_terms};
pub use builder::{AgentStoreBuilder, generate};
pub use characteristics::Characteristics;
pub use error::{AgentError, AgentResult};
pub use preferences::{PreferenceParams, Preferences};
pub use store::{Agent, AgentStore};
