//! `sn-schedule`: the daily interaction scheduler.
//!
//! # One simulated day
//!
//! ```text
//! ① Probabilities - rebuild the row-stochastic interaction matrix from the
//!                   friendship graph as it stood at the start of the day.
//! ② Budget        - draw every agent's interactions-left counter.
//! ③ Order         - shuffle all agent ids.
//! ④ Proposals     - for each agent in that order (skipping agents that are
//!                   full or out of budget), draw its whole budget of
//!                   partners, then walk them in draw order:
//!                     spend own budget → partner busy? decline
//!                                      → spend partner budget
//!                                      → already friends / either full? no-op
//!                                      → both like each other enough? befriend
//! ```
//!
//! Friendships formed during a day change the graph immediately (capacity
//! checks see them) but only affect interaction probabilities from the next
//! day on.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`context`]     | `DayContext<'a>`: read-only inputs for one day      |
//! | [`probability`] | `InteractionWeights`, `InteractionProbabilities`     |
//! | [`sampler`]     | `CategoricalSampler` over one probability row        |
//! | [`budget`]      | `InteractionBudget`                                  |
//! | [`day`]         | `DayState`, `DayOutcome`, `simulate_day`             |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                 |

pub mod budget;
pub mod context;
pub mod day;
pub mod error;
pub mod probability;
pub mod sampler;

#[cfg(test)]
mod tests;

pub use budget::InteractionBudget;
pub use context::DayContext;
pub use day::{DayOutcome, DayState, mutual_acceptance, simulate_day};
pub use error::{ScheduleError, ScheduleResult};
pub use probability::{InteractionProbabilities, InteractionWeights};
pub use sampler::CategoricalSampler;
