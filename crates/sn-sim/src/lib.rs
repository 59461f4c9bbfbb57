//! `sn-sim`: day loop orchestrator for the rust_sn simulation.
//!
//! # Run loop
//!
//! ```text
//! setup:  agents (generated or supplied) → like-score matrix → empty graph
//! for day in 0..config.num_days:
//!   ① on_day_start
//!   ② simulate_day     - probabilities, budget, order, proposals
//!   ③ metrics          - daily counters; full analytics every
//!                        `analytics_interval_days` days
//!   ④ on_day_end, on_snapshot (analytics days only)
//! end:    analytics for the final day if not already taken, on_sim_end
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the separation BFS on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sn_core::SimConfig;
//! use sn_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{:?}", summary.get(sn_sim::metric::FRIEND_GROUPS));
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{DayMetrics, MetricsStore, RunSummary, metric};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
