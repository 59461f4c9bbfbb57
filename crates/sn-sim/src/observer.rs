//! Simulation observer trait for progress reporting and data collection.

use sn_agent::AgentStore;
use sn_core::Day;
use sn_graph::FriendGraph;

use crate::{DayMetrics, RunSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// day loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_day_end(&mut self, metrics: &DayMetrics, _graph: &FriendGraph) {
///         println!("{}: {:?}", metrics.day, metrics.get(metric::NEW_FRIENDSHIPS));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the day is simulated.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called after the day's metrics have been recorded.  `graph` already
    /// holds the day's new friendships.
    fn on_day_end(&mut self, _metrics: &DayMetrics, _graph: &FriendGraph) {}

    /// Called on every day the analytics ran, with read-only access to the
    /// full graph and population.
    fn on_snapshot(&mut self, _day: Day, _graph: &FriendGraph, _agents: &AgentStore) {}

    /// Called once after the final day.
    fn on_sim_end(&mut self, _final_day: Day, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
