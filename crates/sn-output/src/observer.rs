//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use sn_agent::AgentStore;
use sn_core::Day;
use sn_graph::FriendGraph;
use sn_sim::{DayMetrics, RunSummary, SimObserver};
use tracing::warn;

use crate::row::{AgentRow, DayMetricRow, FriendshipRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes day metrics, new friendships and population
/// snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:        W,
    /// Friendships already written; the graph's edge list only grows.
    edges_written: usize,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            edges_written: 0,
            last_error:    None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; later errors are dropped");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_day_end(&mut self, metrics: &DayMetrics, graph: &FriendGraph) {
        let day = metrics.day.0;
        let rows: Vec<DayMetricRow> = metrics
            .values
            .iter()
            .map(|(metric, value)| DayMetricRow { day, metric: metric.clone(), value: *value })
            .collect();
        let result = self.writer.write_day_metrics(&rows);
        self.store_err(result);

        let formed: Vec<FriendshipRow> = graph.edges()[self.edges_written..]
            .iter()
            .map(|&(a, b)| FriendshipRow { day, agent_a: a.0, agent_b: b.0 })
            .collect();
        self.edges_written = graph.edge_count();
        if !formed.is_empty() {
            let result = self.writer.write_friendships(&formed);
            self.store_err(result);
        }
    }

    fn on_snapshot(&mut self, day: Day, graph: &FriendGraph, agents: &AgentStore) {
        let rows: Vec<AgentRow> = agents
            .agent_ids()
            .map(|id| {
                let i = id.index();
                let chars = &agents.characteristics[i];
                let hobbies: Vec<String> = chars.hobbies().iter().map(u8::to_string).collect();
                AgentRow {
                    day:              day.0,
                    agent_id:         id.0,
                    age:              chars.age(),
                    gender:           chars.gender(),
                    race:             chars.race(),
                    hobbies:          hobbies.join(";"),
                    max_friends:      agents.max_friends[i],
                    friend_threshold: agents.friend_threshold[i],
                    friends:          graph.degree(id) as u32,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_agents(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_day: Day, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
