//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentRow, DayMetricRow, FriendshipRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers, and by a pair of
/// writers that fans every call out to both.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by a simulation.
pub trait OutputWriter {
    /// Write every metric recorded for one day.
    fn write_day_metrics(&mut self, rows: &[DayMetricRow]) -> OutputResult<()>;

    /// Write a batch of newly formed friendships.
    fn write_friendships(&mut self, rows: &[FriendshipRow]) -> OutputResult<()>;

    /// Write one snapshot of the population.
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Drives two backends from one observer, e.g. CSV files plus an SQLite
/// database.  Every call reaches both writers; the first error is returned.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_day_metrics(&mut self, rows: &[DayMetricRow]) -> OutputResult<()> {
        let first = self.0.write_day_metrics(rows);
        let second = self.1.write_day_metrics(rows);
        first.and(second)
    }

    fn write_friendships(&mut self, rows: &[FriendshipRow]) -> OutputResult<()> {
        let first = self.0.write_friendships(rows);
        let second = self.1.write_friendships(rows);
        first.and(second)
    }

    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        let first = self.0.write_agents(rows);
        let second = self.1.write_agents(rows);
        first.and(second)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}
