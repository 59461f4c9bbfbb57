//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `day_metrics.csv`  (`day,metric,value`; empty value = not measurable)
//! - `friendships.csv`
//! - `agents.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentRow, DayMetricRow, FriendshipRow, OutputResult};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    metrics:     Writer<File>,
    friendships: Writer<File>,
    agents:      Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut metrics = Writer::from_path(dir.join("day_metrics.csv"))?;
        metrics.write_record(["day", "metric", "value"])?;

        let mut friendships = Writer::from_path(dir.join("friendships.csv"))?;
        friendships.write_record(["day", "agent_a", "agent_b"])?;

        let mut agents = Writer::from_path(dir.join("agents.csv"))?;
        agents.write_record([
            "day",
            "agent_id",
            "age",
            "gender",
            "race",
            "hobbies",
            "max_friends",
            "friend_threshold",
            "friends",
        ])?;

        Ok(Self {
            metrics,
            friendships,
            agents,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_day_metrics(&mut self, rows: &[DayMetricRow]) -> OutputResult<()> {
        for row in rows {
            self.metrics.write_record(&[
                row.day.to_string(),
                row.metric.clone(),
                row.value.map(|v| v.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_friendships(&mut self, rows: &[FriendshipRow]) -> OutputResult<()> {
        for row in rows {
            self.friendships.write_record(&[
                row.day.to_string(),
                row.agent_a.to_string(),
                row.agent_b.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.day.to_string(),
                row.agent_id.to_string(),
                row.age.to_string(),
                row.gender.to_string(),
                row.race.to_string(),
                row.hobbies.clone(),
                row.max_friends.to_string(),
                row.friend_threshold.to_string(),
                row.friends.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.friendships.flush()?;
        self.agents.flush()?;
        Ok(())
    }
}
