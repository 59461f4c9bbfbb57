//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `day_metrics`, `friendships` and `agents`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentRow, DayMetricRow, FriendshipRow, OutputResult};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    ///
    /// Tables left by an earlier run in the same directory are dropped, so a
    /// rerun replaces its output the same way the CSV backend does.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS day_metrics;
             DROP TABLE IF EXISTS friendships;
             DROP TABLE IF EXISTS agents;
             CREATE TABLE day_metrics (
                 day    INTEGER NOT NULL,
                 metric TEXT    NOT NULL,
                 value  REAL,
                 PRIMARY KEY (day, metric)
             );
             CREATE TABLE friendships (
                 day     INTEGER NOT NULL,
                 agent_a INTEGER NOT NULL,
                 agent_b INTEGER NOT NULL,
                 PRIMARY KEY (agent_a, agent_b)
             );
             CREATE TABLE agents (
                 day              INTEGER NOT NULL,
                 agent_id         INTEGER NOT NULL,
                 age              INTEGER NOT NULL,
                 gender           INTEGER NOT NULL,
                 race             INTEGER NOT NULL,
                 hobbies          TEXT    NOT NULL,
                 max_friends      INTEGER NOT NULL,
                 friend_threshold REAL    NOT NULL,
                 friends          INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_day_metrics(&mut self, rows: &[DayMetricRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO day_metrics (day, metric, value) VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.day, row.metric, row.value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_friendships(&mut self, rows: &[FriendshipRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO friendships (day, agent_a, agent_b) VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.day, row.agent_a, row.agent_b])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agents \
                 (day, agent_id, age, gender, race, hobbies, max_friends, friend_threshold, friends) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.day,
                    row.agent_id,
                    row.age,
                    row.gender,
                    row.race,
                    row.hobbies,
                    row.max_friends,
                    row.friend_threshold,
                    row.friends,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
