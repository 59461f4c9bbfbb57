//! `sn-output`: per-day output files for plotting and reporting tools.
//!
//! | Feature   | Backend | Files created                                           |
//! |-----------|---------|---------------------------------------------------------|
//! | *(none)*  | CSV     | `day_metrics.csv`, `friendships.csv`, `agents.csv`      |
//! | `sqlite`  | SQLite  | `output.db`                                             |
//!
//! Both backends implement [`OutputWriter`], as does a `(A, B)` pair that
//! feeds both at once.  Writers are driven by
//! [`SimOutputObserver`], which implements `sn_sim::SimObserver`.  Output is
//! write-only: nothing here can reload a run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sn_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentRow, DayMetricRow, FriendshipRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
