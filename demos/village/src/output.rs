//! Writing one run's output directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use sn_output::{CsvWriter, OutputWriter, SimOutputObserver};
use sn_sim::{RunSummary, Sim};

/// Run `sim` to completion, writing CSV files into `dir`.  With `sqlite`
/// an `output.db` is written alongside them.  A failed write fails the run.
pub fn run_to_dir(sim: &mut Sim, dir: &Path, sqlite: bool) -> Result<RunSummary> {
    fs::create_dir_all(dir)?;
    let csv = CsvWriter::new(dir)?;

    if sqlite {
        #[cfg(feature = "sqlite")]
        {
            let db = sn_output::SqliteWriter::new(dir)?;
            return run_with(sim, (csv, db));
        }
        #[cfg(not(feature = "sqlite"))]
        {
            anyhow::bail!("--sqlite needs a build with the `sqlite` feature");
        }
    }
    run_with(sim, csv)
}

fn run_with<W: OutputWriter>(sim: &mut Sim, writer: W) -> Result<RunSummary> {
    let mut obs = SimOutputObserver::new(writer);
    let summary = sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }
    Ok(summary)
}
