//! Configuration loading: optional TOML file, then command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sn_core::SimConfig;

/// Simulate a village forming friendships.
#[derive(Parser, Debug)]
#[command(name = "village")]
#[command(about = "Simulate a village forming friendships and report the network it grows")]
pub struct Args {
    /// TOML file with `SimConfig` fields; omitted fields keep their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed (base seed when --runs > 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Population size
    #[arg(long)]
    pub agents: Option<usize>,

    /// Days to simulate
    #[arg(long)]
    pub days: Option<u32>,

    /// Run the graph analytics every N days (0 = final day only)
    #[arg(long)]
    pub analytics_interval: Option<u32>,

    /// Independent runs to average
    #[arg(long, default_value_t = 1)]
    pub runs: u32,

    /// Directory for CSV output (one sub-directory per run when --runs > 1)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also write an SQLite database next to the CSV files (needs the
    /// `sqlite` build feature)
    #[arg(long, requires = "output")]
    pub sqlite: bool,
}

impl Args {
    /// Resolve the final configuration and check it.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load(path)?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(agents) = self.agents {
            config.num_agents = agents;
        }
        if let Some(days) = self.days {
            config.num_days = days;
        }
        if let Some(interval) = self.analytics_interval {
            config.analytics_interval_days = interval;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn load(path: &Path) -> Result<SimConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config file {}", path.display()))
}
