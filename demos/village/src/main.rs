//! village: drive the friendship simulation from the command line.
//!
//! ```text
//! village --agents 200 --days 28 --runs 5 --output output/village
//! RUST_LOG=debug village --config demos/village/village.toml
//! ```
//!
//! With `--runs N` every run gets its own seed derived from the base seed,
//! and the console summary shows the key-wise mean over all runs.

mod config;
mod output;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sn_core::{SimConfig, SimRng};
use sn_sim::{NoopObserver, RunSummary, SimBuilder, metric};

use config::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let base = args.sim_config()?;

    println!("=== village - friendship formation ===");
    println!(
        "Agents: {}  |  Days: {}  |  Seed: {}  |  Runs: {}",
        base.num_agents, base.num_days, base.seed, args.runs
    );
    println!();

    let t0 = Instant::now();
    let mut summaries = Vec::with_capacity(args.runs as usize);
    for run in 0..args.runs {
        let config = SimConfig {
            seed: if args.runs > 1 { SimRng::run_seed(base.seed, run as u64) } else { base.seed },
            ..base.clone()
        };
        let out_dir = args.output.as_ref().map(|dir| {
            if args.runs > 1 { dir.join(format!("run_{run}")) } else { dir.clone() }
        });
        let summary = run_once(config, out_dir.as_deref(), args.sqlite)?;
        info!(run, friendships = summary.get(metric::TOTAL_FRIENDSHIPS), "run complete");
        summaries.push(summary);
    }
    let elapsed = t0.elapsed();

    let summary = RunSummary::average(&summaries);
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    if args.runs > 1 {
        println!("Mean over {} runs:", args.runs);
    }
    print_summary(&summary);
    Ok(())
}

/// One full run, writing output files when `out_dir` is given.
fn run_once(config: SimConfig, out_dir: Option<&Path>, sqlite: bool) -> Result<RunSummary> {
    let mut sim = SimBuilder::new(config).build()?;
    match out_dir {
        Some(dir) => output::run_to_dir(&mut sim, dir, sqlite),
        None => Ok(sim.run(&mut NoopObserver)?),
    }
}

fn print_summary(summary: &RunSummary) {
    let rows = [
        ("Friendships", metric::TOTAL_FRIENDSHIPS),
        ("Friend groups", metric::FRIEND_GROUPS),
        ("Mean group size", metric::MEAN_GROUP_SIZE),
        ("Mean separation", metric::MEAN_SEPARATION),
        ("Min separation", metric::MIN_SEPARATION),
        ("Max separation", metric::MAX_SEPARATION),
        ("Max distance", metric::MAX_DISTANCE),
        ("Mean friends (largest)", metric::MEAN_FRIENDS_LARGEST_GROUP),
        ("Loners", metric::LONERS),
    ];

    println!("{:<24} {:>10}", "Metric", "Value");
    println!("{}", "-".repeat(35));
    for (label, key) in rows {
        match summary.get(key) {
            Some(v) => println!("{label:<24} {v:>10.3}"),
            None => println!("{label:<24} {:>10}", "n/a"),
        }
    }

    println!();
    println!("{:<24} {:>10} {:>10}", "Profile", "Most", "Least");
    println!("{}", "-".repeat(46));
    for field in ["age", "gender", "race", "friends", "friend_threshold"] {
        let most = summary.get(&metric::key(metric::MOST_CENTRAL, field));
        let least = summary.get(&metric::key(metric::LEAST_CENTRAL, field));
        println!("{field:<24} {:>10} {:>10}", fmt_opt(most), fmt_opt(least));
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.3}")).unwrap_or_else(|| "n/a".to_owned())
}
