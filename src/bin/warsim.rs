//! Bulk War simulation binary.
//!
//! Plays a configurable number of games, prints aggregate statistics,
//! and optionally writes the full hands/tiebreaks sequences as JSON
//! for external plotting.
//!
//! Options: --games, --seed, --threads, --hand-limit, --out

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use war_sim::{SimConfig, SimRunner, Summary};

#[derive(Parser, Debug)]
#[command(name = "warsim", about = "Simulates the card game War in bulk")]
struct Args {
    /// Number of games to simulate.
    #[arg(long, default_value_t = 10_000)]
    games: usize,

    /// Base RNG seed; the outcome sequence is reproducible per seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads (0 = one per core, 1 = sequential).
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Abort the run if any game exceeds this many hands.
    #[arg(long)]
    hand_limit: Option<u32>,

    /// Write the summary, full sequences included, to this JSON file.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = SimConfig::new()
        .with_games(args.games)
        .with_seed(args.seed)
        .with_threads(args.threads)
        .with_cutoff(args.hand_limit);

    let outcomes = match SimRunner::new(config).run() {
        Ok(outcomes) => outcomes,
        Err(e) => {
            log::error!("run aborted: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let summary = Summary::from_outcomes(&outcomes);
    println!("{}", summary);

    if let Some(path) = args.out {
        if let Err(e) = summary.write_json(&path) {
            log::error!("failed to write {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        log::info!("wrote summary to {}", path.display());
    }

    ExitCode::SUCCESS
}
