//! Five-in-a-row command line
//!
//! Plays single games with a replay window, runs competitions and training
//! rounds between the agents described by a match config.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use fiverow::config::MatchConfig;
use fiverow::ui::{frames, run_replay, ReplayApp};
use fiverow::{compete, play, train, Agent};

#[derive(Parser, Debug)]
#[command(name = "fiverow", about = "Five-in-a-row agents: play, compete, train")]
struct Args {
    /// Match config (TOML). Defaults: good agent 3 vs greedy agent 4 on 5x5.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one game and replay it
    Play {
        /// Print the result without opening the replay window
        #[arg(long)]
        no_replay: bool,
    },
    /// Tally the results of N games
    Compete {
        /// Number of games (overrides the config)
        #[arg(short, long)]
        n: Option<u32>,
    },
    /// Training rounds of N games, followed by a competition
    Train {
        /// Games per round (overrides the config)
        #[arg(short, long)]
        n: Option<u32>,

        /// Upper bound on training rounds (overrides the config)
        #[arg(long)]
        max_rounds: Option<u32>,
    },
}

/// The config at `path`, or the defaults when none is given
fn load_config(path: Option<&Path>) -> Result<MatchConfig> {
    match path {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(MatchConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let (mut agent0, mut agent1) = config.build_agents().context("building agents")?;

    match args.command {
        Command::Play { no_replay } => {
            let record = play(config.size, &mut agent0, &mut agent1);
            println!("{}", record.trace.last().map(ToString::to_string).unwrap_or_default());
            println!("Result for {}: {:?}", agent0.name(), record.result);

            if !no_replay {
                let app = ReplayApp::new(
                    frames(&record.trace),
                    [agent0.name(), agent1.name()],
                    record.result,
                    Duration::from_millis(config.replay.frame_interval_ms),
                );
                run_replay(app).map_err(|e| anyhow!("running replay viewer: {e}"))?;
            }
        }
        Command::Compete { n } => {
            let tally = compete(&mut agent0, &mut agent1, config.size, n.unwrap_or(config.games));
            println!("Results:\n\tWon: {}\n\tLost: {}\n\tDraw: {}", tally.won, tally.lost, tally.draw);
        }
        Command::Train { n, max_rounds } => {
            let n = n.unwrap_or(config.games);
            let report = train(
                &mut agent0,
                &mut agent1,
                config.size,
                n,
                max_rounds.unwrap_or(config.max_rounds),
            );
            println!("Training rounds: {} ({:?})", report.rounds.len(), report.stop);

            let tally = compete(&mut agent0, &mut agent1, config.size, n);
            println!("{}\n{}\n{}", agent0.name(), agent1.name(), tally);
        }
    }

    Ok(())
}
