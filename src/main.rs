use std::path::PathBuf;
use std::{fs, io};

use anyhow::Context;
use clap::Parser;
use kingfall::chess::factory::{BoardFactory, CustomBoardFactory, InitialBoardFactory};
use kingfall::Engine;
use tracing_subscriber::EnvFilter;

/// Plays a game of Kingfall over stdin/stdout: capture the opponent's king to
/// win.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Start from a board snapshot instead of the standard layout: 8 rank
    /// lines (rank 8 first) followed by the side to move (`w` or `b`).
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set. Logs go to stderr.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let board = match &config.snapshot {
        Some(path) => {
            let snapshot = fs::read_to_string(path)
                .with_context(|| format!("failed to read snapshot {}", path.display()))?;
            CustomBoardFactory::try_from(snapshot.as_str())?.generate()?
        },
        None => InitialBoardFactory.generate()?,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut engine = Engine::new(board, stdin.lock(), stdout.lock());
    engine.game_loop()
}
