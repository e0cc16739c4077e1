//! Strictly Minimax - Unified CLI
//!
//! Play, solve and watch perfect-play tic-tac-toe.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use strictly_minimax::{play_interactive, selfplay, Cli, Command, PlayConfig, SolveReport};
use strictly_tictactoe::{Board, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            human,
            config,
            show_evaluation,
        } => run_play(human, config, show_evaluation),
        Command::Solve { board, json } => run_solve(&board, json),
        Command::Selfplay => run_selfplay(),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(human: Option<Player>, config: Option<PathBuf>, show_evaluation: bool) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    }
    .with_overrides(human, show_evaluation);

    let stdin = io::stdin();
    let outcome = play_interactive(&config, stdin.lock(), io::stdout().lock())?;
    if outcome.is_none() {
        info!("Game abandoned");
    }
    Ok(())
}

/// Print the analysis of one position
#[instrument]
fn run_solve(board: &Board, json: bool) -> Result<()> {
    let report = SolveReport::new(board)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Let the AI play itself
#[instrument]
fn run_selfplay() -> Result<()> {
    selfplay(io::stdout().lock())?;
    Ok(())
}
