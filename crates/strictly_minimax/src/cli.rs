//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Board, Player};

/// Strictly Minimax - perfect-play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play or solve tic-tac-toe with exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the minimax AI
    Play {
        /// Side the human plays (x or o); overrides the config file
        #[arg(long)]
        human: Option<Player>,

        /// Path to a TOML play configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the minimax value after each AI move
        #[arg(long)]
        show_evaluation: bool,
    },

    /// Print the optimal move and line for a position
    Solve {
        /// Board in row-major notation, e.g. "XX./OO./..."
        board: Board,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the AI play both sides from the empty board
    Selfplay,
}
