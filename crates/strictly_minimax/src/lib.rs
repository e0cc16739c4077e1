//! Strictly Minimax library - terminal drivers around `strictly_tictactoe`
//!
//! # Architecture
//!
//! - **Config**: TOML play settings with command-line overrides
//! - **Game**: interactive play, self-play and position reports
//! - **Cli**: clap definitions for the `strictly_minimax` binary
//!
//! # Example
//!
//! ```
//! use strictly_minimax::selfplay;
//! use strictly_tictactoe::Outcome;
//!
//! # fn main() -> anyhow::Result<()> {
//! let outcome = selfplay(std::io::sink())?;
//! assert_eq!(outcome, Outcome::Draw);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod game;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Drivers
pub use game::{play_interactive, selfplay, SolveReport};
