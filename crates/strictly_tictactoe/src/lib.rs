//! Pure tic-tac-toe game logic with exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board model**: [`initial_state`], [`player`], [`actions`], [`result`]
//! - **Rules**: [`winner`], [`terminal`], [`utility`]
//! - **Search**: [`minimax`] over [`max_value`] / [`min_value`]
//!
//! Boards are `Copy` values. Nothing in this crate mutates a board that a
//! caller can see; every transition hands back a fresh one.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{initial_state, minimax, result, Action, Board};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(minimax(&board), Some(Action::new(0, 2)));
//!
//! let opened = result(&initial_state(), Action::new(1, 1)).unwrap();
//! assert_eq!(opened.to_string(), ".|.|.\n-+-+-\n.|X|.\n-+-+-\n.|.|.");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod outcome;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use action::{Action, InvalidActionError, MoveError};
pub use outcome::Outcome;
pub use types::{Board, Player, Square, BOARD_SIZE};

// Crate-level exports - Board model
pub use board::{actions, initial_state, play, player, result};

// Crate-level exports - Rules
pub use rules::{is_full, outcome, terminal, utility, winner, Utility};

// Crate-level exports - Search
pub use search::{evaluate, max_value, min_value, minimax, principal_variation};
