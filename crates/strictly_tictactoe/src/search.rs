//! Exhaustive minimax search.
//!
//! X maximizes [`utility`], O minimizes it. The full tree below any position
//! is at most nine plies deep, so the search walks all of it with no pruning,
//! caching or depth limit.
//!
//! Moves are tried in the row-major order produced by [`actions`], and a
//! candidate replaces the current best only when it is strictly better. Among
//! equally good moves the first one in row-major order is chosen.

use super::action::Action;
use super::board::{actions, player, successor};
use super::rules::{terminal, utility, Utility};
use super::types::{Board, Player};
use tracing::{debug, instrument};

/// Returns the optimal action for the player to move, or `None` if the game
/// is over.
#[instrument]
pub fn minimax(board: &Board) -> Option<Action> {
    if terminal(board) {
        return None;
    }
    let (value, action) = match player(board)? {
        Player::X => max_value(board),
        Player::O => min_value(board),
    };
    debug!(?action, value, "Minimax decision");
    action
}

/// Best value X can force from `board`, with the move that achieves it.
///
/// Returns the board's utility and no action when the board is terminal.
#[instrument(level = "trace", skip_all)]
pub fn max_value(board: &Board) -> (Utility, Option<Action>) {
    if terminal(board) {
        return (utility(board), None);
    }
    let mut best = (Utility::MIN, None);
    for action in actions(board) {
        let (value, _) = min_value(&successor(board, action));
        if value > best.0 {
            best = (value, Some(action));
        }
    }
    best
}

/// Best value O can force from `board`, with the move that achieves it.
///
/// Returns the board's utility and no action when the board is terminal.
#[instrument(level = "trace", skip_all)]
pub fn min_value(board: &Board) -> (Utility, Option<Action>) {
    if terminal(board) {
        return (utility(board), None);
    }
    let mut best = (Utility::MAX, None);
    for action in actions(board) {
        let (value, _) = max_value(&successor(board, action));
        if value < best.0 {
            best = (value, Some(action));
        }
    }
    best
}

/// Game-theoretic value of `board` under optimal play by both sides.
#[instrument]
pub fn evaluate(board: &Board) -> Utility {
    match player(board) {
        Some(Player::X) => max_value(board).0,
        Some(Player::O) => min_value(board).0,
        None => utility(board),
    }
}

/// The line of play that follows when both sides always take the
/// [`minimax`] move, from `board` until the game ends.
#[instrument]
pub fn principal_variation(board: &Board) -> Vec<Action> {
    let mut line = Vec::new();
    let mut current = *board;
    while let Some(action) = minimax(&current) {
        current = successor(&current, action);
        line.push(action);
    }
    line
}
