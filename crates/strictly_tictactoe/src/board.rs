//! Board transitions: whose turn it is, which moves exist, and what a move
//! produces.
//!
//! Every function here takes a board by reference and returns new values.
//! Turn derivation depends on terminal detection from [`crate::rules`], but
//! both are pure functions over the same `Board`, so there is no cycle in
//! ownership.

use super::action::{Action, InvalidActionError, MoveError};
use super::rules::terminal;
use super::types::{Board, Player, Square};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Returns the starting board: every square empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next, or `None` if the game is over.
///
/// X always moves first, so O is to move exactly when X has more marks.
#[instrument(level = "trace")]
pub fn player(board: &Board) -> Option<Player> {
    if terminal(board) {
        return None;
    }
    if board.count(Player::X) > board.count(Player::O) {
        Some(Player::O)
    } else {
        Some(Player::X)
    }
}

/// Returns every empty square as an action.
///
/// The set iterates in row-major order, which fixes the order minimax
/// considers moves in.
#[instrument(level = "trace")]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    board
        .squares()
        .filter(|(_, square)| *square == Square::Empty)
        .map(|(action, _)| action)
        .collect()
}

/// Returns the board that results from the current player taking `action`.
///
/// Rejects coordinates off the grid. Otherwise the move is permissive:
/// on a finished board it returns an unchanged copy, and it overwrites an
/// occupied square without complaint. Use [`play`] for full rule checks.
#[instrument]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    if !action.in_bounds() {
        return Err(InvalidActionError::from(action));
    }
    Ok(successor(board, action))
}

/// Applies `action` after checking every rule of the game.
///
/// Fails if the coordinates are off the board, the game is already over, or
/// the target square is taken.
#[instrument]
pub fn play(board: &Board, action: Action) -> Result<Board, MoveError> {
    if !action.in_bounds() {
        return Err(InvalidActionError::from(action).into());
    }
    if terminal(board) {
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(action) {
        debug!(%action, "Rejecting move onto occupied square");
        return Err(MoveError::SquareOccupied(action));
    }
    Ok(successor(board, action))
}

/// Places the current player's mark at an in-bounds `action`.
pub(crate) fn successor(board: &Board, action: Action) -> Board {
    match player(board) {
        Some(current) => board.with_square(action, Square::Occupied(current)),
        None => *board,
    }
}
