//! Win detection logic for tic-tac-toe.

use super::super::{Action, Board, Player, Square};
use tracing::instrument;

const fn at(row: usize, col: usize) -> Action {
    Action { row, col }
}

/// Every line of three, in scan order: rows, then columns, then diagonals.
const LINES: [[Action; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Returns the winner of the board, if there is one.
///
/// The first complete line in scan order decides, so an overfull board with
/// two winning lines always reports the same player.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Some(Square::Occupied(player)) if sq == board.get(b) && sq == board.get(c) => {
                Some(player)
            }
            _ => None,
        }
    })
}
