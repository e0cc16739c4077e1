//! Game status: terminal detection and scoring.

use super::super::{Board, Outcome, Player, Square};
use super::win::winner;
use tracing::instrument;

/// Signed value of a board from X's point of view.
pub type Utility = i32;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|(_, s)| s != Square::Empty)
}

/// Returns true if the game is over: someone has won or no square is empty.
#[instrument(level = "trace")]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a board: `1` if X has won, `-1` if O has won, `0` otherwise.
///
/// Meant for terminal boards; an unfinished board scores `0`.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Outcome of the board, or `None` while the game is still in progress.
#[instrument]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_empty_board_not_terminal() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!terminal(&board));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board("XOX/OXX/OXO");
        assert!(is_full(&board));
        assert_eq!(winner(&board), None);
        assert!(terminal(&board));
        assert_eq!(utility(&board), 0);
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_win_is_terminal_before_board_fills() {
        let board = board("XXX/OO./...");
        assert!(!is_full(&board));
        assert!(terminal(&board));
        assert_eq!(utility(&board), 1);
        assert_eq!(outcome(&board), Some(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_o_win_scores_negative() {
        let board = board("XX./OOO/X..");
        assert_eq!(utility(&board), -1);
        assert_eq!(outcome(&board).and_then(|o| o.winner()), Some(Player::O));
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let board = board("XOX/OXO/OXX");
        assert!(is_full(&board));
        assert_eq!(outcome(&board), Some(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_unfinished_board_scores_zero() {
        assert_eq!(utility(&board("X../.O./...")), 0);
    }
}
