//! First-class action types for tic-tac-toe.
//!
//! An action names a square by zero-based `(row, col)` coordinates. Actions
//! are plain data: they may hold out-of-range coordinates, which the rules
//! reject when the action is applied.

use super::types::BOARD_SIZE;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Position labels in row-major order.
const LABELS: [[&str; BOARD_SIZE]; BOARD_SIZE] = [
    ["Top-left", "Top-center", "Top-right"],
    ["Middle-left", "Center", "Middle-right"],
    ["Bottom-left", "Bottom-center", "Bottom-right"],
];

/// A move target on the board.
///
/// Ordering is row-major, so ordered collections of actions iterate
/// top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true when both coordinates lie on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Human-readable label for this square, if it is on the board.
    pub fn label(&self) -> Option<&'static str> {
        LABELS.get(self.row).and_then(|row| row.get(self.col)).copied()
    }

    /// Finds the action whose label matches `s` (case-insensitive).
    #[instrument]
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        LABELS.iter().enumerate().find_map(|(row, labels)| {
            labels
                .iter()
                .position(|label| label.to_lowercase() == wanted)
                .map(|col| Action::new(row, col))
        })
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl std::str::FromStr for Action {
    type Err = MoveError;

    /// Parses `"row,col"`, `"row col"` or a position label.
    ///
    /// Coordinates are not range-checked here.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(action) = Action::from_label(s) {
            return Ok(action);
        }

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row = row
                    .parse::<usize>()
                    .map_err(|e| MoveError::Parse(format!("invalid row '{row}': {e}")))?;
                let col = col
                    .parse::<usize>()
                    .map_err(|e| MoveError::Parse(format!("invalid column '{col}': {e}")))?;
                Ok(Action::new(row, col))
            }
            _ => Err(MoveError::Parse(format!(
                "expected 'row,col' or a position label, got '{}'",
                s.trim()
            ))),
        }
    }
}

/// Coordinates outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid action ({}, {}): coordinates must be between 0 and 2", row, col)]
pub struct InvalidActionError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl From<Action> for InvalidActionError {
    fn from(action: Action) -> Self {
        Self {
            row: action.row,
            col: action.col,
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates are off the board.
    #[display("{}", _0)]
    InvalidAction(InvalidActionError),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Action),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Input could not be understood.
    #[display("Parse error: {}", _0)]
    Parse(String),
}

impl std::error::Error for MoveError {}

impl From<InvalidActionError> for MoveError {
    fn from(err: InvalidActionError) -> Self {
        MoveError::InvalidAction(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_ordering() {
        let mut actions = vec![Action::new(2, 0), Action::new(0, 2), Action::new(1, 1), Action::new(0, 0)];
        actions.sort();
        assert_eq!(
            actions,
            vec![Action::new(0, 0), Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)]
        );
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!("0,2".parse::<Action>(), Ok(Action::new(0, 2)));
        assert_eq!(" 1 1 ".parse::<Action>(), Ok(Action::new(1, 1)));
        assert_eq!("2, 0".parse::<Action>(), Ok(Action::new(2, 0)));
    }

    #[test]
    fn test_parse_does_not_range_check() {
        let action: Action = "7,1".parse().expect("parses");
        assert!(!action.in_bounds());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("center".parse::<Action>(), Ok(Action::new(1, 1)));
        assert_eq!("Bottom-Right".parse::<Action>(), Ok(Action::new(2, 2)));
        assert_eq!(Action::new(0, 1).label(), Some("Top-center"));
        assert_eq!(Action::new(3, 1).label(), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("".parse::<Action>(), Err(MoveError::Parse(_))));
        assert!(matches!("1".parse::<Action>(), Err(MoveError::Parse(_))));
        assert!(matches!("-1,0".parse::<Action>(), Err(MoveError::Parse(_))));
        assert!(matches!("a,b".parse::<Action>(), Err(MoveError::Parse(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = MoveError::from(InvalidActionError::from(Action::new(3, 0)));
        assert!(err.to_string().contains("(3, 0)"));
        assert!(MoveError::SquareOccupied(Action::new(1, 1)).to_string().contains("occupied"));
    }
}
