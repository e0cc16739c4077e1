//! Core domain types for tic-tac-toe.

use super::action::{Action, MoveError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Every transition produces a new `Board` and
/// leaves its parent untouched, so boards in a search tree never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(rows: [[Square; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { rows }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.rows
    }

    /// Gets the square at the given action's coordinates.
    ///
    /// Returns `None` when the coordinates fall outside the grid.
    pub fn get(&self, action: Action) -> Option<Square> {
        self.rows
            .get(action.row)
            .and_then(|row| row.get(action.col))
            .copied()
    }

    /// Checks if the square at `action` is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Iterates over every square in row-major order with its coordinates.
    pub fn squares(&self) -> impl Iterator<Item = (Action, Square)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, square)| (Action::new(row, col), *square))
        })
    }

    /// Counts the squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|(_, square)| *square == Square::Occupied(player))
            .count()
    }

    /// Compact row-major notation, e.g. `XX./OO./...`; parses back with `FromStr`.
    pub fn notation(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(|s| s.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Returns a copy of the board with one square replaced.
    ///
    /// Callers must pass in-bounds coordinates.
    pub(crate) fn with_square(mut self, action: Action, square: Square) -> Self {
        self.rows[action.row][action.col] = square;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            let [a, b, c] = row.map(Square::symbol);
            write!(f, "{a}|{b}|{c}")?;
            if idx + 1 < BOARD_SIZE {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = MoveError;

    /// Parses nine cell symbols in row-major order.
    ///
    /// `X`/`O` mark a player, `.` or `_` mark an empty square. Whitespace
    /// and the grid characters `/`, `|`, `-` and `+` are ignored, so the
    /// `Display` form parses back.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(*c, '/' | '|' | '-' | '+'))
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Player::X)),
                'O' => Ok(Square::Occupied(Player::O)),
                '.' | '_' => Ok(Square::Empty),
                other => Err(MoveError::Parse(format!("unknown square symbol '{other}'"))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(MoveError::Parse(format!(
                "expected {} squares, found {}",
                BOARD_SIZE * BOARD_SIZE,
                cells.len()
            )));
        }

        let mut board = Board::new();
        for (idx, square) in cells.into_iter().enumerate() {
            board.rows[idx / BOARD_SIZE][idx % BOARD_SIZE] = square;
        }
        Ok(board)
    }
}
