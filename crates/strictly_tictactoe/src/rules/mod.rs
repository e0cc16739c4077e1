//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board according to tic-tac-toe rules.
//! Rules are kept apart from board storage so the search can compose them.

pub mod status;
pub mod win;

pub use status::{is_full, outcome, terminal, utility, Utility};
pub use win::winner;
