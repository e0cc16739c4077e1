//! Game drivers: interactive play, self-play, and position reports.
//!
//! The drivers own turn alternation and I/O. All game knowledge comes from
//! `strictly_tictactoe`; boards are passed in and out as plain values.

use crate::config::PlayConfig;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use strictly_tictactoe::{
    evaluate, initial_state, minimax, outcome, play, player, principal_variation, result,
    Action, Board, Outcome, Player, Utility,
};
use tracing::{debug, info, instrument, warn};

/// Runs an interactive game between a human on `input` and the minimax AI.
///
/// Invalid input is reported and the human is asked again. Returns `None`
/// if `input` is exhausted before the game ends.
#[instrument(skip(input, output))]
pub fn play_interactive<R, W>(config: &PlayConfig, mut input: R, mut output: W) -> Result<Option<Outcome>>
where
    R: BufRead,
    W: Write,
{
    info!(human = %config.human(), ai = %config.ai(), "Starting interactive game");
    let mut board = initial_state();

    while let Some(to_move) = player(&board) {
        writeln!(output, "\n{board}\n")?;

        if to_move == *config.human() {
            write!(output, "{to_move} to move (row,col or label): ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                info!("Input closed before game ended");
                return Ok(None);
            }

            match line.parse::<Action>().and_then(|action| play(&board, action)) {
                Ok(next) => board = next,
                Err(e) => {
                    warn!(error = %e, input = line.trim(), "Rejected human move");
                    writeln!(output, "{e}")?;
                }
            }
        } else {
            let action = minimax(&board).ok_or_else(|| anyhow!("No move for {to_move} on a live board"))?;
            board = result(&board, action)?;
            debug!(%action, player = %to_move, "AI moved");
            writeln!(output, "AI ({to_move}) plays {action}")?;
            if *config.show_evaluation() {
                writeln!(output, "Evaluation: {}", evaluate(&board))?;
            }
        }
    }

    let outcome = outcome(&board);
    writeln!(output, "\n{board}\n")?;
    if let Some(outcome) = outcome {
        info!(%outcome, "Game over");
        writeln!(output, "{outcome}")?;
    }
    Ok(outcome)
}

/// Lets minimax play both sides from the empty board, writing each move.
#[instrument(skip(output))]
pub fn selfplay<W: Write>(mut output: W) -> Result<Outcome> {
    let mut board = initial_state();
    while let Some(action) = minimax(&board) {
        let mover = player(&board).ok_or_else(|| anyhow!("Move found on a finished board"))?;
        board = result(&board, action)?;
        writeln!(output, "{mover} plays {action}")?;
    }
    writeln!(output, "\n{board}\n")?;

    let outcome = outcome(&board).ok_or_else(|| anyhow!("Self-play stopped before the game ended"))?;
    info!(%outcome, "Self-play finished");
    writeln!(output, "{outcome}")?;
    Ok(outcome)
}

/// Analysis of a single position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// Board in compact notation.
    pub position: String,
    /// Player to move, if the game is not over.
    pub to_move: Option<Player>,
    /// Optimal action for the player to move.
    pub best_action: Option<Action>,
    /// Minimax value from X's point of view.
    pub value: Utility,
    /// Optimal continuation for both sides.
    pub principal_variation: Vec<Action>,
    /// Result at the end of the principal variation.
    pub outcome: Option<Outcome>,
}

impl SolveReport {
    /// Solves `board`.
    #[instrument(skip(board), fields(position = %board.notation()))]
    pub fn new(board: &Board) -> Result<Self> {
        let line = principal_variation(board);
        let end = line
            .iter()
            .try_fold(*board, |current, action| result(&current, *action))?;

        Ok(Self {
            position: board.notation(),
            to_move: player(board),
            best_action: line.first().copied(),
            value: evaluate(board),
            principal_variation: line,
            outcome: outcome(&end),
        })
    }
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Position: {}", self.position)?;
        match (self.to_move, self.best_action) {
            (Some(player), Some(action)) => {
                let label = action.label().unwrap_or("off-board");
                writeln!(f, "To move: {player}")?;
                writeln!(f, "Best move: {action} {label}")?;
            }
            _ => writeln!(f, "Game over")?,
        }
        writeln!(f, "Value: {}", self.value)?;
        let line = self
            .principal_variation
            .iter()
            .map(Action::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "Line: {}", if line.is_empty() { "-" } else { &line })?;
        match self.outcome {
            Some(outcome) => write!(f, "Result: {outcome}"),
            None => write!(f, "Result: unresolved"),
        }
    }
}
