//! Tests for command-line parsing and JSON reports.

use clap::Parser;
use strictly_minimax::{Cli, Command, SolveReport};
use strictly_tictactoe::{Action, Player};

#[test]
fn test_parse_solve_command() {
    let cli = Cli::try_parse_from(["strictly_minimax", "solve", "XX./OO./...", "--json"])
        .expect("valid arguments");
    match cli.command {
        Command::Solve { board, json } => {
            assert!(json);
            assert_eq!(board.notation(), "XX./OO./...");
        }
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_play_command() {
    let cli = Cli::try_parse_from(["strictly_minimax", "play", "--human", "o", "--show-evaluation"])
        .expect("valid arguments");
    match cli.command {
        Command::Play {
            human,
            config,
            show_evaluation,
        } => {
            assert_eq!(human, Some(Player::O));
            assert_eq!(config, None);
            assert!(show_evaluation);
        }
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn test_rejects_malformed_board() {
    assert!(Cli::try_parse_from(["strictly_minimax", "solve", "XX"]).is_err());
    assert!(Cli::try_parse_from(["strictly_minimax", "play", "--human", "z"]).is_err());
}

#[test]
fn test_solve_report_json() {
    let board = "XX./OO./...".parse().expect("valid board");
    let report = SolveReport::new(&board).expect("solves");
    let json: serde_json::Value = serde_json::to_value(&report).expect("serializes");

    assert_eq!(json["position"], "XX./OO./...");
    assert_eq!(json["to_move"], "X");
    assert_eq!(json["best_action"]["row"], 0);
    assert_eq!(json["best_action"]["col"], 2);
    assert_eq!(json["value"], 1);
    assert_eq!(json["outcome"]["Winner"], "X");
    assert_eq!(report.best_action, Some(Action::new(0, 2)));
}
