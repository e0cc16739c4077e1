//! Tests for minimax search.

use strictly_tictactoe::{
    evaluate, initial_state, max_value, min_value, minimax, outcome, player, principal_variation,
    result, terminal, utility, Action, Board, Outcome, Player,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

/// Plays the board out with minimax on both sides.
fn play_out(mut board: Board) -> Board {
    while let Some(action) = minimax(&board) {
        board = result(&board, action).expect("minimax actions are in bounds");
    }
    board
}

#[test]
fn test_immediate_win_for_x() {
    let board = board("XX./OO./...");
    assert_eq!(player(&board), Some(Player::X));
    assert_eq!(minimax(&board), Some(Action::new(0, 2)));

    let after = result(&board, Action::new(0, 2)).expect("in bounds");
    assert!(terminal(&after));
    assert_eq!(utility(&after), 1);
}

#[test]
fn test_perfect_play_from_start_is_draw() {
    let end = play_out(initial_state());
    assert!(terminal(&end));
    assert_eq!(utility(&end), 0);
    assert_eq!(outcome(&end), Some(Outcome::Draw));
}

#[test]
fn test_empty_board_value_and_opening() {
    let (value, action) = max_value(&initial_state());
    assert_eq!(value, 0);
    // Every opening draws, so the first one in row-major order is kept.
    assert_eq!(action, Some(Action::new(0, 0)));
    assert_eq!(minimax(&initial_state()), Some(Action::new(0, 0)));
}

#[test]
fn test_principal_variation_from_start() {
    let line = principal_variation(&initial_state());
    assert_eq!(line.first(), Some(&Action::new(0, 0)));
    assert_eq!(line.len(), 9);

    let end = line
        .iter()
        .try_fold(initial_state(), |b, a| result(&b, *a))
        .expect("line stays on the board");
    assert_eq!(end, play_out(initial_state()));
}

#[test]
fn test_minimax_none_on_terminal_boards() {
    assert_eq!(minimax(&board("XXX/OO./...")), None);
    assert_eq!(minimax(&board("OOO/XX./X..")), None);
    assert_eq!(minimax(&board("XOX/XOO/OXX")), None);
}

#[test]
fn test_x_exploits_blunder() {
    // O answered a corner opening on an edge; X can force a win.
    let board = board("XO./.../...");
    assert_eq!(evaluate(&board), 1);
    let end = play_out(board);
    assert_eq!(outcome(&end), Some(Outcome::Winner(Player::X)));
}

#[test]
fn test_o_avoids_losing_after_corner_opening() {
    // Only the center holds the draw against a corner opening.
    let board = board("X../.../...");
    assert_eq!(min_value(&board), (0, Some(Action::new(1, 1))));
}

#[test]
fn test_o_wins_when_x_cannot_block_both() {
    // O has a double threat: top row and middle column.
    let board = board("OO./XOX/X..");
    assert_eq!(player(&board), Some(Player::X));
    assert_eq!(evaluate(&board), -1);
    assert_eq!(
        outcome(&play_out(board)),
        Some(Outcome::Winner(Player::O))
    );
}

#[test]
fn test_search_does_not_mutate_input() {
    let board = board("X../.O./...");
    let copy = board;
    let _ = minimax(&board);
    let _ = principal_variation(&board);
    assert_eq!(board, copy);
}
