//! Properties of the minimax search over reachable positions.

use std::collections::HashSet;
use tictactoe_minimax::rules::{self, is_won};
use tictactoe_minimax::search::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use tictactoe_minimax::{Board, Mark, Outcome, search};

/// Every board reachable from the empty board with X moving first,
/// paired with the mark to move.
fn reachable() -> Vec<(Board, Mark)> {
    fn walk(
        board: Board,
        to_move: Mark,
        seen: &mut HashSet<Board>,
        out: &mut Vec<(Board, Mark)>,
    ) {
        if !seen.insert(board) {
            return;
        }
        out.push((board, to_move));
        if rules::outcome(&board).is_terminal() {
            return;
        }
        for index in board.available_moves() {
            let mut next = board;
            next.apply(index, to_move).unwrap();
            walk(next, to_move.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), Mark::X, &mut seen, &mut out);
    out
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable().len(), 5478);
}

#[test]
fn test_never_two_winners() {
    for (board, _) in reachable() {
        assert!(
            !(is_won(&board, Mark::X) && is_won(&board, Mark::O)),
            "both marks won on\n{}",
            board
        );
    }
}

#[test]
fn test_empty_board_scores_zero() {
    assert_eq!(search(&Board::new(), Mark::X).score, DRAW_SCORE);
    assert_eq!(search(&Board::new(), Mark::O).score, DRAW_SCORE);
}

#[test]
fn test_chosen_move_is_always_available() {
    // Covers every reachable position, the empty board included.
    let positions = reachable();
    assert!(positions.iter().any(|(b, _)| b.available_moves().len() == 9));
    for (board, to_move) in positions {
        let before = board;
        let eval = search(&board, to_move);
        assert_eq!(board, before);
        assert!([LOSS_SCORE, DRAW_SCORE, WIN_SCORE].contains(&eval.score));

        match rules::outcome(&board) {
            Outcome::InProgress => {
                let index = eval.index.expect("in-progress board must have a move");
                assert!(board.available_moves().contains(&index));
            }
            _ => assert_eq!(eval.index, None),
        }
    }
}

#[test]
fn test_terminal_priority_order() {
    // Maximizer's own win is checked before anything else.
    let won: Board = "OOO XX. X..".parse().unwrap();
    assert_eq!(search(&won, Mark::O).score, WIN_SCORE);
    assert_eq!(search(&won, Mark::X).score, LOSS_SCORE);

    // A full board with a winner scores the win, not the draw.
    let full_win: Board = "XOX OXO OXX".parse().unwrap();
    assert_eq!(search(&full_win, Mark::X).score, WIN_SCORE);
    assert_eq!(search(&full_win, Mark::O).score, LOSS_SCORE);
}
