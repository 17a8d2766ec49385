//! Exhaustive minimax search.
//!
//! The whole game tree below the given board is explored with no pruning.
//! Moves are tried in ascending index order and a child only replaces the
//! current best when it is strictly better, so ties always resolve to the
//! lowest index.

use super::rules::is_won;
use super::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position the maximizing mark has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a position the maximizing mark has lost.
pub const LOSS_SCORE: i32 = -WIN_SCORE;
/// Score of a full board with no winner.
pub const DRAW_SCORE: i32 = 0;

/// How terminal positions are scored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Scoring {
    /// Wins and losses score `±10` regardless of when they happen.
    ///
    /// The search cannot tell a win in one move from a win in five.
    #[default]
    Flat,
    /// Wins score `10 - depth` and losses `depth - 10`, so a faster win
    /// and a slower loss are preferred.
    DepthAware,
}

impl Scoring {
    fn win(self, depth: i32) -> i32 {
        match self {
            Scoring::Flat => WIN_SCORE,
            Scoring::DepthAware => WIN_SCORE - depth,
        }
    }

    fn loss(self, depth: i32) -> i32 {
        match self {
            Scoring::Flat => LOSS_SCORE,
            Scoring::DepthAware => depth - WIN_SCORE,
        }
    }
}

/// Result of a search: the chosen move and its game-theoretic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Best move, or `None` when the board was already terminal.
    pub index: Option<usize>,
    /// Score from the maximizing mark's point of view.
    pub score: i32,
}

impl Evaluation {
    fn leaf(score: i32) -> Self {
        Self { index: None, score }
    }
}

/// Finds the best move for `maximizer` with flat scoring.
pub fn search(board: &Board, maximizer: Mark) -> Evaluation {
    search_with(board, maximizer, Scoring::Flat)
}

/// Finds the best move for `maximizer`, assuming both sides play perfectly.
///
/// `maximizer` is also the side on move at the root. A terminal board yields
/// its terminal score and no move.
#[instrument(skip(board), fields(empty = board.available_moves().len()))]
pub fn search_with(board: &Board, maximizer: Mark, scoring: Scoring) -> Evaluation {
    let mut scratch = *board;
    let mut nodes = 0u64;
    let evaluation = minimax(&mut scratch, maximizer, maximizer, scoring, 0, &mut nodes);
    debug_assert_eq!(&scratch, board, "search must restore every trial placement");
    debug!(
        nodes,
        index = ?evaluation.index,
        score = evaluation.score,
        "Search complete"
    );
    evaluation
}

fn minimax(
    board: &mut Board,
    player: Mark,
    maximizer: Mark,
    scoring: Scoring,
    depth: i32,
    nodes: &mut u64,
) -> Evaluation {
    *nodes += 1;

    if is_won(board, maximizer) {
        return Evaluation::leaf(scoring.win(depth));
    }
    if is_won(board, maximizer.opponent()) {
        return Evaluation::leaf(scoring.loss(depth));
    }
    let moves = board.available_moves();
    if moves.is_empty() {
        return Evaluation::leaf(DRAW_SCORE);
    }

    let maximizing = player == maximizer;
    let next = if maximizing {
        maximizer.opponent()
    } else {
        maximizer
    };

    let mut best = Evaluation {
        index: None,
        score: if maximizing { i32::MIN } else { i32::MAX },
    };

    for index in moves {
        board.set_unchecked(index, Cell::Occupied(player));
        let score = minimax(board, next, maximizer, scoring, depth + 1, nodes).score;
        board.set_unchecked(index, Cell::Empty);

        let better = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if better {
            best = Evaluation {
                index: Some(index),
                score,
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_a_draw_for_both_marks() {
        let empty = Board::new();
        for mark in [Mark::X, Mark::O] {
            let eval = search(&empty, mark);
            assert_eq!(eval.score, DRAW_SCORE);
            // Every opening draws, so the lowest index wins the tie.
            assert_eq!(eval.index, Some(0));
        }
    }

    #[test]
    fn test_terminal_boards_have_no_move() {
        let x_row = board("XXX OO. ...");
        assert_eq!(search(&x_row, Mark::X), Evaluation::leaf(WIN_SCORE));
        assert_eq!(search(&x_row, Mark::O), Evaluation::leaf(LOSS_SCORE));

        let draw = board("XOX XOO OXX");
        assert_eq!(search(&draw, Mark::X), Evaluation::leaf(DRAW_SCORE));
    }

    #[test]
    fn test_takes_immediate_win() {
        let eval = search(&board("XX. OO. ..."), Mark::X);
        assert_eq!(
            eval,
            Evaluation {
                index: Some(2),
                score: WIN_SCORE
            }
        );
    }

    #[test]
    fn test_blocks_opponent() {
        let eval = search(&board("XX. .O. ..."), Mark::O);
        assert_eq!(
            eval,
            Evaluation {
                index: Some(2),
                score: DRAW_SCORE
            }
        );
    }

    #[test]
    fn test_flat_scoring_prefers_lowest_index_among_wins() {
        // X wins at once on 8, but 3 forks and also forces a win.
        let b = board("XOO .X. ...");
        let eval = search(&b, Mark::X);
        assert_eq!(
            eval,
            Evaluation {
                index: Some(3),
                score: WIN_SCORE
            }
        );
    }

    #[test]
    fn test_depth_aware_scoring_prefers_fastest_win() {
        let b = board("XOO .X. ...");
        let eval = search_with(&b, Mark::X, Scoring::DepthAware);
        assert_eq!(
            eval,
            Evaluation {
                index: Some(8),
                score: WIN_SCORE - 1
            }
        );
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let b = board("X.. .O. ..X");
        let before = b;
        let eval = search(&b, Mark::O);
        assert_eq!(b, before);
        let index = eval.index.expect("board is not terminal");
        assert!(b.available_moves().contains(&index));
        assert!([LOSS_SCORE, DRAW_SCORE, WIN_SCORE].contains(&eval.score));
    }
}
