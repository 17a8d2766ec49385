//! One-shot position analysis.

use anyhow::{Context, Result};
use serde::Serialize;
use tictactoe_minimax::{Board, Evaluation, Mark, Outcome, Scoring, rules, search_with};
use tracing::instrument;

/// Analysis of a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The position analyzed.
    pub board: Board,
    /// Mark the search optimized for.
    pub mark: Mark,
    /// Outcome of the position as given.
    pub outcome: Outcome,
    /// Search result.
    pub evaluation: Evaluation,
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}\n", self.board)?;
        match self.evaluation.index {
            Some(index) => {
                let verdict = match self.evaluation.score {
                    s if s > 0 => "forced win",
                    s if s < 0 => "forced loss",
                    _ => "draw",
                };
                write!(
                    f,
                    "Best move for {}: square {} (score {}, {})",
                    self.mark,
                    index + 1,
                    self.evaluation.score,
                    verdict
                )
            }
            None => write!(f, "Game over: {}", self.outcome),
        }
    }
}

/// The side to move, assuming X opened.
pub fn side_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

/// Parses `text` and searches it for `mark`, or the side to move.
#[instrument]
pub fn analyze(text: &str, mark: Option<Mark>, scoring: Scoring) -> Result<Analysis> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid board {:?}", text))?;
    let mark = mark.unwrap_or_else(|| side_to_move(&board));

    Ok(Analysis {
        board,
        mark,
        outcome: rules::outcome(&board),
        evaluation: search_with(&board, mark, scoring),
    })
}
