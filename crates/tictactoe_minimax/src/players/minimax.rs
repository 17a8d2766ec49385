//! Computer player driven by the minimax search.

use super::{COMPUTER_NAME, Player};
use crate::search::{Scoring, search_with};
use crate::{Board, Mark};
use tracing::debug;

/// Optimal AI: always plays the search's best move for its own mark.
#[derive(Debug, Clone)]
pub struct MinimaxAi {
    name: String,
    mark: Mark,
    scoring: Scoring,
}

impl MinimaxAi {
    /// Creates an optimal player with flat scoring.
    pub fn new(mark: Mark) -> Self {
        Self {
            name: COMPUTER_NAME.to_string(),
            mark,
            scoring: Scoring::Flat,
        }
    }

    /// Selects how terminal positions are scored.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Replaces the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the scoring in use.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }
}

impl Player for MinimaxAi {
    fn propose(&mut self, board: &Board) -> Option<usize> {
        let evaluation = search_with(board, self.mark, self.scoring);
        debug!(
            ai = %self.name,
            position = ?evaluation.index,
            score = evaluation.score,
            "Minimax AI chose position"
        );
        evaluation.index
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
