//! Computer player that picks uniformly among legal moves.

use super::{COMPUTER_NAME, Player};
use crate::{Board, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Random AI. Seed it for reproducible simulations.
#[derive(Debug, Clone)]
pub struct RandomAi {
    name: String,
    mark: Mark,
    rng: StdRng,
}

impl RandomAi {
    /// Creates a random player seeded from the operating system.
    pub fn new(mark: Mark) -> Self {
        Self::with_rng(mark, StdRng::from_entropy())
    }

    /// Creates a random player with a fixed seed.
    pub fn seeded(mark: Mark, seed: u64) -> Self {
        Self::with_rng(mark, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mark: Mark, rng: StdRng) -> Self {
        Self {
            name: COMPUTER_NAME.to_string(),
            mark,
            rng,
        }
    }

    /// Replaces the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Player for RandomAi {
    fn propose(&mut self, board: &Board) -> Option<usize> {
        let choice = board.available_moves().choose(&mut self.rng).copied();
        debug!(ai = %self.name, position = ?choice, "Random AI chose position");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposes_only_empty_squares() {
        let board: Board = "XOX O.X OXO".parse().unwrap();
        let mut ai = RandomAi::seeded(Mark::X, 7);
        for _ in 0..20 {
            assert_eq!(ai.propose(&board), Some(4));
        }
    }

    #[test]
    fn test_full_board_has_no_proposal() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(RandomAi::seeded(Mark::O, 1).propose(&board), None);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomAi::seeded(Mark::X, 42);
        let mut b = RandomAi::seeded(Mark::X, 42);
        let first: Vec<_> = (0..10).map(|_| a.propose(&board)).collect();
        let second: Vec<_> = (0..10).map(|_| b.propose(&board)).collect();
        assert_eq!(first, second);
    }
}
