//! Interactive player whose moves come from the caller.

use super::Player;
use crate::{Board, Mark};

/// Human player. The engine never picks a move on their behalf.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    mark: Mark,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

impl Player for HumanPlayer {
    fn propose(&mut self, _board: &Board) -> Option<usize> {
        None
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
