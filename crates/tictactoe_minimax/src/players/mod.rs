//! Player trait and implementations.

mod human;
mod minimax;
mod random;

pub use human::HumanPlayer;
pub use minimax::MinimaxAi;
pub use random::RandomAi;

use crate::{Board, Mark};

/// Default display name for search-driven players.
pub const COMPUTER_NAME: &str = "Computer";

/// A seat at the table: a named mark with a way of choosing moves.
pub trait Player: std::fmt::Debug + Send {
    /// Proposes the next move for this player's mark on `board`.
    ///
    /// Interactive players return `None`; their moves arrive through
    /// [`GameHandle::submit_move`](crate::GameHandle::submit_move).
    fn propose(&mut self, board: &Board) -> Option<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the mark this player places.
    fn mark(&self) -> Mark;

    /// True when moves are supplied from outside the engine.
    fn is_interactive(&self) -> bool {
        false
    }
}
