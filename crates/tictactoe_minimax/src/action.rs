//! Moves and the errors raised when submitting them.

use super::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a board index (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Row-major board index.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Why a board index cannot take a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// Index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for InvalidMove {}

/// Error returned by the turn controller.
///
/// The game is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveError {
    /// The index is out of range or the square is taken.
    #[display("Invalid move: {}", _0)]
    #[from]
    InvalidMove(InvalidMove),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An automatic move was requested while an interactive player is to move.
    #[display("It's {}'s turn and they choose their own moves", _0)]
    NotComputerTurn(String),

    /// An external move was submitted while a search-driven player is to move.
    #[display("It's {}'s turn and they choose moves by search", _0)]
    NotHumanTurn(String),

    /// A search-driven player had no move on a board still in progress.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error raised while seating players.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Both players were given the same mark.
    #[display("Both players use mark {}", _0)]
    DuplicateMark(Mark),
}

impl std::error::Error for SetupError {}
