//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from board
//! storage so the search and the turn controller share one definition of
//! a finished game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, is_won};

use super::{Board, Outcome};

/// Derives the outcome from a board snapshot.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::WonBy(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
