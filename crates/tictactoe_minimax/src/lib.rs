//! Tic-tac-toe engine with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: passive 3x3 grid of [`Cell`]s
//! - **Rules**: pure win and draw detection over a board snapshot
//! - **Search**: full-depth minimax with lowest-index tie-breaking
//! - **Players**: human, random and minimax move selection behind [`Player`]
//! - **GameHandle**: turn controller owning one game's state
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{GameHandle, HumanPlayer, Mark, MinimaxAi, Outcome, StartPolicy};
//!
//! let mut game = GameHandle::new(
//!     Box::new(HumanPlayer::new("Player 1", Mark::X)),
//!     Box::new(MinimaxAi::new(Mark::O)),
//!     StartPolicy::default(),
//! )?;
//!
//! // The computer answers inside the same call.
//! let outcome = game.submit_move(4)?;
//! assert_eq!(outcome, Outcome::InProgress);
//! assert_eq!(game.history().len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod players;
pub mod rules;
pub mod search;
mod types;

pub use action::{InvalidMove, Move, MoveError, SetupError};
pub use board::{Board, BoardParseError, SQUARES};
pub use game::{GameHandle, Seat, StartPolicy};
pub use players::{COMPUTER_NAME, HumanPlayer, MinimaxAi, Player, RandomAi};
pub use search::{Evaluation, Scoring, search, search_with};
pub use types::{Cell, Mark, Outcome};
