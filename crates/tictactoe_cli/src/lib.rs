//! Terminal front end for the tic-tac-toe minimax engine.
//!
//! - **cli**: argument parsing
//! - **config**: TOML match configuration
//! - **play**: interactive session over any reader and writer
//! - **simulate**: batch computer-only games
//! - **analyze**: best move for a single position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod cli;
pub mod config;
pub mod play;
pub mod simulate;

pub use analyze::{Analysis, analyze, side_to_move};
pub use cli::{Cli, Command};
pub use config::{ConfigError, MatchConfig, PlayerConfig, PlayerKind};
pub use play::{advance_computers, run_session};
pub use simulate::{Tally, simulate};
