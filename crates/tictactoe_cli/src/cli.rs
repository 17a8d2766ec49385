//! Command-line interface for the tic-tac-toe engine.

use crate::config::PlayerKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_minimax::Mark;

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a minimax computer player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play at the terminal against the computer
    Play {
        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Computer strategy (random or optimal)
        #[arg(long)]
        computer: Option<PlayerKind>,

        /// Mark for the human player
        #[arg(long)]
        human_mark: Option<Mark>,

        /// Let the computer open the first game
        #[arg(long)]
        computer_first: bool,

        /// Swap who opens after every game
        #[arg(long)]
        alternate: bool,

        /// Prefer faster wins and slower losses
        #[arg(long)]
        depth_aware: bool,

        /// Seed for a random computer player
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play many computer-only games and report the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Strategy for X
        #[arg(long, default_value = "optimal")]
        x: PlayerKind,

        /// Strategy for O
        #[arg(long, default_value = "random")]
        o: PlayerKind,

        /// Seed for random players
        #[arg(long)]
        seed: Option<u64>,

        /// Swap who opens after every game
        #[arg(long)]
        alternate: bool,

        /// Prefer faster wins and slower losses
        #[arg(long)]
        depth_aware: bool,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the best move for a position
    Analyze {
        /// Nine squares, e.g. "X.O.X...." (`.`, `-` or `_` for empty)
        board: String,

        /// Mark to optimize for (defaults to the side to move)
        #[arg(long = "for")]
        mark: Option<Mark>,

        /// Prefer faster wins and slower losses
        #[arg(long)]
        depth_aware: bool,
    },
}
