//! Batch simulation of computer-only games.

use crate::config::MatchConfig;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tictactoe_minimax::{Mark, Outcome};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::WonBy(Mark::X) => self.x_wins += 1,
            Outcome::WonBy(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} draws",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` games back to back on one handle.
#[instrument(skip(config))]
pub fn simulate(config: &MatchConfig, games: u32) -> Result<Tally> {
    if config.has_human() {
        bail!("Simulation needs two computer players");
    }

    let mut game = config.build().context("Failed to seat players")?;
    let mut tally = Tally::default();

    for round in 0..games {
        if round > 0 {
            game.new_game();
        }
        let outcome = game.play_out()?;
        debug!(round, %outcome, moves = game.history().len(), "Game finished");
        tally.record(outcome);
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}
