//! Interactive terminal session.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_minimax::{GameHandle, Outcome};
use tracing::{debug, info, instrument, warn};

/// What a line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the active player's mark at a board index (0-8).
    Place(usize),
    /// Start another game.
    NewGame,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parses a line of input. Squares are numbered 1-9 on screen.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Command::Quit),
            "n" | "new" | "restart" => Some(Command::NewGame),
            other => match other.parse::<usize>() {
                Ok(square @ 1..=9) => Some(Command::Place(square - 1)),
                _ => None,
            },
        }
    }
}

/// Runs computer turns until an interactive player is to move or the game ends.
pub fn advance_computers(game: &mut GameHandle) -> Result<Outcome> {
    while game.outcome() == Outcome::InProgress && !game.active_player().is_interactive() {
        game.play_turn()?;
    }
    Ok(game.outcome())
}

/// Plays games read from `input`, writing the board to `output`.
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    game: &mut GameHandle,
    input: R,
    mut output: W,
) -> Result<()> {
    info!("Starting interactive session");
    advance_computers(game)?;
    render(game, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let Some(command) = Command::parse(&line) else {
            writeln!(output, "Enter a square 1-9, n for a new game, or q to quit")?;
            continue;
        };
        debug!(?command, "Command received");

        match command {
            Command::Quit => break,
            Command::NewGame => {
                game.new_game();
                advance_computers(game)?;
            }
            Command::Place(index) => match game.submit_move(index) {
                Ok(_) => {
                    advance_computers(game)?;
                }
                Err(e) => {
                    warn!(error = %e, index, "Move rejected");
                    writeln!(output, "{}", e)?;
                    continue;
                }
            },
        }
        render(game, &mut output)?;
    }

    info!(games = game.games_played() + 1, "Session finished");
    Ok(())
}

fn render<W: Write>(game: &GameHandle, output: &mut W) -> Result<()> {
    writeln!(output, "\n{}\n", game.board())?;
    writeln!(output, "{}", game.status_message())?;
    if game.outcome().is_terminal() {
        writeln!(output, "Press n for a new game or q to quit")?;
    }
    output.flush()?;
    Ok(())
}
