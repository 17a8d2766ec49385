//! Turn controller.
//!
//! A [`GameHandle`] owns everything about one game: the board, the derived
//! outcome, both players and whose turn it is. Handles are independent, so
//! any number of games can run side by side.

use super::action::{Move, MoveError, SetupError};
use super::players::Player;
use super::{Board, Mark, Outcome, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One of the two seats at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Seat {
    /// The player passed first to [`GameHandle::new`].
    #[default]
    First,
    /// The player passed second to [`GameHandle::new`].
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    fn slot(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Who opens each new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartPolicy {
    /// The same seat opens every game.
    Fixed(Seat),
    /// The opening seat swaps on every [`GameHandle::new_game`].
    Alternate,
}

impl Default for StartPolicy {
    fn default() -> Self {
        StartPolicy::Fixed(Seat::First)
    }
}

/// A single game between two players.
#[derive(Debug)]
pub struct GameHandle {
    board: Board,
    outcome: Outcome,
    players: [Box<dyn Player>; 2],
    active: Seat,
    opener: Seat,
    policy: StartPolicy,
    history: Vec<Move>,
    games_played: u32,
}

impl GameHandle {
    /// Seats two players and starts the first game.
    ///
    /// The players must use different marks.
    #[instrument(skip(first, second), fields(first = first.name(), second = second.name()))]
    pub fn new(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        policy: StartPolicy,
    ) -> Result<Self, SetupError> {
        if first.mark() == second.mark() {
            warn!(mark = %first.mark(), "Rejecting players with the same mark");
            return Err(SetupError::DuplicateMark(first.mark()));
        }

        let opener = match policy {
            StartPolicy::Fixed(seat) => seat,
            StartPolicy::Alternate => Seat::First,
        };

        info!(?policy, %opener, "Starting new game session");
        Ok(Self {
            board: Board::new(),
            outcome: Outcome::InProgress,
            players: [first, second],
            active: opener,
            opener,
            policy,
            history: Vec::new(),
            games_played: 0,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the moves played so far in this game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the start policy.
    pub fn policy(&self) -> StartPolicy {
        self.policy
    }

    /// Returns the seat that opened the current game.
    pub fn opener(&self) -> Seat {
        self.opener
    }

    /// Number of games that have been reset with [`GameHandle::new_game`].
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Returns the seat whose turn it is.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> &dyn Player {
        self.seat(self.active)
    }

    /// Returns the player in a seat.
    pub fn seat(&self, seat: Seat) -> &dyn Player {
        self.players[seat.slot()].as_ref()
    }

    /// Returns the player using `mark`.
    pub fn player(&self, mark: Mark) -> &dyn Player {
        if self.players[0].mark() == mark {
            self.players[0].as_ref()
        } else {
            self.players[1].as_ref()
        }
    }

    /// Short human-readable status line.
    pub fn status_message(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("{}'s turn", self.active_player().name()),
            Outcome::WonBy(mark) => format!("{} wins!", self.player(mark).name()),
            Outcome::Draw => "It's a tie!".to_string(),
        }
    }

    /// Plays `index` for the active interactive player.
    ///
    /// Search-driven players move through [`GameHandle::play_turn`].
    /// If the game continues and the next player is search-driven, that
    /// player replies before this call returns, so up to two marks may be
    /// placed. Nothing changes when an error is returned.
    #[instrument(skip(self), fields(player = self.active_player().name()))]
    pub fn submit_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        self.ensure_in_progress()?;
        if !self.active_player().is_interactive() {
            warn!(index, "External move rejected, computer is to move");
            return Err(MoveError::NotHumanTurn(
                self.active_player().name().to_string(),
            ));
        }
        self.place(index)?;

        if self.outcome == Outcome::InProgress && !self.active_player().is_interactive() {
            debug!(player = self.active_player().name(), "Computer replies");
            self.play_turn()?;
        }

        Ok(self.outcome)
    }

    /// Lets the active search-driven player make its move.
    ///
    /// Used when the computer opens a game and to step computer-only games.
    #[instrument(skip(self), fields(player = self.active_player().name()))]
    pub fn play_turn(&mut self) -> Result<Outcome, MoveError> {
        self.ensure_in_progress()?;

        let slot = self.active.slot();
        if self.players[slot].is_interactive() {
            return Err(MoveError::NotComputerTurn(
                self.players[slot].name().to_string(),
            ));
        }

        let index = self.players[slot].propose(&self.board).ok_or_else(|| {
            MoveError::InvariantViolation(format!(
                "{} had no move on a board still in progress",
                self.players[slot].name()
            ))
        })?;
        self.place(index)?;
        Ok(self.outcome)
    }

    /// Plays search-driven turns until the game ends.
    pub fn play_out(&mut self) -> Result<Outcome, MoveError> {
        while self.outcome == Outcome::InProgress {
            self.play_turn()?;
        }
        Ok(self.outcome)
    }

    /// Clears the board and starts another game.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.board.reset();
        self.outcome = Outcome::InProgress;
        self.history.clear();
        self.games_played += 1;

        self.opener = match self.policy {
            StartPolicy::Fixed(seat) => seat,
            StartPolicy::Alternate => self.opener.other(),
        };
        self.active = self.opener;

        info!(opener = self.active_player().name(), "New game");
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            warn!(outcome = %self.outcome, "Move rejected, game is over");
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    fn place(&mut self, index: usize) -> Result<(), MoveError> {
        let mark = self.active_player().mark();
        self.board.apply(index, mark)?;
        self.history.push(Move::new(mark, index));
        self.outcome = rules::outcome(&self.board);
        debug!(%mark, index, outcome = %self.outcome, "Move placed");

        if self.outcome == Outcome::InProgress {
            self.active = self.active.other();
        }
        Ok(())
    }
}
