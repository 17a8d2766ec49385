//! Match configuration: who sits where and how the computer plays.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_minimax::{
    COMPUTER_NAME, GameHandle, HumanPlayer, Mark, MinimaxAi, Player, RandomAi, Scoring, Seat,
    SetupError, StartPolicy,
};
use tracing::{debug, info, instrument};

/// How a seat chooses its moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed at the terminal.
    Human,
    /// Uniformly random legal moves.
    Random,
    /// Minimax best move.
    Optimal,
}

/// One seat of a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name. Defaults to "Player N" for humans and "Computer" otherwise.
    #[serde(default)]
    name: Option<String>,

    /// Mark placed by this seat.
    mark: Mark,

    /// Move selection.
    kind: PlayerKind,
}

impl PlayerConfig {
    /// Creates a seat configuration with the default name.
    pub fn new(mark: Mark, kind: PlayerKind) -> Self {
        Self {
            name: None,
            mark,
            kind,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builds the player for `seat`, deriving a seed from `seed` if given.
    #[instrument(skip(self), fields(mark = %self.mark, kind = %self.kind))]
    fn build(&self, seat: Seat, scoring: Scoring, seed: Option<u64>) -> Box<dyn Player> {
        let default_name = match (self.kind, seat) {
            (PlayerKind::Human, Seat::First) => "Player 1",
            (PlayerKind::Human, Seat::Second) => "Player 2",
            _ => COMPUTER_NAME,
        };
        let name = self.name.clone().unwrap_or_else(|| default_name.to_string());

        match self.kind {
            PlayerKind::Human => Box::new(HumanPlayer::new(name, self.mark)),
            PlayerKind::Random => {
                let ai = match seed {
                    Some(seed) => RandomAi::seeded(self.mark, seed),
                    None => RandomAi::new(self.mark),
                };
                Box::new(ai.named(name))
            }
            PlayerKind::Optimal => Box::new(
                MinimaxAi::new(self.mark)
                    .with_scoring(scoring)
                    .named(name),
            ),
        }
    }
}

/// Full match configuration, loadable from TOML.
///
/// ```toml
/// start = "alternate"
/// scoring = "depth-aware"
/// seed = 7
///
/// [first]
/// name = "Ada"
/// mark = "X"
/// kind = "human"
///
/// [second]
/// mark = "O"
/// kind = "optimal"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seat that opens under a fixed start policy.
    #[serde(default = "default_first")]
    first: PlayerConfig,

    /// The other seat.
    #[serde(default = "default_second")]
    second: PlayerConfig,

    /// Who opens each game.
    #[serde(default)]
    start: StartPolicy,

    /// Scoring used by optimal players.
    #[serde(default)]
    scoring: Scoring,

    /// Seed for random players. Unseeded players draw from the OS.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_first() -> PlayerConfig {
    PlayerConfig::new(Mark::X, PlayerKind::Human)
}

fn default_second() -> PlayerConfig {
    PlayerConfig::new(Mark::O, PlayerKind::Optimal)
}

impl Default for MatchConfig {
    /// A human playing X against the optimal computer playing O.
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
            start: StartPolicy::default(),
            scoring: Scoring::default(),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Creates a configuration from two seats with default policy and scoring.
    pub fn new(first: PlayerConfig, second: PlayerConfig) -> Self {
        Self {
            first,
            second,
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = content.parse()?;
        info!(
            first = %config.first.kind,
            second = %config.second.kind,
            "Match config loaded"
        );
        Ok(config)
    }

    /// Sets the start policy.
    pub fn with_start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    /// Sets the scoring used by optimal players.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Seats a human against the computer, keeping both seats' names.
    ///
    /// The configured human seat (the first seat if neither is human) takes
    /// `human_mark`, or keeps its mark when `None`. The other seat gets the
    /// opposite mark and plays as `computer`, falling back to its configured
    /// kind or to optimal play.
    pub fn with_human_against(
        self,
        human_mark: Option<Mark>,
        computer: Option<PlayerKind>,
    ) -> Self {
        let Self {
            first,
            second,
            start,
            scoring,
            seed,
        } = self;
        let human_second = second.kind == PlayerKind::Human && first.kind != PlayerKind::Human;
        let (mut human, mut opponent) = if human_second {
            (second, first)
        } else {
            (first, second)
        };

        human.kind = PlayerKind::Human;
        human.mark = human_mark.unwrap_or(human.mark);
        opponent.mark = human.mark.opponent();
        opponent.kind = match (computer, opponent.kind) {
            (Some(kind), _) => kind,
            (None, PlayerKind::Human) => PlayerKind::Optimal,
            (None, kind) => kind,
        };
        debug!(human = %human.mark, computer = %opponent.kind, "Seating human against computer");

        let (first, second) = if human_second {
            (opponent, human)
        } else {
            (human, opponent)
        };
        Self {
            first,
            second,
            start,
            scoring,
            seed,
        }
    }

    /// True if any seat takes moves from the terminal.
    pub fn has_human(&self) -> bool {
        self.first.kind == PlayerKind::Human || self.second.kind == PlayerKind::Human
    }

    /// Seats both players in a fresh game.
    ///
    /// Each seat gets its own seed so two random players do not mirror
    /// each other.
    #[instrument(skip(self))]
    pub fn build(&self) -> Result<GameHandle, SetupError> {
        let first = self.first.build(Seat::First, self.scoring, self.seed);
        let second = self.second.build(
            Seat::Second,
            self.scoring,
            self.seed.map(|s| s.wrapping_add(1)),
        );
        GameHandle::new(first, second, self.start)
    }
}

impl std::str::FromStr for MatchConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
