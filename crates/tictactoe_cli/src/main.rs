//! Tic-tac-toe - terminal front end
//!
//! Play against the computer, simulate computer matches, or analyze a position.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::{Cli, Command, MatchConfig, PlayerConfig, analyze, run_session, simulate};
use tictactoe_minimax::{Mark, Scoring, Seat, StartPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            computer,
            human_mark,
            computer_first,
            alternate,
            depth_aware,
            seed,
        } => {
            let mut match_config = match config {
                Some(path) => MatchConfig::from_file(path)?,
                None => MatchConfig::default(),
            };

            if computer.is_some() || human_mark.is_some() {
                match_config = match_config.with_human_against(human_mark, computer);
            }
            if computer_first {
                match_config = match_config.with_start(StartPolicy::Fixed(Seat::Second));
            }
            if alternate {
                match_config = match_config.with_start(StartPolicy::Alternate);
            }
            if depth_aware {
                match_config = match_config.with_scoring(Scoring::DepthAware);
            }
            if seed.is_some() {
                match_config = match_config.with_seed(seed);
            }

            run_play(&match_config)
        }
        Command::Simulate {
            games,
            x,
            o,
            seed,
            alternate,
            depth_aware,
            json,
        } => {
            let start = if alternate {
                StartPolicy::Alternate
            } else {
                StartPolicy::default()
            };
            let scoring = if depth_aware {
                Scoring::DepthAware
            } else {
                Scoring::Flat
            };
            let match_config = MatchConfig::new(
                PlayerConfig::new(Mark::X, x),
                PlayerConfig::new(Mark::O, o),
            )
            .with_start(start)
            .with_scoring(scoring)
            .with_seed(seed);

            let tally = simulate(&match_config, games)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tally)?);
            } else {
                println!("{}", tally);
            }
            Ok(())
        }
        Command::Analyze {
            board,
            mark,
            depth_aware,
        } => {
            let scoring = if depth_aware {
                Scoring::DepthAware
            } else {
                Scoring::Flat
            };
            let analysis = analyze(&board, mark, scoring)?;
            println!("{}", analysis);
            Ok(())
        }
    }
}

/// Runs an interactive session on stdin/stdout.
fn run_play(config: &MatchConfig) -> Result<()> {
    let mut game = config.build().context("Failed to seat players")?;
    info!(policy = ?game.policy(), "Interactive game ready");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut game, stdin.lock(), stdout.lock())
}
