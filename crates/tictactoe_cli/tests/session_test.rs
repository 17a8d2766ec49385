//! Tests for the interactive session, simulation and analysis commands.

use std::io::Cursor;
use tictactoe_cli::{
    MatchConfig, PlayerConfig, PlayerKind, Tally, analyze, run_session, side_to_move, simulate,
};
use tictactoe_minimax::{Mark, Outcome, Scoring, Seat, StartPolicy};

fn run(config: &MatchConfig, input: &str) -> (tictactoe_minimax::GameHandle, String) {
    let mut game = config.build().unwrap();
    let mut output = Vec::new();
    run_session(&mut game, Cursor::new(input), &mut output).unwrap();
    (game, String::from_utf8(output).unwrap())
}

#[test]
fn test_human_move_gets_computer_reply() {
    let (game, output) = run(&MatchConfig::default(), "1\nq\n");
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.history()[1].index, 4);
    assert!(output.contains("X|2|3"));
    assert!(output.contains("X|2|3\n-+-+-\n4|O|6"));
    assert!(output.contains("Player 1's turn"));
}

#[test]
fn test_invalid_input_is_reported() {
    let (game, output) = run(&MatchConfig::default(), "hello\n5\n5\nq\n");
    assert!(output.contains("Enter a square 1-9"));
    assert!(output.contains("already occupied"));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_computer_opens_when_configured() {
    let config = MatchConfig::default().with_start(StartPolicy::Fixed(Seat::Second));
    let (game, output) = run(&config, "q\n");
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history()[0].mark, Mark::O);
    assert!(output.contains("O|2|3"));
}

#[test]
fn test_new_game_resets() {
    let (game, _) = run(&MatchConfig::default(), "1\nn\nq\n");
    assert!(game.history().is_empty());
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_simulate_optimal_mirror_always_draws() {
    let config = MatchConfig::new(
        PlayerConfig::new(Mark::X, PlayerKind::Optimal),
        PlayerConfig::new(Mark::O, PlayerKind::Optimal),
    )
    .with_start(StartPolicy::Alternate);
    let tally = simulate(&config, 2).unwrap();
    assert_eq!(
        tally,
        Tally {
            games: 2,
            x_wins: 0,
            o_wins: 0,
            draws: 2
        }
    );
}

#[test]
fn test_simulate_is_reproducible_with_seed() {
    let config = MatchConfig::new(
        PlayerConfig::new(Mark::X, PlayerKind::Random),
        PlayerConfig::new(Mark::O, PlayerKind::Random),
    )
    .with_seed(Some(99));

    let first = simulate(&config, 50).unwrap();
    let second = simulate(&config, 50).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.games, 50);
    assert_eq!(first.x_wins + first.o_wins + first.draws, 50);
}

#[test]
fn test_simulate_refuses_humans() {
    assert!(simulate(&MatchConfig::default(), 1).is_err());
}

#[test]
fn test_analyze_finds_win() {
    let analysis = analyze("XX. OO. ...", None, Scoring::Flat).unwrap();
    assert_eq!(analysis.mark, Mark::X);
    assert_eq!(analysis.evaluation.index, Some(2));
    assert_eq!(analysis.evaluation.score, 10);
    assert!(analysis.to_string().contains("square 3"));
}

#[test]
fn test_analyze_terminal_board() {
    let analysis = analyze("XXX OO. ...", None, Scoring::Flat).unwrap();
    assert_eq!(analysis.outcome, Outcome::WonBy(Mark::X));
    assert_eq!(analysis.evaluation.index, None);
    assert!(analysis.to_string().contains("Game over: X wins"));
}

#[test]
fn test_analyze_rejects_garbage() {
    assert!(analyze("not a board", None, Scoring::Flat).is_err());
}

#[test]
fn test_side_to_move() {
    assert_eq!(side_to_move(&"X........".parse().unwrap()), Mark::O);
    assert_eq!(side_to_move(&"XO.......".parse().unwrap()), Mark::X);
}
