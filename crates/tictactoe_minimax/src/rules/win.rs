//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use strum::IntoEnumIterator;

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if `mark` has three in a row.
pub fn is_won(board: &Board, mark: Mark) -> bool {
    let cells = board.cells();
    let target = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|&[a, b, c]| cells[a] == target && cells[b] == target && cells[c] == target)
}

/// Returns the mark with three in a row, if any.
///
/// X is checked first. Boards reached through legal play never have two
/// winners.
pub fn check_winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| is_won(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!is_won(&board, Mark::X));
        assert!(!is_won(&board, Mark::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut b = Board::new();
            for index in line {
                b.apply(index, Mark::O).unwrap();
            }
            assert!(is_won(&b, Mark::O), "line {:?} should win", line);
            assert!(!is_won(&b, Mark::X));
            assert_eq!(check_winner(&b), Some(Mark::O));
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let b = board("X.O .XO ..X");
        assert_eq!(check_winner(&b), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let b = board("XX. OO. ...");
        assert_eq!(check_winner(&b), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let b = board("XOX ... ...");
        assert!(!is_won(&b, Mark::X));
        assert!(!is_won(&b, Mark::O));
    }
}
