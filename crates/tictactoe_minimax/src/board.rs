//! The 3x3 board.
//!
//! `Board` is a passive snapshot: placing a mark never recomputes the
//! outcome. The turn controller does that explicitly after every placement.

use super::{Cell, InvalidMove, Mark};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const SQUARES: usize = 9;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    cells: [Cell; SQUARES],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from an explicit set of squares.
    pub fn from_cells(cells: [Cell; SQUARES]) -> Self {
        Self { cells }
    }

    /// Returns all squares.
    pub fn cells(&self) -> &[Cell; SQUARES] {
        &self.cells
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a square exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks whether a mark may be placed at `index`.
    pub fn validate(&self, index: usize) -> Result<(), InvalidMove> {
        match self.get(index) {
            None => Err(InvalidMove::OutOfBounds(index)),
            Some(Cell::Occupied(_)) => Err(InvalidMove::Occupied(index)),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Places `mark` on an empty square.
    ///
    /// The board is left untouched on error.
    #[instrument(skip(self))]
    pub fn apply(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        self.validate(index)?;
        self.cells[index] = Cell::Occupied(mark);
        Ok(())
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; SQUARES];
    }

    /// Indices of empty squares in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Writes a square during search. Callers restore the previous value.
    pub(crate) fn set_unchecked(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character other than X, O or an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// Wrong number of squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares written as `X`, `O`, or one of `.`, `-`, `_`
    /// for empty. Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Cell::Occupied(Mark::X)),
                'O' => Ok(Cell::Occupied(Mark::O)),
                '.' | '-' | '_' => Ok(Cell::Empty),
                other => Err(BoardParseError::UnexpectedChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cells: [Cell; SQUARES] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { cells })
    }
}
