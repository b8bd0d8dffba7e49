//! Common types for the minefield: field errors and reveal results.

use crate::bitboard::BitBoardError;

/// Result of a reveal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealResult {
    /// The targeted cell was safe (or made safe on the first reveal) and
    /// the flood fill ran.
    Safe,
    /// The targeted cell holds a mine; nothing was revealed.
    Detonated,
}

impl RevealResult {
    /// `true` when the game may continue.
    pub const fn is_safe(self) -> bool {
        matches!(self, RevealResult::Safe)
    }
}

/// Errors returned by Minefield and GameEngine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Coordinates fall outside the grid.
    InvalidCoordinate { row: usize, col: usize },
    /// A mark cannot be placed on a cell that is already revealed.
    IllegalMarkOnExplored { row: usize, col: usize },
    /// The cell is revealed and shows a number; it accepts no input.
    NumberedCell { row: usize, col: usize },
    /// The game already ended, no new moves are accepted.
    GameOver,
    /// At least one cell must stay free of mines.
    TooManyMines { mines: usize, cells: usize },
    /// The grid does not fit the per-cell bitboards.
    FieldTooLarge { cells: usize, capacity: usize },
    /// Width or height is zero.
    EmptyField,
}

impl From<BitBoardError> for FieldError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => {
                FieldError::InvalidCoordinate { row, col }
            }
            BitBoardError::SizeTooLarge { cells, capacity } => {
                FieldError::FieldTooLarge { cells, capacity }
            }
        }
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinates ({}, {}) are outside the field", row, col)
            }
            FieldError::IllegalMarkOnExplored { row, col } => {
                write!(f, "Cell ({}, {}) is already explored and cannot be marked", row, col)
            }
            FieldError::NumberedCell { .. } => write!(f, "There is a number here!"),
            FieldError::GameOver => write!(f, "Game already ended, no new moves are accepted"),
            FieldError::TooManyMines { mines, cells } => {
                write!(f, "{} mines do not fit a field of {} cells", mines, cells)
            }
            FieldError::FieldTooLarge { cells, capacity } => {
                write!(f, "Field of {} cells exceeds the limit of {}", cells, capacity)
            }
            FieldError::EmptyField => write!(f, "Field width and height must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}
