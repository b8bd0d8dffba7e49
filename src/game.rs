use core::fmt;
use core::str::FromStr;

use log::info;

use crate::{
    cell::Position,
    common::FieldError,
    minefield::Minefield,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// What a move does to its target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Claim the cell as free and reveal it.
    Free,
    /// Set or unset a mine mark.
    Mine,
}

/// Error returned when a command token is neither `free` nor `mine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCommand;

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected `free` or `mine`")
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Command::Free),
            "mine" => Ok(Command::Mine),
            _ => Err(UnknownCommand),
        }
    }
}

/// A single player action against a zero-based (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub command: Command,
}

impl Move {
    pub const fn free((row, col): Position) -> Self {
        Move {
            row,
            col,
            command: Command::Free,
        }
    }

    pub const fn mine((row, col): Position) -> Self {
        Move {
            row,
            col,
            command: Command::Mine,
        }
    }
}

/// Game rules around a single [`Minefield`]: first-reveal tracking, the
/// numbered-cell input rule and the win/loss status.
#[derive(Clone, Debug)]
pub struct GameEngine {
    field: Minefield,
    first_reveal: bool,
    status: GameStatus,
    moves: usize,
}

impl GameEngine {
    pub fn new(field: Minefield) -> Self {
        Self {
            field,
            first_reveal: true,
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    pub fn field(&self) -> &Minefield {
        &self.field
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of accepted moves so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// `true` until the first `free` command has been applied.
    pub fn awaiting_first_reveal(&self) -> bool {
        self.first_reveal
    }

    /// Apply a move and return the resulting status.
    ///
    /// Rejected moves leave the game untouched and are not counted.
    pub fn apply(&mut self, mv: Move) -> Result<GameStatus, FieldError> {
        if self.status.is_finished() {
            return Err(FieldError::GameOver);
        }
        let (row, col) = (mv.row, mv.col);
        if self.field.cell(row, col)?.shows_number() {
            return Err(FieldError::NumberedCell { row, col });
        }

        match mv.command {
            Command::Mine => self.field.mark_cell(row, col)?,
            Command::Free => {
                let is_first = self.first_reveal;
                let result = self.field.reveal_cell(row, col, is_first)?;
                self.first_reveal = false;
                if !result.is_safe() {
                    self.moves += 1;
                    self.status = GameStatus::Lost;
                    info!("game lost after {} moves", self.moves);
                    return Ok(self.status);
                }
            }
        }
        self.moves += 1;

        if self.field.check_win() {
            self.status = GameStatus::Won;
            info!("game won after {} moves", self.moves);
        }
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn command_tokens() {
        assert_eq!("free".parse::<Command>(), Ok(Command::Free));
        assert_eq!("mine".parse::<Command>(), Ok(Command::Mine));
        assert_eq!("Mine".parse::<Command>(), Err(UnknownCommand));
    }

    #[test]
    fn first_flag_cleared_by_free_only() {
        let field = Minefield::from_mines(9, 9, &[(8, 8)], SmallRng::seed_from_u64(1)).unwrap();
        let mut engine = GameEngine::new(field);
        engine.apply(Move::mine((0, 0))).unwrap();
        assert!(engine.awaiting_first_reveal());
        engine.apply(Move::free((7, 0))).unwrap();
        assert!(!engine.awaiting_first_reveal());
    }
}
