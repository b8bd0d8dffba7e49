#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use log::warn;
use rand::rngs::SmallRng;

use crate::{
    common::FieldError,
    game::{Command, GameStatus, Move},
    minefield::Minefield,
    player::Player,
    ui::render_minefield,
};

pub const GREET_MESSAGE: &str = "How many mines do you want on the field?";
pub const USER_INPUT_MESSAGE: &str = "Set/unset mine marks or claim a cell as free:";
pub const WIN_MESSAGE: &str = "Congratulations! You found all the mines!";
pub const FAIL_MESSAGE: &str = "You stepped on a mine and failed!";

/// Why a line of player input could not be turned into a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not of the form `X Y free|mine`.
    Malformed,
    /// Coordinates outside `1..=width` / `1..=height`.
    OutOfRange,
    /// Third token is neither `free` nor `mine`.
    UnknownCommand,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed => write!(f, "Expected input like `3 5 free` or `3 5 mine`"),
            InputError::OutOfRange => write!(f, "Coordinates are outside the field"),
            InputError::UnknownCommand => write!(f, "Command must be `free` or `mine`"),
        }
    }
}

/// Parse `X Y command`, where X is the column and Y the row, both 1-based.
pub fn parse_move(line: &str, width: usize, height: usize) -> Result<Move, InputError> {
    let mut parts = line.split_whitespace();
    let (Some(x), Some(y), Some(cmd), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(InputError::Malformed);
    };
    let x: usize = x.parse().map_err(|_| InputError::Malformed)?;
    let y: usize = y.parse().map_err(|_| InputError::Malformed)?;
    let command: Command = cmd.parse().map_err(|_| InputError::UnknownCommand)?;
    if x == 0 || y == 0 || x > width || y > height {
        return Err(InputError::OutOfRange);
    }
    Ok(Move {
        row: y - 1,
        col: x - 1,
        command,
    })
}

/// Interactive player reading moves from `input` and drawing to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    redraw: bool,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            redraw: true,
        }
    }

    /// Give back the output sink, e.g. to inspect what was drawn.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, field: &Minefield) -> io::Result<Option<Move>> {
        if self.redraw {
            writeln!(self.output)?;
            write!(self.output, "{}", render_minefield(field))?;
        }
        writeln!(self.output, "{}", USER_INPUT_MESSAGE)?;
        self.output.flush()?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_move(&line, field.width(), field.height()) {
                Ok(mv) => {
                    self.redraw = true;
                    return Ok(Some(mv));
                }
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    writeln!(self.output, "{}", USER_INPUT_MESSAGE)?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn report(&mut self, field: &Minefield, status: GameStatus) -> io::Result<()> {
        match status {
            GameStatus::Won => writeln!(self.output, "{}", WIN_MESSAGE)?,
            GameStatus::Lost => {
                write!(self.output, "{}", render_minefield(field))?;
                writeln!(self.output, "{}", FAIL_MESSAGE)?;
            }
            GameStatus::InProgress => {}
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_move(&mut self, _rng: &mut SmallRng, field: &Minefield) -> Option<Move> {
        self.prompt(field).unwrap_or_else(|e| {
            warn!("terminal I/O failed: {}", e);
            None
        })
    }

    fn handle_rejected(&mut self, _field: &Minefield, _mv: Move, err: FieldError) {
        self.redraw = false;
        if let Err(e) = writeln!(self.output, "{}", err) {
            warn!("terminal I/O failed: {}", e);
        }
    }

    fn handle_outcome(&mut self, field: &Minefield, _mv: Move, status: GameStatus) {
        if let Err(e) = self.report(field, status) {
            warn!("terminal I/O failed: {}", e);
        }
    }
}
