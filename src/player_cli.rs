#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::{String, ToString};
use std::vec::Vec;

use rand::rngs::SmallRng;
use thiserror::Error;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, MoveError, ShotOutcome},
    player::Player,
};

/// Why a line typed by the human could not be read as a move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Expected two coordinates, got {0}!")]
    WrongArity(usize),
    #[error("'{0}' is not a number!")]
    NotANumber(String),
}

/// Parse a move typed as two 1-based numbers, column then row (`"3 5"`).
pub fn parse_move(input: &str) -> Result<Coordinate, MoveParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(MoveParseError::WrongArity(tokens.len()));
    }
    let number = |token: &str| {
        token
            .parse::<i32>()
            .map_err(|_| MoveParseError::NotANumber(token.to_string()))
    };
    let x = number(tokens[0])?;
    let y = number(tokens[1])?;
    Ok(Coordinate::new(x.saturating_sub(1), y.saturating_sub(1)))
}

/// Console phrasing of a rejected shot.
fn describe_rejection(err: &BoardError) -> &'static str {
    match err {
        BoardError::OutOfBounds(_) => "That cell is outside the board!",
        BoardError::CellAlreadyTargeted(_) => "That cell was already targeted!",
        BoardError::CellOccupied(_) => "That cell is occupied!",
        BoardError::AlreadyDestroyed => "That vessel is already destroyed!",
    }
}

/// Human participant reading moves from `input` and writing prompts to `output`.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    line: String,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a line parses as a coordinate.
    fn read_move(&mut self) -> Result<Coordinate, MoveError> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(MoveError::InputClosed);
            }
            match parse_move(&self.line) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "You"
    }

    fn produce_move(
        &mut self,
        _rng: &mut SmallRng,
        opponent: &mut Board,
    ) -> Result<ShotOutcome, MoveError> {
        loop {
            let target = self.read_move()?;
            match opponent.resolve_shot(target) {
                Ok(outcome) => return Ok(outcome),
                Err(e @ (BoardError::OutOfBounds(_) | BoardError::CellAlreadyTargeted(_))) => {
                    writeln!(self.output, "{}", describe_rejection(&e))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
