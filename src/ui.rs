//! Text rendering of boards and shot outcomes for the console game.

use core::fmt;

use crate::{
    board::{Board, CellState},
    common::{Coordinate, ShotOutcome},
};

/// Displays a board as a numbered grid. Columns are `x`, rows are `y`, both
/// labelled from 1. Undamaged vessel cells are drawn as water on hidden boards.
pub struct BoardView<'a>(pub &'a Board);

impl BoardView<'_> {
    fn symbol(&self, state: CellState) -> char {
        match state {
            CellState::Occupied if self.0.is_hidden() => '0',
            CellState::Empty => '0',
            CellState::Occupied => '■',
            CellState::Hit => 'X',
            CellState::Miss => 'T',
            CellState::Excluded => '*',
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.0.size();
        write!(f, "  |")?;
        for x in 1..=size {
            if x == size {
                write!(f, " {}", x)?;
            } else {
                write!(f, " {} |", x)?;
            }
        }
        for y in 0..size {
            write!(f, "\n{}", y + 1)?;
            for x in 0..size {
                let state = self
                    .0
                    .cell(Coordinate::new(x as i32, y as i32))
                    .unwrap_or(CellState::Empty);
                write!(f, " | {}", self.symbol(state))?;
            }
        }
        Ok(())
    }
}

/// Console phrasing of a shot outcome.
pub fn describe_outcome(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Ship hit!",
        ShotOutcome::Destroyed => "Ship destroyed!",
    }
}

/// A coordinate the way the console player types it: 1-based `x y`.
pub struct MoveLabel(pub Coordinate);

impl fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.x + 1, self.0.y + 1)
    }
}
