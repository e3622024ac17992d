//! Common types for the sea battle core: grid coordinates, shot outcomes and
//! the error taxonomy shared by boards and players.

use core::fmt;

use thiserror::Error;

/// A position on the grid. `x` is the column and `y` the row, both 0-indexed.
///
/// Coordinates are signed so that probes stepping off the edge of the board
/// can be expressed and rejected by the bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by (`dx`, `dy`).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 3×3 block centred on this coordinate, itself included, row by row.
    /// Nothing is clipped; the caller decides what lies on the board.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| self.offset(dx, dy)))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// The shot landed on open water.
    Miss,
    /// The shot damaged a vessel that still has undamaged cells.
    Hit,
    /// The shot took the last undamaged cell of a vessel.
    Destroyed,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn after this outcome.
    pub fn repeats_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by board and vessel operations. Every variant is
/// recoverable: the caller retries with another placement or target.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The coordinate lies outside the `size × size` grid.
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coordinate),
    /// A placement touches a cell that is occupied or inside another
    /// vessel's buffer.
    #[error("cell {0} is already occupied")]
    CellOccupied(Coordinate),
    /// The cell was shot before or lies in the revealed ring of a sunk vessel.
    #[error("cell {0} was already targeted")]
    CellAlreadyTargeted(Coordinate),
    /// A hit was registered on a vessel with no undamaged cells left.
    #[error("vessel is already destroyed")]
    AlreadyDestroyed,
}

/// Reasons a player could not produce a move.
#[derive(Debug, Error)]
pub enum MoveError {
    /// Every cell of the opposing board is already excluded.
    #[error("no untargeted cell left on the opposing board")]
    NoTarget,
    /// The move source ran dry (for example stdin reached end of file).
    #[error("move input closed")]
    InputClosed,
    /// The board rejected a shot for a reason the player cannot retry around.
    #[error(transparent)]
    Board(#[from] BoardError),
    #[cfg(feature = "std")]
    #[error("failed to read move: {0}")]
    Io(#[from] std::io::Error),
}
