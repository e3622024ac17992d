// Hunt-then-destroy targeting for the automated opponent.
//
// The player searches with uniformly random shots until one hits, then probes
// outward from that hit one direction at a time until the vessel goes down.

use enumflags2::{bitflags, BitFlags};
use log::{debug, trace};
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, MoveError, ShotOutcome},
    config::MAX_SEARCH_ATTEMPTS,
};

/// Compass direction probed from the cell that opened a hunt.
#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    North = 0b0001,
    South = 0b0010,
    /// Towards column 0.
    West = 0b0100,
    East = 0b1000,
}

impl Direction {
    /// Order in which enabled directions are tried. Never changes.
    pub const PRIORITY: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Offset of one cell in this direction.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// The two directions on the other axis.
    fn crosswise(self) -> BitFlags<Direction> {
        if self.is_vertical() {
            Direction::West | Direction::East
        } else {
            Direction::North | Direction::South
        }
    }
}

/// Targeting mode of the automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Random shots until something is hit.
    Searching,
    /// Directional probing around a confirmed hit.
    Hunting,
}

/// Stateful hunt-then-destroy opponent.
#[derive(Debug, Clone)]
pub struct AutomatedPlayer {
    mode: Mode,
    /// Hit that opened the current hunt; probes are measured from here.
    last_hit: Option<Coordinate>,
    directions: BitFlags<Direction>,
    probe_distance: i32,
}

impl AutomatedPlayer {
    pub fn new() -> Self {
        AutomatedPlayer {
            mode: Mode::Searching,
            last_hit: None,
            directions: BitFlags::all(),
            probe_distance: 1,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_hit(&self) -> Option<Coordinate> {
        self.last_hit
    }

    /// Directions still worth probing in the current hunt.
    pub fn directions(&self) -> BitFlags<Direction> {
        self.directions
    }

    pub fn probe_distance(&self) -> i32 {
        self.probe_distance
    }

    /// Resolve exactly one shot against `board` and update the strategy with
    /// its outcome. Rejected targets are retried internally and never count
    /// as a shot.
    pub fn take_shot<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
    ) -> Result<ShotOutcome, MoveError> {
        if self.mode == Mode::Hunting {
            if let Some(outcome) = self.hunt(board)? {
                return Ok(outcome);
            }
            debug!(
                "every direction around {:?} is exhausted, back to searching",
                self.last_hit
            );
            self.reset();
        }
        self.search(rng, board)
    }

    fn search<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
    ) -> Result<ShotOutcome, MoveError> {
        if board.untargeted_cells().next().is_none() {
            return Err(MoveError::NoTarget);
        }
        let size = board.size() as i32;
        for _ in 0..MAX_SEARCH_ATTEMPTS {
            let target = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
            if let Some(outcome) = Self::fire(board, target)? {
                return Ok(self.record_search(target, outcome));
            }
        }
        // The cap is only reached on nearly exhausted boards; finish deterministically.
        let target = board.untargeted_cells().next().ok_or(MoveError::NoTarget)?;
        let outcome = board.resolve_shot(target)?;
        Ok(self.record_search(target, outcome))
    }

    fn record_search(&mut self, target: Coordinate, outcome: ShotOutcome) -> ShotOutcome {
        if outcome == ShotOutcome::Hit {
            self.hunt_from(target);
        }
        outcome
    }

    /// Start probing around `hit`, a cell known to hold a damaged vessel that
    /// is still afloat. All four directions are enabled again.
    pub fn hunt_from(&mut self, hit: Coordinate) {
        debug!("hit at {}, hunting", hit);
        self.mode = Mode::Hunting;
        self.last_hit = Some(hit);
        self.directions = BitFlags::all();
        self.probe_distance = 1;
    }

    /// One probing shot. `None` when no direction is left to try.
    fn hunt(&mut self, board: &mut Board) -> Result<Option<ShotOutcome>, MoveError> {
        let Some(anchor) = self.last_hit else {
            return Ok(None);
        };
        while let Some(direction) = self.next_direction() {
            let (dx, dy) = direction.step();
            let target = anchor.offset(dx * self.probe_distance, dy * self.probe_distance);
            trace!("probing {:?} at {}", direction, target);
            match Self::fire(board, target)? {
                None => {
                    self.directions.remove(direction);
                    self.probe_distance = 1;
                }
                Some(ShotOutcome::Miss) => {
                    self.directions.remove(direction);
                    self.probe_distance = 1;
                    return Ok(Some(ShotOutcome::Miss));
                }
                Some(ShotOutcome::Hit) => {
                    self.directions.remove(direction.crosswise());
                    self.probe_distance += 1;
                    return Ok(Some(ShotOutcome::Hit));
                }
                Some(ShotOutcome::Destroyed) => {
                    debug!("vessel around {} destroyed", anchor);
                    self.reset();
                    return Ok(Some(ShotOutcome::Destroyed));
                }
            }
        }
        Ok(None)
    }

    fn next_direction(&self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|d| self.directions.contains(*d))
    }

    /// Shoot at `target`. `None` means the board rejected the coordinate and
    /// another candidate should be tried.
    fn fire(board: &mut Board, target: Coordinate) -> Result<Option<ShotOutcome>, MoveError> {
        match board.resolve_shot(target) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(BoardError::OutOfBounds(_)) | Err(BoardError::CellAlreadyTargeted(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn reset(&mut self) {
        self.mode = Mode::Searching;
        self.last_hit = None;
        self.directions = BitFlags::all();
        self.probe_distance = 1;
    }
}

impl Default for AutomatedPlayer {
    fn default() -> Self {
        Self::new()
    }
}
