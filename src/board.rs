//! Game board state: vessel placement, per-cell state and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coordinate, ShotOutcome};
use crate::ship::Vessel;

type BB = BitBoard<u64>;

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Open water that has not been shot.
    Empty,
    /// An undamaged vessel cell.
    Occupied,
    /// A damaged vessel cell.
    Hit,
    /// Open water that has been shot.
    Miss,
    /// Open water revealed around a destroyed vessel.
    Excluded,
}

/// One player's N×N grid with the vessels placed on it.
pub struct Board {
    size: usize,
    hidden: bool,
    cells: Vec<CellState>,
    excluded: BB,
    vessels: Vec<Vessel>,
    vessels_alive: usize,
    last_shot: Option<Coordinate>,
}

impl Board {
    /// Create an empty `size×size` board. When `hidden` is set, undamaged
    /// vessel cells are rendered as open water.
    pub fn new(size: usize, hidden: bool) -> Self {
        Board {
            size,
            hidden,
            cells: alloc::vec![CellState::Empty; size * size],
            excluded: BB::new(size),
            vessels: Vec::new(),
            vessels_alive: 0,
            last_shot: None,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Returns `true` if `coord` lies within `[0, size)²`.
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        self.index(coord).is_some()
    }

    /// State of the cell at `coord`, or `None` outside the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Returns `true` if shots (and placements) at `coord` are rejected.
    /// Out-of-board coordinates are never excluded.
    pub fn is_excluded(&self, coord: Coordinate) -> bool {
        match Self::unsigned(coord) {
            Some((x, y)) => self.excluded.get(x, y).unwrap_or(false),
            None => false,
        }
    }

    /// Number of excluded cells.
    pub fn excluded_count(&self) -> usize {
        self.excluded.count_ones()
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Vessels with at least one undamaged cell.
    pub fn vessels_alive(&self) -> usize {
        self.vessels_alive
    }

    /// Returns `true` when every vessel is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.vessels_alive == 0
    }

    /// Target of the most recent successfully resolved shot.
    pub fn last_shot(&self) -> Option<Coordinate> {
        self.last_shot
    }

    /// In-bounds cells that may still be shot, row by row.
    pub fn untargeted_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let size = self.size as i32;
        (0..size)
            .flat_map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
            .filter(move |c| !self.is_excluded(*c))
    }

    /// Add a vessel to the board.
    ///
    /// Every cell must be in bounds and outside the excluded set; on success
    /// the cells become `Occupied` and their clipped 8-neighbourhood is added
    /// to the excluded set as a placement buffer.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if let Some(out) = vessel.occupied_cells().find(|c| !self.in_bounds(*c)) {
            return Err(BoardError::OutOfBounds(out));
        }
        if let Some(taken) = vessel.occupied_cells().find(|c| self.is_excluded(*c)) {
            return Err(BoardError::CellOccupied(taken));
        }

        for coord in vessel.occupied_cells() {
            self.set_cell(coord, CellState::Occupied);
        }
        for coord in vessel.occupied_cells().flat_map(Coordinate::neighborhood) {
            self.exclude(coord);
        }
        trace!("placed {:?}", vessel);
        self.vessels.push(vessel);
        self.vessels_alive += 1;
        Ok(())
    }

    /// Forget the placement buffers before play starts so that only shots
    /// populate the excluded set.
    pub fn begin_match(&mut self) {
        self.excluded.clear_all();
        debug!(
            "board ready: {} vessels on a {}x{} grid",
            self.vessels.len(),
            self.size,
            self.size
        );
    }

    /// Fire at `target`. Either the whole state change commits or the board
    /// is left untouched.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        if !self.in_bounds(target) {
            return Err(BoardError::OutOfBounds(target));
        }
        if self.is_excluded(target) {
            return Err(BoardError::CellAlreadyTargeted(target));
        }

        let struck = self.vessels.iter().position(|v| v.occupies(target));
        if let Some(i) = struck {
            self.vessels[i].register_hit()?;
        }
        self.exclude(target);
        self.last_shot = Some(target);

        let outcome = match struck {
            None => {
                self.set_cell(target, CellState::Miss);
                ShotOutcome::Miss
            }
            Some(i) => {
                self.set_cell(target, CellState::Hit);
                if self.vessels[i].is_destroyed() {
                    self.vessels_alive -= 1;
                    self.reveal_contour(i);
                    ShotOutcome::Destroyed
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        debug!("shot at {} -> {:?}", target, outcome);
        Ok(outcome)
    }

    /// Exclude and reveal the ring around a destroyed vessel. The whole ring
    /// is recomputed from every vessel cell, so earlier misses inside it are
    /// repainted as revealed water too.
    fn reveal_contour(&mut self, vessel: usize) {
        let ring: Vec<Coordinate> = self.vessels[vessel]
            .contour()
            .filter(|c| self.in_bounds(*c))
            .collect();
        for coord in ring {
            self.exclude(coord);
            self.set_cell(coord, CellState::Excluded);
        }
    }

    // Off-board coordinates are dropped here; the bitboard rejects them.
    fn exclude(&mut self, coord: Coordinate) {
        if let Some((x, y)) = Self::unsigned(coord) {
            let _ = self.excluded.set(x, y);
        }
    }

    fn set_cell(&mut self, coord: Coordinate, state: CellState) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = state;
        }
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        let (x, y) = Self::unsigned(coord)?;
        if x < self.size && y < self.size {
            Some(y * self.size + x)
        } else {
            None
        }
    }

    fn unsigned(coord: Coordinate) -> Option<(usize, usize)> {
        Some((usize::try_from(coord.x).ok()?, usize::try_from(coord.y).ok()?))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  hidden: {},\n  vessels_alive: {},\n  excluded: {:?},\n  vessels: {:?}\n}}",
            self.size, self.hidden, self.vessels_alive, self.excluded, self.vessels
        )
    }
}
