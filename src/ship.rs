//! Vessel definitions: a straight run of cells with a damage counter.

use core::fmt;

use rand::Rng;

use crate::common::{BoardError, Coordinate};

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Cells run downwards from the origin (+1 in `y`).
    Vertical,
    /// Cells run rightwards from the origin (+1 in `x`).
    Horizontal,
}

impl Orientation {
    /// Pick an orientation with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Unit step from one cell of a vessel to the next.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Vertical => (0, 1),
            Orientation::Horizontal => (1, 0),
        }
    }
}

/// A linear vessel. Its cells are a pure function of origin, orientation and
/// length; only the damage counter ever changes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    origin: Coordinate,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Vessel {
    /// Create an undamaged vessel. Panics if `length` is 0.
    pub fn new(length: usize, origin: Coordinate, orientation: Orientation) -> Self {
        assert!(length > 0, "vessel length must be nonzero");
        Vessel {
            length,
            origin,
            orientation,
            remaining_hits: length,
        }
    }

    /// Vessel's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// First cell of the vessel.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Orientation of the vessel.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged cells left.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// The `length` contiguous cells starting at the origin.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dx, dy) = self.orientation.step();
        let origin = self.origin;
        (0..self.length as i32).map(move |i| origin.offset(dx * i, dy * i))
    }

    /// Returns `true` if `coord` is one of this vessel's cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|c| c == coord)
    }

    /// Cells touching the vessel (8-neighbourhood of every cell) that are not
    /// part of the vessel itself. Not clipped to any board; may repeat cells.
    pub fn contour(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.occupied_cells()
            .flat_map(Coordinate::neighborhood)
            .filter(move |c| !self.occupies(*c))
    }

    /// Record one confirmed hit.
    pub fn register_hit(&mut self) -> Result<(), BoardError> {
        if self.remaining_hits == 0 {
            return Err(BoardError::AlreadyDestroyed);
        }
        self.remaining_hits -= 1;
        Ok(())
    }

    /// Check if every cell has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.remaining_hits == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ length: {}, origin: {}, orientation: {:?}, remaining_hits: {} }}",
            self.length, self.origin, self.orientation, self.remaining_hits,
        )
    }
}
