use alloc::vec::Vec;

use thiserror::Error;

/// Side length of the standard square grid.
pub const BOARD_SIZE: usize = 6;
/// Vessel lengths every board is populated with, largest first.
pub const FLEET: [usize; 6] = [4, 2, 2, 1, 1, 1];

/// Failed `place_vessel` calls tolerated for one board before it is abandoned.
pub const MAX_PLACEMENT_FAILURES: usize = 1000;
/// Fresh boards tried before setup reports that the fleet does not fit.
pub const MAX_BOARD_ATTEMPTS: usize = 100;
/// Random coordinates the automated player draws before scanning the grid
/// for the first untargeted cell.
pub const MAX_SEARCH_ATTEMPTS: usize = 10_000;

/// Total number of vessel cells in the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 4 + 2 + 2 + 1 + 1 + 1;

/// Grid size and fleet used to set up both boards of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
}

/// Problems with a [`MatchConfig`] detected before any board is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("fleet must contain at least one vessel")]
    EmptyFleet,
    #[error("vessel of length {length} cannot be placed on a {size}x{size} board")]
    InvalidVessel { length: usize, size: usize },
}

impl MatchConfig {
    pub fn new(size: usize, fleet: Vec<usize>) -> Self {
        Self { size, fleet }
    }

    /// Reject configurations that can never produce a board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(&length) = self.fleet.iter().find(|&&l| l == 0 || l > self.size) {
            return Err(ConfigError::InvalidVessel {
                length,
                size: self.size,
            });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(BOARD_SIZE, FLEET.to_vec())
    }
}
