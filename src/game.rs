//! Board setup and the match controller that alternates turns between two
//! players until one fleet is gone.

use log::{debug, info, trace};
use rand::{rngs::SmallRng, Rng};
use thiserror::Error;

use crate::{
    board::Board,
    common::{Coordinate, MoveError, ShotOutcome},
    config::{ConfigError, MatchConfig, MAX_BOARD_ATTEMPTS, MAX_PLACEMENT_FAILURES},
    player::Player,
    ship::{Orientation, Vessel},
};

/// Errors raised while populating a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("invalid match configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("fleet could not be placed after {attempts} fresh boards")]
    FleetDoesNotFit { attempts: usize },
}

/// Place the whole fleet at random origins and orientations.
///
/// A rejected vessel is discarded and a new random one tried. Once
/// [`MAX_PLACEMENT_FAILURES`] placements have failed for this board it is
/// abandoned and `None` is returned. A finished board has already had
/// [`Board::begin_match`] called.
pub fn try_build_board<R: Rng + ?Sized>(
    rng: &mut R,
    config: &MatchConfig,
    hidden: bool,
) -> Option<Board> {
    if config.validate().is_err() {
        return None;
    }
    let size = config.size as i32;
    let mut board = Board::new(config.size, hidden);
    let mut failures = 0;
    for &length in &config.fleet {
        loop {
            let origin = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
            let vessel = Vessel::new(length, origin, Orientation::random(rng));
            match board.place_vessel(vessel) {
                Ok(()) => break,
                Err(e) => {
                    trace!("placement of length {} rejected: {}", length, e);
                    failures += 1;
                    if failures >= MAX_PLACEMENT_FAILURES {
                        debug!("abandoning board after {} failed placements", failures);
                        return None;
                    }
                }
            }
        }
    }
    board.begin_match();
    Some(board)
}

/// Build a populated board, starting over with a fresh board whenever
/// [`try_build_board`] gives up.
pub fn build_board<R: Rng + ?Sized>(
    rng: &mut R,
    config: &MatchConfig,
    hidden: bool,
) -> Result<Board, SetupError> {
    config.validate()?;
    for _ in 0..MAX_BOARD_ATTEMPTS {
        if let Some(board) = try_build_board(rng, config, hidden) {
            return Ok(board);
        }
    }
    Err(SetupError::FleetDoesNotFit {
        attempts: MAX_BOARD_ATTEMPTS,
    })
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Errors that end a match early.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("match is already won by {0:?}")]
    AlreadyOver(Side),
    #[error("{side:?} player could not move: {source}")]
    Move {
        side: Side,
        #[source]
        source: MoveError,
    },
}

/// What happened during one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Side,
    pub target: Option<Coordinate>,
    pub outcome: ShotOutcome,
    /// Set when this shot destroyed the opponent's last vessel.
    pub winner: Option<Side>,
}

/// Final tally of a finished (or abandoned) match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub winner: Option<Side>,
    pub board_size: usize,
    pub shots_first: usize,
    pub shots_second: usize,
    pub vessels_left_first: usize,
    pub vessels_left_second: usize,
}

/// Runs a two-player match. Each side owns one board and shoots at the
/// other's; a side keeps the turn after `Hit` or `Destroyed` and passes it on
/// `Miss`. The first side to lose every vessel loses the match.
pub struct MatchController<A, B> {
    first: A,
    second: B,
    first_board: Board,
    second_board: Board,
    active: Side,
    shots: [usize; 2],
    winner: Option<Side>,
}

impl<A: Player, B: Player> MatchController<A, B> {
    /// `first` moves first and owns `first_board`; `second` owns `second_board`.
    pub fn new(first: A, first_board: Board, second: B, second_board: Board) -> Self {
        Self {
            first,
            second,
            first_board,
            second_board,
            active: Side::First,
            shots: [0; 2],
            winner: None,
        }
    }

    /// Side whose turn it is.
    pub fn active(&self) -> Side {
        self.active
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::First => &self.first_board,
            Side::Second => &self.second_board,
        }
    }

    /// Resolved shots taken by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::First => self.first.name(),
            Side::Second => self.second.name(),
        }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    /// Ask the active side for one move against the opposing board.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> Result<TurnReport, MatchError> {
        if let Some(side) = self.winner {
            return Err(MatchError::AlreadyOver(side));
        }
        let shooter = self.active;
        let (result, target_board) = match shooter {
            Side::First => (
                self.first.produce_move(rng, &mut self.second_board),
                &self.second_board,
            ),
            Side::Second => (
                self.second.produce_move(rng, &mut self.first_board),
                &self.first_board,
            ),
        };
        let outcome = result.map_err(|source| MatchError::Move {
            side: shooter,
            source,
        })?;
        let target = target_board.last_shot();
        let defeated = target_board.all_destroyed();

        self.shots[shooter.index()] += 1;
        debug!("{:?} fired at {:?}: {:?}", shooter, target, outcome);
        if defeated {
            info!("{:?} destroyed the last vessel", shooter);
            self.winner = Some(shooter);
        } else if !outcome.repeats_turn() {
            self.active = shooter.opponent();
        }
        Ok(TurnReport {
            shooter,
            target,
            outcome,
            winner: self.winner,
        })
    }

    /// Play turns until a side wins, handing every report to `observer`.
    pub fn run<F>(&mut self, rng: &mut SmallRng, mut observer: F) -> Result<Side, MatchError>
    where
        F: FnMut(&TurnReport, &Self),
    {
        loop {
            let report = self.play_turn(rng)?;
            observer(&report, self);
            if let Some(side) = report.winner {
                return Ok(side);
            }
        }
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            winner: self.winner,
            board_size: self.first_board.size(),
            shots_first: self.shots_fired(Side::First),
            shots_second: self.shots_fired(Side::Second),
            vessels_left_first: self.first_board.vessels_alive(),
            vessels_left_second: self.second_board.vessels_alive(),
        }
    }
}
