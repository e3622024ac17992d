use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{MoveError, ShotOutcome},
};

/// Interface implemented by the two kinds of participant in a match.
pub trait Player {
    /// Short name used when reporting moves.
    fn name(&self) -> &str;

    /// Take one shot at the opponent's board and report its outcome. Targets
    /// the board rejects are retried inside the call; only a resolved shot
    /// (or a fatal input problem) returns.
    fn produce_move(
        &mut self,
        rng: &mut SmallRng,
        opponent: &mut Board,
    ) -> Result<ShotOutcome, MoveError>;
}
