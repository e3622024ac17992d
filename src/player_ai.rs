use rand::rngs::SmallRng;

use crate::{
    ai::AutomatedPlayer,
    board::Board,
    common::{MoveError, ShotOutcome},
    player::Player,
};

impl Player for AutomatedPlayer {
    fn name(&self) -> &str {
        "Computer"
    }

    fn produce_move(
        &mut self,
        rng: &mut SmallRng,
        opponent: &mut Board,
    ) -> Result<ShotOutcome, MoveError> {
        self.take_shot(rng, opponent)
    }
}
