use crate::{
    common::FieldError,
    game::{GameStatus, Move},
    minefield::Minefield,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next move on `field`. `None` means the player has nothing
    /// more to play.
    fn select_move(&mut self, rng: &mut SmallRng, field: &Minefield) -> Option<Move>;

    /// Inform the player that its last move was rejected.
    fn handle_rejected(&mut self, _field: &Minefield, _mv: Move, _err: FieldError) {}

    /// Inform the player of the status after an accepted move.
    fn handle_outcome(&mut self, _field: &Minefield, _mv: Move, _status: GameStatus) {}
}
