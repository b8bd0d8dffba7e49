//! Drives a [`Player`] against a [`GameEngine`] until the game ends.

use log::debug;
use rand::rngs::SmallRng;

use crate::{
    game::{GameEngine, GameStatus},
    player::Player,
};

/// A player bound to one game.
pub struct Session<P: Player> {
    player: P,
    engine: GameEngine,
}

impl<P: Player> Session<P> {
    pub fn new(player: P, engine: GameEngine) -> Self {
        Self { player, engine }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Split back into player and engine.
    pub fn into_parts(self) -> (P, GameEngine) {
        (self.player, self.engine)
    }

    /// Play until the game is won or lost, or the player runs out of moves.
    pub fn run(&mut self, rng: &mut SmallRng) -> GameStatus {
        while !self.engine.status().is_finished() {
            let Some(mv) = self.player.select_move(rng, self.engine.field()) else {
                debug!("player stopped after {} moves", self.engine.moves());
                break;
            };
            match self.engine.apply(mv) {
                Ok(status) => self.player.handle_outcome(self.engine.field(), mv, status),
                Err(err) => {
                    debug!("move {:?} rejected: {}", mv, err);
                    self.player.handle_rejected(self.engine.field(), mv, err);
                }
            }
        }
        self.engine.status()
    }
}
