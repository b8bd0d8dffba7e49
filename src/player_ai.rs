use alloc::vec::Vec;
use rand::{rngs::SmallRng, Rng};

use crate::{
    cell::Position,
    game::Move,
    minefield::Minefield,
    player::Player,
};

/// Rule-based automatic player.
///
/// Looks only at what a human would see: explored numbers and its own
/// marks. Each turn it applies the first rule that yields a move:
/// 1. a number whose unexplored neighbours all must be mines gets one of
///    them marked;
/// 2. a number already satisfied by marks gets an unmarked neighbour freed;
/// 3. otherwise a random unexplored, unmarked cell is freed.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// First move forced by a single explored number, if any.
pub fn deduce_move(field: &Minefield) -> Option<Move> {
    for (pos, cell) in field.cells() {
        if !cell.shows_number() {
            continue;
        }
        let number = cell.adjacent_mines as usize;
        let mut hidden = 0usize;
        let mut marked = 0usize;
        let mut target: Option<Position> = None;

        for (r, c) in field.neighbors(pos) {
            let Ok(n) = field.cell(r, c) else { continue };
            if n.is_explored {
                continue;
            }
            hidden += 1;
            if n.is_marked {
                marked += 1;
            } else if target.is_none() {
                target = Some((r, c));
            }
        }

        if let Some(target) = target {
            if hidden == number {
                return Some(Move::mine(target));
            }
            if marked == number {
                return Some(Move::free(target));
            }
        }
    }
    None
}

/// Uniformly random unexplored, unmarked cell.
pub fn random_free_move(rng: &mut SmallRng, field: &Minefield) -> Option<Move> {
    let candidates: Vec<Position> = field
        .cells()
        .filter(|(_, cell)| !cell.is_explored && !cell.is_marked)
        .map(|(pos, _)| pos)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..candidates.len());
    Some(Move::free(candidates[idx]))
}

impl Player for AiPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, field: &Minefield) -> Option<Move> {
        deduce_move(field).or_else(|| random_free_move(rng, field))
    }
}
