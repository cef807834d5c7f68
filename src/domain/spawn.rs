/// Free-cell selection for crystal spawns.
///
/// Enumerates every empty cell and draws one uniformly, so a spawn always
/// terminates and never lands on the wizard, its trail or a portal.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use super::grid::{Grid, Position};
use crate::error::GameError;

pub struct SpawnSelector {
    rng: StdRng,
}

impl SpawnSelector {
    /// Deterministic selector; same seed, same spawn sequence.
    pub fn seeded(seed: u64) -> Self {
        SpawnSelector { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        SpawnSelector { rng: StdRng::from_entropy() }
    }

    /// Pick a uniformly random empty cell.
    /// `Err(NoFreeCell)` when the arena is full.
    pub fn pick_free_cell(&mut self, grid: &Grid) -> Result<Position, GameError> {
        grid.empty_positions()
            .choose(&mut self.rng)
            .ok_or(GameError::NoFreeCell)
    }
}
