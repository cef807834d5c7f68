/// The collectible crystal. Lives on exactly one empty cell and jumps to a
/// fresh random one whenever it is collected.

use super::grid::{Grid, Position};
use super::spawn::SpawnSelector;
use super::symbol::Symbol;
use crate::error::GameError;

#[derive(Clone, Debug)]
pub struct Crystal {
    position: Position,
}

impl Crystal {
    /// Spawn on a random free cell.
    pub fn spawn(grid: &mut Grid, spawner: &mut SpawnSelector) -> Result<Self, GameError> {
        let position = spawner.pick_free_cell(grid)?;
        grid.set_symbol(position, Symbol::Crystal);
        Ok(Crystal { position })
    }

    /// Place on a known cell (level setup and tests).
    pub fn place(position: Position, grid: &mut Grid) -> Self {
        grid.set_symbol(position, Symbol::Crystal);
        Crystal { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move to a new free cell. The old cell is left as is: the wizard
    /// standing on it owns that cell now.
    pub fn respawn(&mut self, grid: &mut Grid, spawner: &mut SpawnSelector) -> Result<(), GameError> {
        let next = spawner.pick_free_cell(grid)?;
        grid.set_symbol(next, Symbol::Crystal);
        self.position = next;
        Ok(())
    }
}
