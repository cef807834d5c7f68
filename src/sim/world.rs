/// WorldState: everything one play session owns.
///
/// The grid is the single source of truth for what is drawn. The wizard
/// and crystal keep their own positions and write through to the grid in
/// every operation, so `grid.render()` is always the current frame.

use crate::config::ArenaConfig;
use crate::domain::crystal::Crystal;
use crate::domain::grid::{Grid, Position};
use crate::domain::spawn::SpawnSelector;
use crate::domain::wizard::Wizard;
use crate::error::GameError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    GameOver,
}

pub struct WorldState {
    pub grid: Grid,
    pub wizard: Wizard,
    pub crystal: Crystal,
    pub spawner: SpawnSelector,

    pub phase: Phase,
    pub tick: u64,
    /// Accepted moves and jumps.
    pub moves: u64,

    // ── UI ──
    pub message: String,
}

impl WorldState {
    /// Fresh arena with the wizard at its start cell and a crystal on a
    /// random free cell.
    pub fn new(arena: &ArenaConfig, mut spawner: SpawnSelector) -> Result<Self, GameError> {
        let mut grid = Grid::new(arena.width, arena.height);
        let wizard = Wizard::new(arena.start_position(), &mut grid);
        let crystal = Crystal::spawn(&mut grid, &mut spawner)?;
        Ok(Self::assemble(grid, wizard, crystal, spawner))
    }

    /// Arena with the crystal on a chosen cell instead of a random one.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_crystal_at(
        width: usize,
        height: usize,
        start: Position,
        crystal_at: Position,
        spawner: SpawnSelector,
    ) -> Self {
        let mut grid = Grid::new(width, height);
        let wizard = Wizard::new(start, &mut grid);
        let crystal = Crystal::place(crystal_at, &mut grid);
        Self::assemble(grid, wizard, crystal, spawner)
    }

    fn assemble(grid: Grid, wizard: Wizard, crystal: Crystal, spawner: SpawnSelector) -> Self {
        WorldState {
            grid,
            wizard,
            crystal,
            spawner,
            phase: Phase::Playing,
            tick: 0,
            moves: 0,
            message: String::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.wizard.pickup_count()
    }

    pub fn set_message(&mut self, msg: &str) {
        self.message = msg.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symbol::Symbol;

    #[test]
    fn new_world_places_wizard_and_crystal() {
        let arena = ArenaConfig { width: 10, height: 10, start_x: 0, start_y: 0 };
        let w = WorldState::new(&arena, SpawnSelector::seeded(4)).unwrap();
        assert_eq!(w.phase, Phase::Playing);
        assert_eq!(w.wizard.position(), Position::new(0, 0));
        assert_ne!(w.crystal.position(), w.wizard.position());
        assert_eq!(w.grid.symbol_at(w.crystal.position()), Some(Symbol::Crystal));
        assert_eq!(w.grid.empty_positions().count(), 98);
        assert_eq!(w.score(), 0);
    }

    #[test]
    fn one_cell_arena_cannot_spawn() {
        let arena = ArenaConfig { width: 1, height: 1, start_x: 0, start_y: 0 };
        assert!(matches!(
            WorldState::new(&arena, SpawnSelector::seeded(1)),
            Err(GameError::NoFreeCell)
        ));
    }
}
