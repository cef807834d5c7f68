/// The wizard: the player-controlled occupant of the arena.
///
/// Position is only changed through `try_move` and `teleport_to`, which
/// return whether the action was applied. The arena is not owned here; it
/// is passed into each operation.
///
/// Relocation order (shared by moves and teleports):
///   1. clear the old cell
///   2. advance the trail (prune, insert vacated cell, redraw)
///   3. update position and draw the wizard
///   4. redraw open portal ends

use super::crystal::Crystal;
use super::grid::{Grid, Position};
use super::portal::{Portal, PortalManager};
use super::spawn::SpawnSelector;
use super::symbol::Symbol;
use super::trail::TrailManager;
use crate::error::GameError;

/// Single-step direction. Horizontal steps skip the filler column.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-2, 0),
            Direction::Right => (2, 0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Wizard {
    position: Position,
    previous: Option<Position>,
    pickup_count: u32,
    trail: TrailManager,
    portals: PortalManager,
}

impl Wizard {
    pub fn new(position: Position, grid: &mut Grid) -> Self {
        grid.set_symbol(position, Symbol::Wizard);
        Wizard {
            position,
            previous: None,
            pickup_count: 0,
            trail: TrailManager::new(),
            portals: PortalManager::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn pickup_count(&self) -> u32 {
        self.pickup_count
    }

    pub fn trail(&self) -> &TrailManager {
        &self.trail
    }

    pub fn portal(&self) -> Option<Portal> {
        self.portals.current()
    }

    /// Step by `(dx, dy)`. Rejected when the target is off the arena, is
    /// the neck segment, or is an end of the open portal.
    pub fn try_move(&mut self, dx: i32, dy: i32, grid: &mut Grid) -> bool {
        let target = self.position.offset(dx, dy);
        if !grid.is_in_bounds(target) {
            return false;
        }
        if self.trail.neck() == Some(target) {
            return false;
        }
        if let Some(portal) = self.portals.current() {
            if portal.entry == target || portal.exit == target {
                return false;
            }
        }
        self.relocate(target, grid);
        true
    }

    pub fn step(&mut self, dir: Direction, grid: &mut Grid) -> bool {
        let (dx, dy) = dir.delta();
        self.try_move(dx, dy, grid)
    }

    /// Jump to `target`, opening a portal from the current cell.
    /// No neck check: landing on any trail segment is a collision.
    pub fn teleport_to(&mut self, target: Position, grid: &mut Grid) -> bool {
        if self.portals.is_open() || target == self.position {
            return false;
        }
        if !grid.is_in_bounds(target) {
            return false;
        }
        self.portals.open(self.position, target, grid);
        self.relocate(target, grid);
        true
    }

    /// Take the crystal under the head: count it, grow the trail, respawn
    /// the crystal elsewhere.
    pub fn collect(
        &mut self,
        crystal: &mut Crystal,
        grid: &mut Grid,
        spawner: &mut SpawnSelector,
    ) -> Result<(), GameError> {
        self.pickup_count += 1;
        if let Some(vacated) = self.previous {
            self.trail.on_collect(vacated, grid);
        }
        self.portals.render(grid);
        crystal.respawn(grid, spawner)
    }

    /// Game-over predicate: the head sits on its own trail.
    pub fn collides_with_self(&self) -> bool {
        self.trail.contains_head(self.position)
    }

    pub fn has_open_portal(&self) -> bool {
        self.portals.is_open()
    }

    /// Seal the portal once the body has passed. Returns true on close.
    pub fn close_portal_if_ready(&mut self, grid: &mut Grid) -> bool {
        let closed = self.portals.maybe_close(&self.trail, self.position, grid);
        if closed {
            // a trail segment may have been sitting on the exit
            self.trail.render(grid);
            grid.set_symbol(self.position, Symbol::Wizard);
        }
        closed
    }

    fn relocate(&mut self, target: Position, grid: &mut Grid) {
        let old = self.position;
        grid.clear(old);
        self.trail.on_move(old, self.pickup_count, grid);
        self.previous = Some(old);
        self.position = target;
        grid.set_symbol(target, Symbol::Wizard);
        self.portals.render(grid);
    }
}
