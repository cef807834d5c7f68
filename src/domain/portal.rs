/// One-shot teleport links.
///
/// At most one portal is open at a time. It seals only once its entry
/// cell has left the trail and the wizard is no longer standing on the
/// exit, i.e. once the whole body has passed through.

use super::grid::{Grid, Position};
use super::symbol::Symbol;
use super::trail::TrailManager;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Portal {
    pub entry: Position,
    pub exit: Position,
}

#[derive(Clone, Debug, Default)]
pub struct PortalManager {
    open: Option<Portal>,
}

impl PortalManager {
    pub fn new() -> Self {
        PortalManager { open: None }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<Portal> {
        self.open
    }

    /// Open a portal and stamp both ends. Returns false (and changes
    /// nothing) if one is already open.
    pub fn open(&mut self, entry: Position, exit: Position, grid: &mut Grid) -> bool {
        if self.open.is_some() {
            return false;
        }
        self.open = Some(Portal { entry, exit });
        self.render(grid);
        true
    }

    /// Close the portal if the trail has cleared the entry and the head is
    /// off the exit. Returns true only on the call that actually closes it.
    pub fn maybe_close(&mut self, trail: &TrailManager, head: Position, grid: &mut Grid) -> bool {
        let portal = match self.open {
            Some(p) => p,
            None => return false,
        };
        if trail.contains_head(portal.entry) || head == portal.exit {
            return false;
        }
        grid.clear(portal.entry);
        grid.clear(portal.exit);
        self.open = None;
        true
    }

    /// Redraw both ends; trail rendering may have painted over them.
    pub fn render(&self, grid: &mut Grid) {
        if let Some(p) = self.open {
            grid.set_symbol(p.entry, Symbol::Portal);
            grid.set_symbol(p.exit, Symbol::Portal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn open_stamps_both_cells() {
        let mut g = Grid::new(10, 10);
        let mut pm = PortalManager::new();
        assert!(pm.open(p(0, 4), p(18, 4), &mut g));
        assert!(pm.is_open());
        assert_eq!(g.symbol_at(p(0, 4)), Some(Symbol::Portal));
        assert_eq!(g.symbol_at(p(18, 4)), Some(Symbol::Portal));
    }

    #[test]
    fn second_open_is_a_no_op() {
        let mut g = Grid::new(10, 10);
        let mut pm = PortalManager::new();
        pm.open(p(0, 4), p(18, 4), &mut g);
        assert!(!pm.open(p(2, 2), p(4, 2), &mut g));
        assert_eq!(pm.current(), Some(Portal { entry: p(0, 4), exit: p(18, 4) }));
        assert_eq!(g.symbol_at(p(2, 2)), Some(Symbol::Empty));
    }

    #[test]
    fn stays_open_while_head_on_exit() {
        let mut g = Grid::new(10, 10);
        let mut pm = PortalManager::new();
        let trail = TrailManager::new();
        pm.open(p(0, 4), p(18, 4), &mut g);
        assert!(!pm.maybe_close(&trail, p(18, 4), &mut g));
        assert!(pm.is_open());
    }

    #[test]
    fn stays_open_while_entry_in_trail() {
        let mut g = Grid::new(10, 10);
        let mut pm = PortalManager::new();
        let mut trail = TrailManager::new();
        trail.on_move(p(0, 4), 1, &mut g);
        pm.open(p(0, 4), p(18, 4), &mut g);
        assert!(!pm.maybe_close(&trail, p(16, 4), &mut g));
        assert!(pm.is_open());
    }

    #[test]
    fn closes_and_clears_once_passed() {
        let mut g = Grid::new(10, 10);
        let mut pm = PortalManager::new();
        let trail = TrailManager::new();
        pm.open(p(0, 4), p(18, 4), &mut g);
        assert!(pm.maybe_close(&trail, p(16, 4), &mut g));
        assert!(!pm.is_open());
        assert_eq!(g.symbol_at(p(0, 4)), Some(Symbol::Empty));
        assert_eq!(g.symbol_at(p(18, 4)), Some(Symbol::Empty));

        // idempotent once closed
        assert!(!pm.maybe_close(&trail, p(16, 4), &mut g));
        assert!(!pm.is_open());
    }
}
