/// The wizard's trailing body.
///
/// Segments are stored most-recent-first: `front()` is the neck, `back()`
/// the oldest segment. Length never exceeds the pickup count.
///
/// Per move the order is fixed: prune the oldest segment (clearing its
/// cell), insert the vacated cell at the front, then redraw every
/// remaining segment. Pruning first keeps the length at or below the
/// bound even on the tick the trail grows.

use std::collections::VecDeque;

use super::grid::{Grid, Position};
use super::symbol::Symbol;

#[derive(Clone, Debug, Default)]
pub struct TrailManager {
    segments: VecDeque<Position>,
}

impl TrailManager {
    pub fn new() -> Self {
        TrailManager { segments: VecDeque::new() }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment directly behind the head.
    pub fn neck(&self) -> Option<Position> {
        self.segments.front().copied()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    pub fn contains_head(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Advance the trail after the head left `vacated`.
    pub fn on_move(&mut self, vacated: Position, pickup_count: u32, grid: &mut Grid) {
        let bound = pickup_count as usize;
        while !self.segments.is_empty() && self.segments.len() >= bound {
            if let Some(oldest) = self.segments.pop_back() {
                grid.clear(oldest);
            }
        }
        if bound > 0 {
            self.segments.push_front(vacated);
        }
        self.render(grid);
    }

    /// Grow by one segment right away after a pickup.
    /// `cell` is the cell the head just vacated; a no-op if it is
    /// already part of the trail.
    pub fn on_collect(&mut self, cell: Position, grid: &mut Grid) {
        if !self.segments.contains(&cell) {
            self.segments.push_front(cell);
            grid.set_symbol(cell, Symbol::Trail);
        }
    }

    pub fn render(&self, grid: &mut Grid) {
        for &seg in &self.segments {
            grid.set_symbol(seg, Symbol::Trail);
        }
    }
}
