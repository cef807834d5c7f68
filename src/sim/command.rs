/// Logical commands consumed by the game loop, one per tick.
/// Raw key decoding lives in `ui::input`; the simulation never sees keys.

use crate::domain::grid::{Grid, Position};
use crate::domain::wizard::Direction;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    JumpToRowStart,
    JumpToRowEnd,
    JumpToRow(usize),
    Quit,
    Noop,
}

impl Command {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }

    /// Teleport target for jump commands, relative to `from`.
    /// Targets outside the arena come back as `None`.
    pub fn jump_target(self, from: Position, grid: &Grid) -> Option<Position> {
        let target = match self {
            Command::JumpToRowStart => Position::new(0, from.y),
            Command::JumpToRowEnd => Position::new(grid.max_x(), from.y),
            Command::JumpToRow(n) => {
                let row = i32::try_from(n).ok()?;
                Position::new(from.x, row)
            }
            _ => return None,
        };
        grid.is_in_bounds(target).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_map_to_directions() {
        assert_eq!(Command::MoveLeft.direction(), Some(Direction::Left));
        assert_eq!(Command::MoveDown.direction(), Some(Direction::Down));
        assert_eq!(Command::JumpToRowEnd.direction(), None);
        assert_eq!(Command::Quit.direction(), None);
    }

    #[test]
    fn row_jumps_resolve_against_arena() {
        let g = Grid::new(10, 10);
        let from = Position::new(6, 4);
        assert_eq!(Command::JumpToRowStart.jump_target(from, &g), Some(Position::new(0, 4)));
        assert_eq!(Command::JumpToRowEnd.jump_target(from, &g), Some(Position::new(18, 4)));
        assert_eq!(Command::JumpToRow(9).jump_target(from, &g), Some(Position::new(6, 9)));
        assert_eq!(Command::JumpToRow(10).jump_target(from, &g), None);
        assert_eq!(Command::MoveUp.jump_target(from, &g), None);
    }
}
