/// The arena: a fixed-size checkerboard of symbol cells.
///
/// ## Storage
///
/// Each row is `2 * width - 1` chars. Even indices are addressable cells,
/// odd indices are filler so the board reads as a spaced checkerboard.
/// Positions therefore live in storage-column space: cell column `c`
/// is addressed as `x = 2 * c`.
///
/// Writing outside the addressable cells is a programming error and
/// panics; nothing is ever clamped.

use super::symbol::{Symbol, FILLER};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Position { x: self.x + dx, y: self.y + dy }
    }
}

/// One label letter per column, A..Z.
pub const MAX_COLUMNS: usize = 26;

#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build an empty arena of `width` columns by `height` rows.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "arena must be at least 1x1");
        assert!(width <= MAX_COLUMNS, "column labels only run A..Z, got width {}", width);
        let cols = width * 2 - 1;
        let row: Vec<char> = (0..cols)
            .map(|c| if c % 2 == 0 { Symbol::Empty.glyph() } else { FILLER })
            .collect();
        Grid { width, height, rows: vec![row; height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Length of a stored row, filler included.
    pub fn storage_cols(&self) -> usize {
        self.width * 2 - 1
    }

    /// Rightmost addressable x.
    pub fn max_x(&self) -> i32 {
        (self.storage_cols() - 1) as i32
    }

    /// Bottom row.
    pub fn max_y(&self) -> i32 {
        self.height as i32 - 1
    }

    /// Is `pos` an addressable cell (even x, inside both axes)?
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.x % 2 == 0
            && pos.x <= self.max_x()
            && pos.y <= self.max_y()
    }

    pub fn set_symbol(&mut self, pos: Position, symbol: Symbol) {
        assert!(self.is_in_bounds(pos), "write outside arena at {:?}", pos);
        self.rows[pos.y as usize][pos.x as usize] = symbol.glyph();
    }

    /// Reset a cell to the empty marker.
    pub fn clear(&mut self, pos: Position) {
        self.set_symbol(pos, Symbol::Empty);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn symbol_at(&self, pos: Position) -> Option<Symbol> {
        if !self.is_in_bounds(pos) {
            return None;
        }
        Symbol::from_glyph(self.rows[pos.y as usize][pos.x as usize])
    }

    /// All addressable cells currently holding the empty marker.
    /// Recomputed on every call; occupancy changes every tick.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .step_by(2)
                .filter(|&(_, &c)| Symbol::from_glyph(c).map_or(false, Symbol::is_empty))
                .map(move |(x, _)| Position::new(x as i32, y as i32))
        })
    }

    /// Labeled frame: column letters, a border, numbered rows, a border.
    pub fn render(&self) -> Vec<String> {
        let letters: Vec<String> = (0..self.width)
            .map(|i| char::from(b'A' + i as u8).to_string())
            .collect();
        let border = format!("   +{}+", "-".repeat(self.storage_cols() + 2));

        let mut out = Vec::with_capacity(self.height + 3);
        out.push(format!("    {}", letters.join(" ")));
        out.push(border.clone());
        for (r, row) in self.rows.iter().enumerate() {
            let cells: String = row.iter().collect();
            out.push(format!("{:>2} | {} |", r, cells));
        }
        out.push(border);
        out
    }
}

/// Number of frame lines above the first arena row in `render()` output.
pub const RENDER_HEADER_LINES: usize = 2;
/// Column of the first addressable cell in a rendered arena row.
pub const RENDER_CELL_COL: usize = 5;
