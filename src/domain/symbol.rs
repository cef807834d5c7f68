/// Cell symbols and their glyphs.
/// Every addressable cell holds exactly one of these; glyph mapping is
/// centralized here so the grid, renderer and tests agree on it.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Symbol {
    Empty,
    Wizard,
    Trail,
    Crystal,
    Portal,
}

/// Filler between addressable cells in the stored row.
pub const FILLER: char = ' ';

impl Symbol {
    pub fn glyph(self) -> char {
        match self {
            Symbol::Empty => '.',
            Symbol::Wizard => 'W',
            Symbol::Trail => 'o',
            Symbol::Crystal => '*',
            Symbol::Portal => '@',
        }
    }

    /// Inverse of `glyph()`. Filler and unknown chars map to `None`.
    pub fn from_glyph(c: char) -> Option<Symbol> {
        match c {
            '.' => Some(Symbol::Empty),
            'W' => Some(Symbol::Wizard),
            'o' => Some(Symbol::Trail),
            '*' => Some(Symbol::Crystal),
            '@' => Some(Symbol::Portal),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Symbol::Empty)
    }
}
