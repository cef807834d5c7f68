/// Terminal drawing for the arena and the menu screens.
///
/// Each frame is composed into an off-screen `Canvas`, compared cell by
/// cell with the canvas shown last time, and only the differing cells are
/// written. Commands are queued and flushed once per frame.
///
/// The arena is drawn from the labeled rows of `Grid::render()`; this
/// layer adds color, the HUD and the help lines.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::domain::grid::{Position, RENDER_CELL_COL, RENDER_HEADER_LINES};
use crate::domain::symbol::Symbol;
use crate::error::GameError;
use crate::sim::session::FrameSink;
use crate::sim::world::WorldState;

// ── Canvas ──

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Cell {
    const BLANK: Cell = Cell { ch: ' ', fg: Color::Reset };
    /// Never drawn; marks a canvas whose every cell must be repainted.
    const STALE: Cell = Cell { ch: '\u{0}', fg: Color::Reset };
}

struct Canvas {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    fn sized(cols: usize, rows: usize, fill: Cell) -> Self {
        Canvas { cols, rows, cells: vec![fill; cols * rows] }
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.cols && y < self.rows).then(|| y * self.cols + x)
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        self.index(x, y).map_or(Cell::BLANK, |i| self.cells[i])
    }

    /// Text runs left to right and is clipped at the right edge.
    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i, y, Cell { ch, fg });
        }
    }
}

// ── Palette ──

const HUD_FG: Color = Color::Rgb { r: 255, g: 220, b: 120 };
const LABEL_FG: Color = Color::Rgb { r: 130, g: 130, b: 150 };
const MSG_FG: Color = Color::Rgb { r: 120, g: 220, b: 255 };
const HELP_FG: Color = Color::DarkGrey;

fn symbol_color(s: Symbol) -> Color {
    match s {
        Symbol::Empty => Color::Rgb { r: 70, g: 70, b: 90 },
        Symbol::Wizard => Color::Rgb { r: 210, g: 130, b: 255 },
        Symbol::Trail => Color::Rgb { r: 140, g: 90, b: 210 },
        Symbol::Crystal => Color::Rgb { r: 80, g: 230, b: 255 },
        Symbol::Portal => Color::Rgb { r: 255, g: 160, b: 50 },
    }
}

/// Board coordinates as shown on the frame labels, e.g. `C4`.
fn cell_label(pos: Position) -> String {
    let col = char::from(b'A' + (pos.x / 2) as u8);
    format!("{}{}", col, pos.y)
}

// Play screen layout: HUD on top, board two rows below, left margin.
const HUD_ROW: usize = 0;
const BOARD_TOP: usize = 2;
const LEFT: usize = 2;

const HELP: [&str; 3] = [
    "h/j/k/l move   0/$ jump to row start/end",
    "{n}G or {n}gg jump to row n (one open portal at a time)",
    "q quit",
];

// ── Renderer ──

pub struct Renderer {
    out: BufWriter<io::Stdout>,
    next: Canvas,
    shown: Canvas,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            out: BufWriter::new(io::stdout()),
            next: Canvas::sized(0, 0, Cell::BLANK),
            shown: Canvas::sized(0, 0, Cell::STALE),
        }
    }

    /// Plain screen: each line drawn from the top-left with its own color.
    pub fn draw_lines(&mut self, lines: &[(String, Color)]) -> io::Result<()> {
        self.begin_frame()?;
        for (i, (text, fg)) in lines.iter().enumerate() {
            self.next.put_str(LEFT, 1 + i, text, *fg);
        }
        self.end_frame()
    }

    /// Play screen: HUD, colored arena, message bar, help.
    pub fn draw_arena(&mut self, world: &WorldState) -> io::Result<()> {
        self.begin_frame()?;
        self.compose_hud(world);

        let rows = world.grid.render();
        let arena_rows = world.grid.height();
        for (i, line) in rows.iter().enumerate() {
            let y = BOARD_TOP + i;
            let in_arena = i >= RENDER_HEADER_LINES && i < RENDER_HEADER_LINES + arena_rows;
            for (x, ch) in line.chars().enumerate() {
                let fg = if in_arena && x >= RENDER_CELL_COL {
                    Symbol::from_glyph(ch).map_or(LABEL_FG, symbol_color)
                } else {
                    LABEL_FG
                };
                self.next.set(LEFT + x, y, Cell { ch, fg });
            }
        }

        let below = BOARD_TOP + rows.len() + 1;
        if !world.message.is_empty() {
            self.next.put_str(LEFT, below, &world.message, MSG_FG);
        }
        for (i, help) in HELP.iter().enumerate() {
            self.next.put_str(LEFT, below + 2 + i, help, HELP_FG);
        }

        self.end_frame()
    }

    fn compose_hud(&mut self, world: &WorldState) {
        let mut hud = format!(
            "VimWizards  {}x{}   Score: {}",
            world.grid.width(),
            world.grid.height(),
            world.score()
        );
        let trail = world.wizard.trail();
        if !trail.is_empty() {
            hud.push_str(&format!("   Trail: {}", trail.len()));
        }
        self.next.put_str(LEFT, HUD_ROW, &hud, HUD_FG);

        if let Some(portal) = world.wizard.portal() {
            let x = LEFT + hud.chars().count() + 3;
            let text = format!("Portal {} -> {}", cell_label(portal.entry), cell_label(portal.exit));
            self.next.put_str(x, HUD_ROW, &text, symbol_color(Symbol::Portal));
        }
    }

    /// Start a frame on a blank canvas sized to the terminal. A size
    /// change clears the screen and marks everything for repaint.
    fn begin_frame(&mut self) -> io::Result<()> {
        let (cols, rows) = terminal::size()
            .map(|(c, r)| (c as usize, r as usize))
            .unwrap_or((80, 24));
        if cols != self.shown.cols || rows != self.shown.rows {
            self.shown = Canvas::sized(cols, rows, Cell::STALE);
            queue!(self.out, Clear(ClearType::All))?;
        }
        self.next = Canvas::sized(cols, rows, Cell::BLANK);
        Ok(())
    }

    fn end_frame(&mut self) -> io::Result<()> {
        self.write_changes()?;
        std::mem::swap(&mut self.next, &mut self.shown);
        Ok(())
    }

    /// Write every cell that differs from what is on screen. Adjacent
    /// changed cells on one row share a single cursor move.
    fn write_changes(&mut self) -> io::Result<()> {
        let mut fg = Color::Reset;
        let mut cursor: Option<(usize, usize)> = None;
        queue!(self.out, SetForegroundColor(fg))?;

        for y in 0..self.next.rows {
            for x in 0..self.next.cols {
                let cell = self.next.get(x, y);
                if cell == self.shown.get(x, y) {
                    continue;
                }
                if cursor != Some((x, y)) {
                    queue!(self.out, MoveTo(x as u16, y as u16))?;
                }
                if cell.fg != fg {
                    fg = cell.fg;
                    queue!(self.out, SetForegroundColor(fg))?;
                }
                queue!(self.out, Print(cell.ch))?;
                cursor = Some((x + 1, y));
            }
        }

        self.out.flush()
    }
}

impl FrameSink for Renderer {
    fn draw_frame(&mut self, world: &WorldState) -> Result<(), GameError> {
        self.draw_arena(world)?;
        Ok(())
    }
}
