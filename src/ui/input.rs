/// Keyboard decoding: raw crossterm key events → logical commands.
///
/// Vim motions, with a count prefix that survives across key presses:
///   h j k l / arrows   move one cell
///   0                  jump to row start (only when no count is pending)
///   $                  jump to row end
///   {n}G  / G          jump to row n / last row
///   {n}gg / gg         jump to row n / first row
///   q  Esc  Ctrl+C     quit
///
/// The only blocking read in the game happens here.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::GameError;
use crate::sim::command::Command;
use crate::sim::session::CommandSource;

/// Counts past this are clamped; no arena is that tall.
const MAX_COUNT: usize = 9_999;

pub struct KeyDecoder {
    last_row: usize,
    count: Option<usize>,
    pending_g: bool,
}

impl KeyDecoder {
    pub fn new(last_row: usize) -> Self {
        KeyDecoder { last_row, count: None, pending_g: false }
    }

    /// Feed one key. `None` means more keys are needed (count digits, first `g`).
    pub fn decode(&mut self, key: KeyEvent) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if is_ctrl_c(&key) {
            self.reset();
            return Some(Command::Quit);
        }

        match key.code {
            KeyCode::Char(d @ '0'..='9') => {
                if d == '0' && self.count.is_none() {
                    self.reset();
                    return Some(Command::JumpToRowStart);
                }
                let digit = d as usize - '0' as usize;
                let next = self.count.unwrap_or(0).saturating_mul(10).saturating_add(digit);
                self.count = Some(next.min(MAX_COUNT));
                self.pending_g = false;
                None
            }
            KeyCode::Char('G') => {
                let row = self.count.take().unwrap_or(self.last_row);
                self.pending_g = false;
                Some(Command::JumpToRow(row))
            }
            KeyCode::Char('g') => {
                if self.pending_g {
                    let row = self.count.take().unwrap_or(0);
                    self.pending_g = false;
                    Some(Command::JumpToRow(row))
                } else {
                    self.pending_g = true;
                    None
                }
            }
            code => {
                self.reset();
                Some(plain_key(code))
            }
        }
    }

    fn reset(&mut self) {
        self.count = None;
        self.pending_g = false;
    }
}

fn plain_key(code: KeyCode) -> Command {
    match code {
        KeyCode::Char('h') | KeyCode::Left => Command::MoveLeft,
        KeyCode::Char('l') | KeyCode::Right => Command::MoveRight,
        KeyCode::Char('k') | KeyCode::Up => Command::MoveUp,
        KeyCode::Char('j') | KeyCode::Down => Command::MoveDown,
        KeyCode::Char('$') => Command::JumpToRowEnd,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => Command::Noop,
    }
}

pub fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && (key.code == KeyCode::Char('c') || key.code == KeyCode::Char('C'))
}

/// Block until the next key press.
pub fn read_key() -> Result<KeyEvent, GameError> {
    loop {
        if let Event::Key(key) = event::read().map_err(read_error)? {
            if key.kind != KeyEventKind::Release {
                return Ok(key);
            }
        }
    }
}

/// A terminal whose input side has gone away reports end-of-file or a
/// broken pipe; that is a closed feed, anything else a terminal fault.
fn read_error(e: io::Error) -> GameError {
    match e.kind() {
        io::ErrorKind::UnexpectedEof | io::ErrorKind::BrokenPipe => GameError::InputClosed,
        _ => GameError::Terminal(e),
    }
}

/// Live keyboard feed for the play loop.
pub struct TerminalInput {
    decoder: KeyDecoder,
}

impl TerminalInput {
    pub fn new(last_row: usize) -> Self {
        TerminalInput { decoder: KeyDecoder::new(last_row) }
    }
}

impl CommandSource for TerminalInput {
    fn next_command(&mut self) -> Result<Command, GameError> {
        loop {
            let key = read_key()?;
            if let Some(cmd) = self.decoder.decode(key) {
                return Ok(cmd);
            }
        }
    }
}
