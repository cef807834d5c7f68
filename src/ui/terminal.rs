/// Terminal session guard.
///
/// Raw mode, the alternate screen and the hidden cursor are acquired once
/// in `start()` and released in `Drop`, so the terminal is restored on
/// every exit path: quit, game over, or an error bubbling out of `main`.

use std::io::{self, Write};

use crossterm::{cursor, execute, style::ResetColor, terminal};

pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(TerminalSession { active: true })
    }

    /// Restore the terminal now, reporting failures. Drop becomes a no-op.
    pub fn finish(mut self) -> io::Result<()> {
        self.active = false;
        restore()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = restore();
        }
    }
}

fn restore() -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen)?;
    out.flush()?;
    terminal::disable_raw_mode()
}
