/// Errors that end a session.
///
/// Rejected moves and jumps are not errors; they come back as `false`
/// from the wizard and as `MoveRejected` / `TeleportRejected` events.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no free cell left in the arena to spawn a crystal")]
    NoFreeCell,
    /// The command feed ended without a quit: a scripted source ran dry,
    /// or the terminal's input hit end-of-file.
    #[error("input source closed before the game ended")]
    InputClosed,
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
