/// Events emitted during a simulation step.
/// The presentation layer and the log consume these.

use crate::domain::grid::Position;

#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Moved { to: Position },
    MoveRejected,
    Teleported { from: Position, to: Position },
    TeleportRejected,
    CrystalCollected { score: u32, respawned_at: Position },
    PortalClosed,
    GameOver { score: u32 },
}
