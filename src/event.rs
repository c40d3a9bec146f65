use serde::Serialize;

use crate::types::{DiscKind, GameResult, PlayerId, Position};

/// Structured events the engine emits instead of writing to the console.
/// Buffered on the [`Game`](crate::game::Game) and drained by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    MovePlayed {
        player: PlayerId,
        kind: DiscKind,
        pos: Position,
        captured: Vec<Position>,
    },
    MoveUndone {
        player: PlayerId,
        pos: Position,
        /// Cells handed back to the opponent.
        restored: Vec<Position>,
    },
    GameFinished {
        result: GameResult,
    },
    BoardReset,
}
