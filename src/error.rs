use thiserror::Error;

/// Rejected-move outcomes. None of these are fatal; a caller or policy is
/// expected to pick another move and try again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The target cell lies outside the board.
    #[error("position is outside the board")]
    InvalidPosition,

    /// The target cell already holds a disc.
    #[error("target cell is already occupied")]
    CellOccupied,

    /// The acting player has no disc of the requested special kind left.
    #[error("no special disc of the requested kind remains")]
    SpecialDiscUnavailable,

    /// The placement would capture nothing.
    #[error("move would capture nothing")]
    NoCaptures,
}

/// Failures of `Game::undo_last`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    /// There is no move to undo.
    #[error("no move to undo")]
    NoHistory,
}

/// Failures of a policy-driven turn.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    #[error("game is already over")]
    GameOver,

    /// The active side has no policy configured (human pass-through side).
    #[error("active player has no policy configured")]
    NoPolicy,

    /// The policy declined to produce a move.
    #[error("policy produced no move")]
    NoMove,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Unrecognized policy name passed to match setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown policy name: {0}")]
pub struct UnknownPolicy(pub String);
