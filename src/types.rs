use serde::{Deserialize, Serialize};

/// A board coordinate. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// The two sides of a match. Player one moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Disc behaviour classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscKind {
    /// Flips normally when captured.
    Standard,
    /// Triggers an 8-neighbour chain reaction when captured.
    Bomb,
    /// Keeps its owner for life and blocks capture rays.
    Unflippable,
}

impl DiscKind {
    /// Special kinds are drawn from a limited per-player inventory.
    pub fn is_special(self) -> bool {
        !matches!(self, DiscKind::Standard)
    }
}

/// An owned token sitting on one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Disc {
    owner: PlayerId,
    kind: DiscKind,
}

impl Disc {
    pub fn new(owner: PlayerId, kind: DiscKind) -> Self {
        Self { owner, kind }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn kind(&self) -> DiscKind {
        self.kind
    }

    /// Reassigns ownership. Unflippable discs never change owner;
    /// returns `false` when the write was blocked.
    pub fn set_owner(&mut self, owner: PlayerId) -> bool {
        if self.kind == DiscKind::Unflippable {
            return false;
        }
        self.owner = owner;
        true
    }
}

/// Per-side identity plus the match-scoped counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub bombs_left: u8,
    pub unflippables_left: u8,
    pub wins: u32,
}

impl Player {
    pub fn new(id: PlayerId, bombs: u8, unflippables: u8) -> Self {
        Self {
            id,
            bombs_left: bombs,
            unflippables_left: unflippables,
            wins: 0,
        }
    }

    /// Whether a disc of `kind` can currently be placed from inventory.
    pub fn has_available(&self, kind: DiscKind) -> bool {
        match kind {
            DiscKind::Standard => true,
            DiscKind::Bomb => self.bombs_left > 0,
            DiscKind::Unflippable => self.unflippables_left > 0,
        }
    }

    pub(crate) fn consume(&mut self, kind: DiscKind) {
        debug_assert!(self.has_available(kind));
        match kind {
            DiscKind::Standard => {}
            DiscKind::Bomb => self.bombs_left -= 1,
            DiscKind::Unflippable => self.unflippables_left -= 1,
        }
    }

    pub(crate) fn restore(&mut self, kind: DiscKind) {
        match kind {
            DiscKind::Standard => {}
            DiscKind::Bomb => self.bombs_left += 1,
            DiscKind::Unflippable => self.unflippables_left += 1,
        }
    }
}

/// One successful placement. The newest record is the only undo target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub kind: DiscKind,
    pub pos: Position,
    /// Cells whose ownership changed, in row-major order.
    pub captured: Vec<Position>,
}

/// Public snapshot of a running match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cells, `None` for empty.
    pub board: Vec<Option<Disc>>,
    pub current_player: PlayerId,
    pub p1_count: u16,
    pub p2_count: u16,
    pub is_game_over: bool,
    pub history_len: usize,
    pub players: [Player; 2],
}

/// Final standing once no move remains. `winner` is `None` on a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<PlayerId>,
    pub p1_count: u16,
    pub p2_count: u16,
}
