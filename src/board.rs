use crate::error::MoveError;
use crate::types::{Disc, DiscKind, PlayerId, Position};

pub const DEFAULT_BOARD_SIZE: u8 = 8;
pub const MAX_BOARD_SIZE: u8 = 16;

pub(crate) const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// N×N arena of disc values indexed by cell, row-major.
///
/// The board owns every disc placed on it; captures are ownership writes
/// through the arena, never shared references to disc state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Disc>>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Panics
    /// `size` must be even, at least 4 and at most [`MAX_BOARD_SIZE`].
    pub fn empty(size: u8) -> Self {
        assert!(
            size >= 4 && size <= MAX_BOARD_SIZE && size % 2 == 0,
            "board size must be even, within 4..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            cells: vec![None; size as usize * size as usize],
        }
    }

    /// Creates a board with the four starting discs: player one (the side
    /// that moves first) on the anti-diagonal centre pair, player two on
    /// the main-diagonal pair, all Standard.
    pub fn new(size: u8) -> Self {
        let mut board = Self::empty(size);
        let hi = size / 2;
        let lo = hi - 1;

        let starters = [
            (Position::new(lo, hi), PlayerId::One),
            (Position::new(hi, lo), PlayerId::One),
            (Position::new(lo, lo), PlayerId::Two),
            (Position::new(hi, hi), PlayerId::Two),
        ];
        for (pos, owner) in starters {
            let idx = board.index(pos);
            board.cells[idx] = Some(Disc::new(owner, DiscKind::Standard));
        }
        board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.in_bounds(pos));
        pos.row as usize * self.size as usize + pos.col as usize
    }

    /// Returns the disc at `pos`, `None` when the cell is empty or `pos`
    /// lies outside the board.
    pub fn disc_at(&self, pos: Position) -> Option<&Disc> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells[self.index(pos)].as_ref()
    }

    /// Stores a disc on an empty in-bounds cell. The write touches only the
    /// targeted cell; capture propagation lives in the engine.
    pub fn place(&mut self, pos: Position, disc: Disc) -> Result<(), MoveError> {
        if !self.in_bounds(pos) {
            return Err(MoveError::InvalidPosition);
        }
        let idx = self.index(pos);
        if self.cells[idx].is_some() {
            return Err(MoveError::CellOccupied);
        }
        self.cells[idx] = Some(disc);
        Ok(())
    }

    /// Removes any disc at `pos`. Clearing an empty cell is a no-op.
    pub fn clear(&mut self, pos: Position) {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            self.cells[idx] = None;
        }
    }

    /// Reassigns ownership of the disc at `pos`. Returns `false` when `pos`
    /// is out of bounds, the cell is empty, or the disc refuses the write
    /// (Unflippable).
    pub fn set_owner(&mut self, pos: Position, owner: PlayerId) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let idx = self.index(pos);
        match self.cells[idx].as_mut() {
            Some(disc) => disc.set_owner(owner),
            None => false,
        }
    }

    /// Returns `(player_one_count, player_two_count)`.
    pub fn counts(&self) -> (u16, u16) {
        let mut one = 0;
        let mut two = 0;
        for disc in self.cells.iter().flatten() {
            match disc.owner() {
                PlayerId::One => one += 1,
                PlayerId::Two => two += 1,
            }
        }
        (one, two)
    }

    pub fn empty_count(&self) -> u16 {
        self.cells.iter().filter(|cell| cell.is_none()).count() as u16
    }

    /// Iterates every board position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Row-major snapshot of all cells.
    pub fn to_array(&self) -> Vec<Option<Disc>> {
        self.cells.clone()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

/// Steps one cell from `pos`; `None` when the step leaves the board.
pub(crate) fn step(pos: Position, dr: i32, dc: i32, size: u8) -> Option<Position> {
    let row = pos.row as i32 + dr;
    let col = pos.col as i32 + dc;
    if (0..size as i32).contains(&row) && (0..size as i32).contains(&col) {
        Some(Position::new(row as u8, col as u8))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn t01_initial_board_has_four_centre_discs() {
        let board = Board::default();

        assert_eq!(board.counts(), (2, 2));
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.disc_at(pos(3, 4)).unwrap().owner(), PlayerId::One);
        assert_eq!(board.disc_at(pos(4, 3)).unwrap().owner(), PlayerId::One);
        assert_eq!(board.disc_at(pos(3, 3)).unwrap().owner(), PlayerId::Two);
        assert_eq!(board.disc_at(pos(4, 4)).unwrap().owner(), PlayerId::Two);
        assert!(board.disc_at(pos(0, 0)).is_none());
    }

    #[test]
    fn initial_layout_scales_with_board_size() {
        let board = Board::new(6);

        assert_eq!(board.size(), 6);
        assert_eq!(board.counts(), (2, 2));
        assert_eq!(board.disc_at(pos(2, 3)).unwrap().owner(), PlayerId::One);
        assert_eq!(board.disc_at(pos(2, 2)).unwrap().owner(), PlayerId::Two);
    }

    #[test]
    #[should_panic(expected = "board size must be even")]
    fn odd_board_size_is_rejected() {
        let _ = Board::empty(7);
    }

    #[test]
    fn place_rejects_occupied_and_out_of_bounds_cells() {
        let mut board = Board::default();
        let disc = Disc::new(PlayerId::One, DiscKind::Standard);

        assert_eq!(board.place(pos(3, 3), disc), Err(MoveError::CellOccupied));
        assert_eq!(board.place(pos(8, 0), disc), Err(MoveError::InvalidPosition));
        assert_eq!(board.place(pos(0, 0), disc), Ok(()));
        assert_eq!(board.counts(), (3, 2));
    }

    #[test]
    fn out_of_bounds_queries_fail_gracefully() {
        let mut board = Board::default();

        assert!(board.disc_at(pos(9, 9)).is_none());
        assert!(board.disc_at(pos(0, 8)).is_none());
        assert!(!board.set_owner(pos(8, 0), PlayerId::One));
        assert_eq!(board.counts(), (2, 2));
    }

    #[test]
    fn clear_removes_discs_and_ignores_empty_cells() {
        let mut board = Board::default();

        board.clear(pos(3, 3));
        assert!(board.disc_at(pos(3, 3)).is_none());
        assert_eq!(board.counts(), (2, 1));

        // No-op on an already empty cell.
        board.clear(pos(3, 3));
        assert!(board.disc_at(pos(3, 3)).is_none());
    }

    #[test]
    fn set_owner_flips_standard_but_not_unflippable() {
        let mut board = Board::empty(4);
        board
            .place(pos(0, 0), Disc::new(PlayerId::One, DiscKind::Standard))
            .unwrap();
        board
            .place(pos(0, 1), Disc::new(PlayerId::One, DiscKind::Unflippable))
            .unwrap();

        assert!(board.set_owner(pos(0, 0), PlayerId::Two));
        assert_eq!(board.disc_at(pos(0, 0)).unwrap().owner(), PlayerId::Two);

        assert!(!board.set_owner(pos(0, 1), PlayerId::Two));
        assert_eq!(board.disc_at(pos(0, 1)).unwrap().owner(), PlayerId::One);

        assert!(!board.set_owner(pos(1, 1), PlayerId::Two));
    }

    #[test]
    fn positions_iterate_row_major() {
        let board = Board::empty(4);
        let all: Vec<Position> = board.positions().collect();

        assert_eq!(all.len(), 16);
        assert_eq!(all[0], pos(0, 0));
        assert_eq!(all[1], pos(0, 1));
        assert_eq!(all[4], pos(1, 0));
        assert_eq!(all[15], pos(3, 3));
    }

    #[test]
    fn step_stops_at_board_edges() {
        assert_eq!(step(pos(0, 0), -1, 0, 8), None);
        assert_eq!(step(pos(0, 0), 0, -1, 8), None);
        assert_eq!(step(pos(7, 7), 1, 1, 8), None);
        assert_eq!(step(pos(3, 3), 1, -1, 8), Some(pos(4, 2)));
    }
}
