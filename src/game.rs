use crate::board::{Board, DEFAULT_BOARD_SIZE};
use crate::engine;
use crate::error::{MoveError, TurnError, UndoError};
use crate::event::GameEvent;
use crate::policy::{Policy, PolicyKind};
use crate::types::{Disc, DiscKind, GameResult, GameState, MoveRecord, Player, PlayerId, Position};

pub const DEFAULT_BOMBS_PER_PLAYER: u8 = 3;
pub const DEFAULT_UNFLIPPABLES_PER_PLAYER: u8 = 2;

/// Match-level configuration. Special-disc inventories are granted once per
/// match, not per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: u8,
    pub bombs_per_player: u8,
    pub unflippables_per_player: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            bombs_per_player: DEFAULT_BOMBS_PER_PLAYER,
            unflippables_per_player: DEFAULT_UNFLIPPABLES_PER_PLAYER,
        }
    }
}

/// Turn controller and mutation boundary of a match.
///
/// Owns the board, both players, the move history and the event buffer.
/// Everything outside this crate consumes the engine through this type; no
/// disc reference ever escapes its mutation boundary.
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
    history: Vec<MoveRecord>,
    events: Vec<GameEvent>,
    finished: bool,
    config: GameConfig,
    policies: [Option<Box<dyn Policy>>; 2],
}

impl Game {
    /// Creates a match where both sides are driven externally (human
    /// pass-through on both seats).
    pub fn new(config: GameConfig) -> Self {
        Self::with_policies(config, None, None)
    }

    pub fn with_policies(
        config: GameConfig,
        first: Option<Box<dyn Policy>>,
        second: Option<Box<dyn Policy>>,
    ) -> Self {
        let board = Board::new(config.board_size);
        let finished = engine::legal_moves(&board, PlayerId::One).is_empty();
        Self {
            board,
            players: [
                Player::new(
                    PlayerId::One,
                    config.bombs_per_player,
                    config.unflippables_per_player,
                ),
                Player::new(
                    PlayerId::Two,
                    config.bombs_per_player,
                    config.unflippables_per_player,
                ),
            ],
            current: PlayerId::One,
            history: Vec::new(),
            events: Vec::new(),
            finished,
            config,
            policies: [first, second],
        }
    }

    /// Match setup in the shape external callers use: a human or greedy
    /// first seat against a named scripted policy.
    pub fn new_match(board_size: u8, first_is_human: bool, second: PolicyKind) -> Self {
        let config = GameConfig {
            board_size,
            ..GameConfig::default()
        };
        let first = if first_is_human {
            None
        } else {
            Some(PolicyKind::Greedy.build())
        };
        Self::with_policies(config, first, Some(second.build()))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[Self::seat(id)]
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// All capturing placements for the side to move, row-major.
    pub fn legal_moves(&self) -> Vec<Position> {
        engine::legal_moves(&self.board, self.current)
    }

    /// Capture count the side to move would get at `pos`, without mutating
    /// anything. The count itself does not depend on the placed kind; the
    /// kind argument folds in inventory, so an unavailable special disc
    /// previews as zero.
    pub fn preview_capture_count(&self, pos: Position, kind: DiscKind) -> usize {
        if !self.player(self.current).has_available(kind) {
            return 0;
        }
        engine::count_flips(&self.board, pos, self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns `(player_one_count, player_two_count)`.
    pub fn score(&self) -> (u16, u16) {
        self.board.counts()
    }

    /// The winning side of a finished game. `None` while the game is still
    /// running and on a draw.
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.finished {
            return None;
        }
        let (one, two) = self.board.counts();
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(PlayerId::One),
            std::cmp::Ordering::Less => Some(PlayerId::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn result(&self) -> GameResult {
        let (p1_count, p2_count) = self.board.counts();
        GameResult {
            winner: self.winner(),
            p1_count,
            p2_count,
        }
    }

    /// Public snapshot of the whole match state.
    pub fn snapshot(&self) -> GameState {
        let (p1_count, p2_count) = self.board.counts();
        GameState {
            board: self.board.to_array(),
            current_player: self.current,
            p1_count,
            p2_count,
            is_game_over: self.finished,
            history_len: self.history.len(),
            players: self.players,
        }
    }

    /// Takes all buffered events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Places a disc for the side to move, applies all captures, records the
    /// move and flips the turn. Returns the capture set on success.
    pub fn submit_move(
        &mut self,
        pos: Position,
        kind: DiscKind,
    ) -> Result<Vec<Position>, MoveError> {
        if !self.board.in_bounds(pos) {
            return Err(MoveError::InvalidPosition);
        }
        if self.board.disc_at(pos).is_some() {
            return Err(MoveError::CellOccupied);
        }
        let mover = self.current;
        if !self.player(mover).has_available(kind) {
            return Err(MoveError::SpecialDiscUnavailable);
        }
        let captured = engine::captures(&self.board, pos, mover);
        if captured.is_empty() {
            return Err(MoveError::NoCaptures);
        }

        self.board.place(pos, Disc::new(mover, kind))?;
        for &cell in &captured {
            let flipped = self.board.set_owner(cell, mover);
            debug_assert!(flipped, "capture set must exclude unflippable discs");
        }
        self.players[Self::seat(mover)].consume(kind);
        self.history.push(MoveRecord {
            player: mover,
            kind,
            pos,
            captured: captured.clone(),
        });
        tracing::debug!(
            player = ?mover,
            kind = ?kind,
            row = pos.row,
            col = pos.col,
            captured = captured.len(),
            "move played"
        );
        self.events.push(GameEvent::MovePlayed {
            player: mover,
            kind,
            pos,
            captured: captured.clone(),
        });

        self.current = mover.opponent();
        if engine::legal_moves(&self.board, self.current).is_empty() {
            self.finish();
        }
        Ok(captured)
    }

    /// Reverts the most recent placement: clears the placed cell, hands the
    /// captured cells back and restores any consumed special-disc inventory.
    /// Undoing the finishing move reopens the game and takes back the win.
    pub fn undo_last(&mut self) -> Result<(), UndoError> {
        let record = self.history.pop().ok_or(UndoError::NoHistory)?;

        if self.finished {
            // The popped record is necessarily the move that ended the game.
            if let Some(winner) = self.winner() {
                self.players[Self::seat(winner)].wins -= 1;
            }
            self.finished = false;
        }

        self.board.clear(record.pos);
        let opponent = record.player.opponent();
        for &cell in &record.captured {
            let flipped = self.board.set_owner(cell, opponent);
            debug_assert!(flipped, "recorded captures must be flippable back");
        }
        self.players[Self::seat(record.player)].restore(record.kind);
        self.current = record.player;

        tracing::debug!(
            player = ?record.player,
            row = record.pos.row,
            col = record.pos.col,
            restored = record.captured.len(),
            "move undone"
        );
        self.events.push(GameEvent::MoveUndone {
            player: record.player,
            pos: record.pos,
            restored: record.captured,
        });
        Ok(())
    }

    /// Clears the board, history and turn flag back to the opening position.
    /// Win counters and special-disc inventories are match-scoped and
    /// survive a reset.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.board_size);
        self.history.clear();
        self.current = PlayerId::One;
        self.finished = false;
        tracing::debug!("board reset");
        self.events.push(GameEvent::BoardReset);
    }

    /// Asks the active seat's policy for a move and submits it.
    pub fn play_policy_turn(&mut self) -> Result<Vec<Position>, TurnError> {
        if self.finished {
            return Err(TurnError::GameOver);
        }
        let seat = Self::seat(self.current);
        let choice = match self.policies[seat].as_mut() {
            Some(policy) => policy.decide(&self.board, &self.players[seat]),
            None => return Err(TurnError::NoPolicy),
        };
        let (pos, kind) = choice.ok_or(TurnError::NoMove)?;
        Ok(self.submit_move(pos, kind)?)
    }

    fn finish(&mut self) {
        self.finished = true;
        let result = self.result();
        if let Some(winner) = result.winner {
            self.players[Self::seat(winner)].wins += 1;
        }
        tracing::debug!(winner = ?result.winner, p1 = result.p1_count, p2 = result.p2_count, "game finished");
        self.events.push(GameEvent::GameFinished { result });
    }

    fn seat(id: PlayerId) -> usize {
        match id {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_board_for_test(&mut self, board: Board, current: PlayerId) {
        self.current = current;
        self.finished = engine::legal_moves(&board, current).is_empty();
        self.board = board;
        self.history.clear();
        self.events.clear();
    }
}
