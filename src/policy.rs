use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::engine;
use crate::error::UnknownPolicy;
use crate::types::{DiscKind, Player, Position};

/// A scripted decision strategy for one seat of a match.
///
/// Policies only consult the engine's pure query surface; all mutation and
/// inventory accounting stays in [`Game`](crate::game::Game). Human input is
/// a pass-through at the caller and never shows up here.
pub trait Policy: Send {
    /// Picks a placement for `player`, or `None` when no legal move exists.
    fn decide(&mut self, board: &Board, player: &Player) -> Option<(Position, DiscKind)>;
}

/// One-ply greedy: the first cell with the maximum immediate capture count,
/// scanning row-major. Fully deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn decide(&mut self, board: &Board, player: &Player) -> Option<(Position, DiscKind)> {
        // One pass over the board; cells with zero captures are illegal and
        // never become candidates.
        let mut best: Option<(Position, usize)> = None;
        for pos in board.positions() {
            if board.disc_at(pos).is_some() {
                continue;
            }
            let flips = engine::count_flips(board, pos, player.id);
            if flips == 0 {
                continue;
            }
            // Strict comparison keeps the first maximum in scan order.
            if best.is_none_or(|(_, best_flips)| flips > best_flips) {
                best = Some((pos, flips));
            }
        }
        // The capture count does not depend on the placed kind, so Standard
        // wins the kind tie-break and the special inventory is preserved.
        best.map(|(pos, _)| (pos, DiscKind::Standard))
    }
}

/// Uniform random cell, then uniform random disc kind among those the
/// player still has in inventory.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fixed-seed variant for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn decide(&mut self, board: &Board, player: &Player) -> Option<(Position, DiscKind)> {
        let moves = engine::legal_moves(board, player.id);
        if moves.is_empty() {
            return None;
        }
        let pos = moves[self.rng.random_range(0..moves.len())];

        let mut kinds = vec![DiscKind::Standard];
        if player.has_available(DiscKind::Bomb) {
            kinds.push(DiscKind::Bomb);
        }
        if player.has_available(DiscKind::Unflippable) {
            kinds.push(DiscKind::Unflippable);
        }
        let kind = kinds[self.rng.random_range(0..kinds.len())];
        Some((pos, kind))
    }
}

/// Named policy constructors for match setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Greedy,
    Random,
}

impl PolicyKind {
    pub fn build(self) -> Box<dyn Policy> {
        match self {
            PolicyKind::Greedy => Box::new(GreedyPolicy),
            PolicyKind::Random => Box::new(RandomPolicy::new()),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "greedy" => Ok(PolicyKind::Greedy),
            "random" => Ok(PolicyKind::Random),
            _ => Err(UnknownPolicy(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Disc, PlayerId};

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn put(board: &mut Board, row: u8, col: u8, owner: PlayerId, kind: DiscKind) {
        board.place(pos(row, col), Disc::new(owner, kind)).unwrap();
    }

    fn player_one() -> Player {
        Player::new(PlayerId::One, 3, 2)
    }

    #[test]
    fn greedy_is_deterministic_on_the_opening_board() {
        let board = Board::default();
        let mut policy = GreedyPolicy;

        let first = policy.decide(&board, &player_one()).unwrap();
        for _ in 0..10 {
            assert_eq!(policy.decide(&board, &player_one()).unwrap(), first);
        }
        // All four opening moves capture one disc; row-major tie-break picks
        // the first.
        assert_eq!(first, (pos(2, 3), DiscKind::Standard));
    }

    #[test]
    fn greedy_prefers_the_larger_capture() {
        let mut board = Board::empty(8);
        // (0,0) captures one, (7,0) captures two.
        put(&mut board, 0, 1, PlayerId::Two, DiscKind::Standard);
        put(&mut board, 0, 2, PlayerId::One, DiscKind::Standard);
        put(&mut board, 7, 1, PlayerId::Two, DiscKind::Standard);
        put(&mut board, 7, 2, PlayerId::Two, DiscKind::Standard);
        put(&mut board, 7, 3, PlayerId::One, DiscKind::Standard);

        let choice = GreedyPolicy.decide(&board, &player_one()).unwrap();
        assert_eq!(choice, (pos(7, 0), DiscKind::Standard));
    }

    #[test]
    fn greedy_matches_the_row_major_argmax_of_count_flips() {
        let mut board = Board::default();
        // A mid-game-ish position with uneven capture counts.
        put(&mut board, 2, 3, PlayerId::One, DiscKind::Standard);
        put(&mut board, 2, 2, PlayerId::Two, DiscKind::Standard);

        let legal = engine::legal_moves(&board, PlayerId::One);
        let expected = legal
            .iter()
            .copied()
            .max_by_key(|&p| {
                // Row-major ties resolve to the earliest cell.
                (
                    engine::count_flips(&board, p, PlayerId::One),
                    std::cmp::Reverse(p),
                )
            })
            .unwrap();

        let (choice, _) = GreedyPolicy.decide(&board, &player_one()).unwrap();
        assert_eq!(choice, expected);
    }

    #[test]
    fn greedy_returns_none_without_legal_moves() {
        let board = Board::empty(8);
        assert_eq!(GreedyPolicy.decide(&board, &player_one()), None);
    }

    #[test]
    fn greedy_never_spends_special_discs() {
        let board = Board::default();
        let (_, kind) = GreedyPolicy.decide(&board, &player_one()).unwrap();
        assert_eq!(kind, DiscKind::Standard);
    }

    #[test]
    fn random_stays_within_legal_moves_and_inventory() {
        let board = Board::default();
        let mut policy = RandomPolicy::seeded(42);
        let legal = engine::legal_moves(&board, PlayerId::One);

        for _ in 0..50 {
            let (pos, kind) = policy.decide(&board, &player_one()).unwrap();
            assert!(legal.contains(&pos));
            assert!(player_one().has_available(kind));
        }
    }

    #[test]
    fn random_with_empty_inventory_only_plays_standard() {
        let board = Board::default();
        let mut policy = RandomPolicy::seeded(7);
        let broke = Player::new(PlayerId::One, 0, 0);

        for _ in 0..50 {
            let (_, kind) = policy.decide(&board, &broke).unwrap();
            assert_eq!(kind, DiscKind::Standard);
        }
    }

    #[test]
    fn random_returns_none_without_legal_moves() {
        let board = Board::empty(8);
        let mut policy = RandomPolicy::seeded(1);
        assert_eq!(policy.decide(&board, &player_one()), None);
    }

    #[test]
    fn seeded_random_replays_identically() {
        let board = Board::default();
        let mut a = RandomPolicy::seeded(99);
        let mut b = RandomPolicy::seeded(99);

        for _ in 0..20 {
            assert_eq!(
                a.decide(&board, &player_one()),
                b.decide(&board, &player_one())
            );
        }
    }

    #[test]
    fn policy_names_parse_case_insensitively() {
        assert_eq!("greedy".parse::<PolicyKind>().unwrap(), PolicyKind::Greedy);
        assert_eq!("Random".parse::<PolicyKind>().unwrap(), PolicyKind::Random);
        assert!("minimax".parse::<PolicyKind>().is_err());
    }
}
