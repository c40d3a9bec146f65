//! Pure capture queries over a [`Board`].
//!
//! Single source of truth for the capture rule: a directional scan along the
//! eight rays from the placement cell, plus an 8-neighbour breadth-first
//! flood for every bomb that becomes a capture target. All functions here are
//! side-effect free; the [`Game`](crate::game::Game) applies the results.

use std::collections::{BTreeSet, VecDeque};

use crate::board::{Board, DIRECTIONS, step};
use crate::types::{DiscKind, PlayerId, Position};

/// Computes the full capture set for a disc owned by `mover` placed at
/// `pos`, in row-major order. Empty when the placement captures nothing,
/// when `pos` is out of bounds, or when the cell is occupied.
///
/// The set depends only on the placement cell and the mover: the placed disc
/// is never a capture target itself, so its kind cannot start a chain
/// reaction on the turn it is placed.
pub fn captures(board: &Board, pos: Position, mover: PlayerId) -> Vec<Position> {
    if !board.in_bounds(pos) || board.disc_at(pos).is_some() {
        return Vec::new();
    }

    let size = board.size();
    let mut captured: BTreeSet<Position> = BTreeSet::new();
    // Bombs whose neighbourhood still has to be expanded. `expanded` bounds
    // the flood: each bomb cell is queued at most once per move, so mutually
    // adjacent bomb clusters terminate.
    let mut flood: VecDeque<Position> = VecDeque::new();
    let mut expanded: BTreeSet<Position> = BTreeSet::new();

    for (dr, dc) in DIRECTIONS {
        let mut run: Vec<Position> = Vec::new();
        let mut cursor = step(pos, dr, dc, size);

        while let Some(cell) = cursor {
            let Some(disc) = board.disc_at(cell) else {
                // Empty cell: the ray has no anchor.
                break;
            };
            if disc.kind() == DiscKind::Unflippable {
                // Blocks the whole ray, no matter who owns it.
                break;
            }
            if disc.owner() == mover {
                // Anchored: confirm the provisional run.
                for &confirmed in &run {
                    captured.insert(confirmed);
                    if is_bomb(board, confirmed) && expanded.insert(confirmed) {
                        flood.push_back(confirmed);
                    }
                }
                break;
            }
            run.push(cell);
            cursor = step(cell, dr, dc, size);
        }
    }

    // Chain reaction: a local 8-neighbour flood from every captured bomb,
    // independent of the directional rays. Neighbours are pre-filtered to
    // in-board cells, so the flood itself can never step out of bounds.
    while let Some(origin) = flood.pop_front() {
        for (dr, dc) in DIRECTIONS {
            let Some(neighbor) = step(origin, dr, dc, size) else {
                continue;
            };
            let Some(disc) = board.disc_at(neighbor) else {
                continue;
            };
            if disc.owner() == mover || disc.kind() == DiscKind::Unflippable {
                continue;
            }
            captured.insert(neighbor);
            if disc.kind() == DiscKind::Bomb && expanded.insert(neighbor) {
                flood.push_back(neighbor);
            }
        }
    }

    captured.into_iter().collect()
}

/// Number of discs a placement at `pos` would capture. Pure and idempotent.
pub fn count_flips(board: &Board, pos: Position, mover: PlayerId) -> usize {
    captures(board, pos, mover).len()
}

/// All cells where `mover` has a capturing placement, in row-major order.
pub fn legal_moves(board: &Board, mover: PlayerId) -> Vec<Position> {
    board
        .positions()
        .filter(|&pos| board.disc_at(pos).is_none() && count_flips(board, pos, mover) > 0)
        .collect()
}

fn is_bomb(board: &Board, pos: Position) -> bool {
    board.disc_at(pos).is_some_and(|disc| disc.kind() == DiscKind::Bomb)
}
