//! Engine for a Reversi variant with two special disc kinds: bombs, which
//! chain-react through their neighbourhood when captured, and unflippable
//! discs, which never change owner and block capture rays.
//!
//! The crate is the board/move core only. It performs no I/O; callers drive
//! a [`Game`] through its move contract and drain structured [`GameEvent`]s
//! for display.

pub mod board;
pub mod engine;
pub mod error;
pub mod event;
pub mod game;
pub mod policy;
pub mod types;

pub use board::Board;
pub use error::{MoveError, TurnError, UndoError, UnknownPolicy};
pub use event::GameEvent;
pub use game::{Game, GameConfig};
pub use policy::{GreedyPolicy, Policy, PolicyKind, RandomPolicy};
pub use types::{
    Disc, DiscKind, GameResult, GameState, MoveRecord, Player, PlayerId, Position,
};
