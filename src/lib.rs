//! Rules engine for English draughts (8x8 checkers).
//!
//! [`board::Board`] owns the 32 playable squares and their geometry;
//! [`game::Game`] layers turn order, mandatory jumps, multi-jump chains,
//! promotion and game-over detection on top of it.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::GameConfig;
pub use error::{BoardError, GameError, Rejection, RejectionKind};
pub use game::{DrawOfferStatus, Game, MovablePieces, MoveRecord, Phase};
pub use types::{Color, Direction, NextStep, Outcome, Piece, WinReason};
