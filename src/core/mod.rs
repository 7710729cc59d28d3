//! Core module - pure simulation logic with no I/O
//!
//! Board, piece catalog, validity checking, spawning, scoring, and the
//! engine state machine. Nothing here owns a clock or a screen.

pub mod board;
pub mod engine;
pub mod piece;
pub mod pieces;
pub mod scoring;
pub mod snapshot;
pub mod spawner;

pub use board::Board;
pub use engine::GameEngine;
pub use piece::ActivePiece;
pub use snapshot::{ActiveSnapshot, BoardSnapshot, CellState, EngineSnapshot};
pub use spawner::{RandomSource, SequenceSource, ShapeSource};
