//! blockfall - a falling-block puzzle simulation engine.
//!
//! A rectangular board accepts a sequence of piece placements, enforces
//! spatial legality, locks pieces on contact, detects and removes completed
//! rows, and tracks score. The engine is a closed, deterministic simulation:
//! it owns no timer, thread, or screen. A host drives it by calling
//! [`GameEngine::tick`] on a fixed cadence and translating player input into
//! [`GameEngine::shift`] / [`GameEngine::rotate`] calls, then reads
//! snapshots and drains events to render.
//!
//! ```
//! use blockfall::{BoardConfig, GameEngine, Shift};
//!
//! let mut engine = GameEngine::with_seed(BoardConfig::default(), 42).unwrap();
//! engine.start();
//! engine.shift(Shift::Left);
//! engine.rotate();
//! engine.tick();
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.score, 0);
//! ```

pub mod config;
pub mod core;
pub mod types;

pub use config::{BoardConfig, ConfigError};
pub use core::{
    ActivePiece, Board, BoardSnapshot, CellState, EngineSnapshot, GameEngine, RandomSource,
    SequenceSource, ShapeSource,
};
pub use types::{GameEvent, GamePhase, PieceKind, Rotation, Shift};
