//! Core types shared across the crate
//! This module contains pure data types with no game logic

use serde::{Deserialize, Serialize};

/// Default board dimensions
pub const DEFAULT_COLS: u8 = 10;
pub const DEFAULT_ROWS: u8 = 20;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All seven kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];
}

/// Rotation state index, cycling 0 → 1 → 2 → 3 → 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rotation(u8);

impl Rotation {
    pub const COUNT: u8 = 4;

    pub fn new(index: u8) -> Self {
        Self(index % Self::COUNT)
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The next rotation state (one quarter turn)
    pub fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }
}

/// Horizontal move direction for player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    Left,
    Right,
}

impl Shift {
    pub fn dx(self) -> i16 {
        match self {
            Shift::Left => -1,
            Shift::Right => 1,
        }
    }
}

/// Engine lifecycle phase
///
/// `Idle` exists only between construction and the first `start()`;
/// `GameOver` is terminal until an explicit `reset()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, Serialize, Deserialize)]
pub enum GamePhase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Events emitted by the engine, drained by the host after each call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Rows completed and removed by a single settle
    LinesCleared(u32),
    /// Score after it changed (carries the new total)
    ScoreChanged(u32),
    /// A fresh piece could not spawn; the game has ended
    GameOver,
}

/// Cell on the board (`None` = empty, `Some` = locked with piece kind)
pub type Cell = Option<PieceKind>;
