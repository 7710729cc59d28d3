//! Serializable snapshots of board and engine state
//!
//! Hosts read these after every engine mutation to render; they carry no
//! behavior and never feed back into the simulation.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::piece::ActivePiece;
use crate::types::{GamePhase, PieceKind, Rotation};

/// Authoritative cell state as exported to hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Locked,
}

/// rows x cols grid of locked cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub cols: u8,
    pub rows: u8,
    pub grid: Vec<Vec<CellState>>,
}

impl BoardSnapshot {
    pub fn capture(board: &Board) -> Self {
        let grid = (0..board.rows())
            .map(|y| {
                (0..board.cols())
                    .map(|x| {
                        if board.is_locked(x, y) {
                            CellState::Locked
                        } else {
                            CellState::Empty
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            cols: board.cols() as u8,
            rows: board.rows() as u8,
            grid,
        }
    }

    pub fn locked_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == CellState::Locked)
            .count()
    }
}

/// The falling piece, with its absolute cells precomputed for overlay
/// rendering on top of the board grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
    pub cells: [(i16, i16); 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(piece: ActivePiece) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            x: piece.x,
            y: piece.y,
            cells: piece.cells(),
        }
    }
}

/// Complete engine state as visible to a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub board: BoardSnapshot,
    pub active: Option<ActiveSnapshot>,
    pub phase: GamePhase,
    pub score: u32,
}
