//! Active piece - the currently falling piece and its validity checks

use crate::core::board::Board;
use crate::core::pieces;
use crate::types::{PieceKind, Rotation};

/// The falling piece: kind, rotation state, and anchor position.
/// Transient - replaced wholesale on every spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
}

impl ActivePiece {
    /// A fresh piece at the spawn anchor, rotation state 0
    pub fn spawn(kind: PieceKind, x: i16) -> Self {
        Self {
            kind,
            rotation: Rotation::default(),
            x,
            y: 0,
        }
    }

    /// Absolute cells occupied at the current position and rotation
    pub fn cells(&self) -> [(i16, i16); 4] {
        self.cells_at(0, 0, self.rotation)
    }

    /// Absolute cells the piece would occupy after a displacement and/or
    /// rotation change
    pub fn cells_at(&self, dx: i16, dy: i16, rotation: Rotation) -> [(i16, i16); 4] {
        pieces::offsets(self.kind, rotation).map(|(ox, oy)| (self.x + ox + dx, self.y + oy + dy))
    }

    /// Whether the piece fits on the board after the given displacement and
    /// rotation. Cells above the top edge are fine (tall pieces spawn
    /// partially off-screen); side walls, the floor, and locked cells reject.
    pub fn fits(&self, board: &Board, dx: i16, dy: i16, rotation: Rotation) -> bool {
        self.cells_at(dx, dy, rotation)
            .iter()
            .all(|&(x, y)| board.admits(x, y))
    }

    /// Copy displaced by (dx, dy)
    pub fn shifted(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Copy at a different rotation state, same anchor
    pub fn rotated(self, rotation: Rotation) -> Self {
        Self { rotation, ..self }
    }
}
