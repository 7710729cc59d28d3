//! Piece catalog - static tetromino shape tables
//!
//! Every kind stores its 4 rotation states as precomputed cell offsets from
//! the piece anchor; nothing rotates geometrically at runtime. O repeats one
//! state four times, I/S/Z alternate between two, T/L/J have four distinct
//! states. This matches classic kick-free rotation exactly.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i16, i16);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

/// Number of distinct piece kinds in the catalog
pub const SHAPE_COUNT: usize = 7;

/// Indexed by [kind][rotation]; order matches `PieceKind::ALL`
const SHAPES: [[PieceShape; Rotation::COUNT as usize]; SHAPE_COUNT] = [
    // I
    [
        [(1, 0), (1, 1), (1, 2), (1, 3)],
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
        [(0, 1), (1, 1), (2, 1), (3, 1)],
    ],
    // O
    [
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
    ],
];

/// Cell offsets for a kind at a rotation state; always exactly 4
pub fn offsets(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind as usize][rotation.index()]
}

pub fn shape_count() -> usize {
    SHAPE_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotations() -> [Rotation; 4] {
        [
            Rotation::new(0),
            Rotation::new(1),
            Rotation::new(2),
            Rotation::new(3),
        ]
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(shape_count(), 7);
        assert_eq!(PieceKind::ALL.len(), SHAPE_COUNT);
    }

    #[test]
    fn test_every_state_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for rotation in rotations() {
                let shape = offsets(kind, rotation);
                for i in 0..4 {
                    for j in i + 1..4 {
                        assert_ne!(shape[i], shape[j], "{kind:?} {rotation:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_offsets_fit_four_wide_box() {
        for kind in PieceKind::ALL {
            for rotation in rotations() {
                for (dx, dy) in offsets(kind, rotation) {
                    assert!((0..4).contains(&dx), "{kind:?} {rotation:?}");
                    assert!((0..4).contains(&dy), "{kind:?} {rotation:?}");
                }
            }
        }
    }

    #[test]
    fn test_o_piece_rotation_invariant() {
        let base = offsets(PieceKind::O, Rotation::new(0));
        for rotation in rotations() {
            assert_eq!(offsets(PieceKind::O, rotation), base);
        }
    }

    #[test]
    fn test_two_fold_pieces_alternate() {
        for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
            assert_eq!(
                offsets(kind, Rotation::new(0)),
                offsets(kind, Rotation::new(2))
            );
            assert_eq!(
                offsets(kind, Rotation::new(1)),
                offsets(kind, Rotation::new(3))
            );
            assert_ne!(
                offsets(kind, Rotation::new(0)),
                offsets(kind, Rotation::new(1))
            );
        }
    }

    #[test]
    fn test_t_piece_states() {
        assert_eq!(
            offsets(PieceKind::T, Rotation::new(0)),
            [(1, 0), (0, 1), (1, 1), (2, 1)]
        );
        assert_eq!(
            offsets(PieceKind::T, Rotation::new(2)),
            [(0, 1), (1, 1), (2, 1), (1, 2)]
        );
    }
}
