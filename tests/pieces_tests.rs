//! Piece catalog and validity tests

use blockfall::core::pieces::{offsets, shape_count};
use blockfall::{ActivePiece, Board, BoardConfig, PieceKind, Rotation};

#[test]
fn test_catalog_has_seven_shapes() {
    assert_eq!(shape_count(), 7);
}

#[test]
fn test_every_rotation_state_has_four_offsets() {
    for kind in PieceKind::ALL {
        for r in 0..Rotation::COUNT {
            let shape = offsets(kind, Rotation::new(r));
            assert_eq!(shape.len(), 4);
        }
    }
}

#[test]
fn test_rotation_indices_cycle() {
    for r in 0..Rotation::COUNT {
        let rotation = Rotation::new(r);
        assert_eq!(rotation.next().next().next().next(), rotation);
    }
}

#[test]
fn test_four_turns_restore_every_shape() {
    for kind in PieceKind::ALL {
        let mut rotation = Rotation::default();
        let original = offsets(kind, rotation);
        for _ in 0..4 {
            rotation = rotation.next();
        }
        assert_eq!(offsets(kind, rotation), original, "{kind:?}");
    }
}

#[test]
fn test_i_piece_spawns_vertical() {
    assert_eq!(
        offsets(PieceKind::I, Rotation::default()),
        [(1, 0), (1, 1), (1, 2), (1, 3)]
    );
    assert_eq!(
        offsets(PieceKind::I, Rotation::new(1)),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
}

#[test]
fn test_o_piece_square() {
    for r in 0..Rotation::COUNT {
        assert_eq!(
            offsets(PieceKind::O, Rotation::new(r)),
            [(0, 0), (1, 0), (0, 1), (1, 1)]
        );
    }
}

#[test]
fn test_l_and_j_mirror_at_spawn() {
    assert_eq!(
        offsets(PieceKind::L, Rotation::default()),
        [(2, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        offsets(PieceKind::J, Rotation::default()),
        [(0, 0), (0, 1), (1, 1), (2, 1)]
    );
}

#[test]
fn test_piece_cells_follow_anchor() {
    let piece = ActivePiece::spawn(PieceKind::T, 3);
    assert_eq!(piece.cells(), [(4, 0), (3, 1), (4, 1), (5, 1)]);

    let moved = piece.shifted(2, 5);
    assert_eq!(moved.cells(), [(6, 5), (5, 6), (6, 6), (7, 6)]);
}

#[test]
fn test_fits_permits_spawn_above_board() {
    let b = Board::new(BoardConfig::default());
    for kind in PieceKind::ALL {
        let piece = ActivePiece {
            kind,
            rotation: Rotation::default(),
            x: 4,
            y: -3,
        };
        assert!(piece.fits(&b, 0, 0, piece.rotation), "{kind:?}");
        assert!(!piece.fits(&b, 0, 24, piece.rotation), "{kind:?}");
    }
}
