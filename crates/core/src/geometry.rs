//! Bounding-box extremes of a piece in grid coordinates

use crate::piece::ActivePiece;

/// Tightest rectangle around a piece's 4 cells (inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

pub fn bounding_box(piece: &ActivePiece) -> BoundingBox {
    let mut bb = BoundingBox {
        left: i32::MAX,
        right: i32::MIN,
        top: i32::MAX,
        bottom: i32::MIN,
    };
    for (col, row) in piece.cells() {
        bb.left = bb.left.min(col);
        bb.right = bb.right.max(col);
        bb.top = bb.top.min(row);
        bb.bottom = bb.bottom.max(row);
    }
    bb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{rotations, PieceDefinition};
    use crate::types::{Color, PieceKind};

    fn spawn(kind: PieceKind) -> ActivePiece {
        ActivePiece::spawn(
            1,
            &PieceDefinition {
                kind,
                color: Color(0),
                rotations: rotations(kind),
            },
        )
    }

    #[test]
    fn test_i_horizontal_box() {
        let bb = bounding_box(&spawn(PieceKind::I));
        assert_eq!(
            bb,
            BoundingBox {
                left: 3,
                right: 6,
                top: 0,
                bottom: 0
            }
        );
    }

    #[test]
    fn test_i_vertical_box() {
        let bb = bounding_box(&spawn(PieceKind::I).rotated());
        assert_eq!((bb.left, bb.right), (5, 5));
        assert_eq!((bb.top, bb.bottom), (-1, 2));
    }

    #[test]
    fn test_box_follows_anchor() {
        let piece = spawn(PieceKind::O).shifted(-4, 10);
        let bb = bounding_box(&piece);
        assert_eq!((bb.left, bb.right, bb.top, bb.bottom), (0, 1, 9, 10));
    }
}
