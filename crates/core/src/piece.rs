//! The active (falling) piece

use crate::catalog::{offset_to_cell, PieceDefinition, RotationState};
use crate::types::{Block, Color, PieceId, PieceKind, SPAWN_X, SPAWN_Y};

/// Falling piece state
///
/// `x`/`y` anchor the top-left corner of the 4x4 box. `y` starts above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub rotations: &'static [RotationState],
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
    /// Consecutive failed descents
    pub bonk: u8,
    /// Set once the piece will settle on the next gravity tick
    pub stopped: bool,
    /// Cleared when the piece stops taking commands
    pub accepts_input: bool,
}

impl ActivePiece {
    /// Create a piece at the spawn anchor
    pub fn spawn(id: PieceId, def: &PieceDefinition) -> Self {
        Self {
            id,
            kind: def.kind,
            color: def.color,
            rotations: def.rotations,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
            bonk: 0,
            stopped: false,
            accepts_input: true,
        }
    }

    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    pub fn offsets(&self) -> &'static RotationState {
        &self.rotations[self.rotation]
    }

    /// Grid `(col, row)` of each of the 4 cells
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.offsets().map(|offset| {
            let (col, row) = offset_to_cell(offset);
            (self.x + col, self.y + row)
        })
    }

    /// Copy advanced to the next rotation state, anchor unchanged
    pub fn rotated(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % self.rotation_count(),
            ..*self
        }
    }

    /// Copy moved by `dx` columns and `dy` rows
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Block value this piece paints
    pub fn block(&self) -> Block {
        Block {
            color: self.color,
            piece_id: self.id,
        }
    }
}
