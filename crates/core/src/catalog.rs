//! Piece catalog - shapes, rotation states and colors
//!
//! Each rotation state is 4 offsets into a 4x4 box:
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! 12 13 14 15
//! ```
//!
//! Only visually distinct states are stored (O has 1, I/S/Z have 2, T/L/J have 4),
//! so rotation always advances modulo the piece's own state count.

use crate::error::{Error, Result};
use crate::rng::RandomSource;
use crate::types::{Color, PieceKind};

/// One rotation state: 4 offsets in `[0, 16)`
pub type RotationState = [u8; 4];

const I_ROTATIONS: &[RotationState] = &[[4, 5, 6, 7], [2, 6, 10, 14]];
const O_ROTATIONS: &[RotationState] = &[[1, 2, 5, 6]];
const T_ROTATIONS: &[RotationState] = &[[1, 4, 5, 6], [1, 5, 6, 9], [4, 5, 6, 9], [1, 4, 5, 9]];
const L_ROTATIONS: &[RotationState] = &[[1, 5, 9, 10], [6, 8, 9, 10], [0, 1, 5, 9], [4, 5, 6, 8]];
const J_ROTATIONS: &[RotationState] = &[[1, 5, 9, 8], [4, 5, 6, 10], [1, 2, 5, 9], [0, 4, 5, 6]];
const Z_ROTATIONS: &[RotationState] = &[[1, 2, 4, 5], [1, 5, 6, 10]];
const S_ROTATIONS: &[RotationState] = &[[0, 1, 5, 6], [2, 5, 6, 9]];

/// Stored rotation states for a kind
pub fn rotations(kind: PieceKind) -> &'static [RotationState] {
    match kind {
        PieceKind::I => I_ROTATIONS,
        PieceKind::O => O_ROTATIONS,
        PieceKind::T => T_ROTATIONS,
        PieceKind::L => L_ROTATIONS,
        PieceKind::J => J_ROTATIONS,
        PieceKind::Z => Z_ROTATIONS,
        PieceKind::S => S_ROTATIONS,
    }
}

/// Split a box offset into `(col, row)`
#[inline(always)]
pub fn offset_to_cell(offset: u8) -> (i32, i32) {
    ((offset % 4) as i32, (offset / 4) as i32)
}

/// Immutable description of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDefinition {
    pub kind: PieceKind,
    pub color: Color,
    pub rotations: &'static [RotationState],
}

/// All seven definitions, colored once per game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    definitions: [PieceDefinition; 7],
}

impl PieceCatalog {
    /// Build the catalog, drawing one color per kind from `rng`
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        let definitions = PieceKind::ALL.map(|kind| PieceDefinition {
            kind,
            color: random_color(rng),
            rotations: rotations(kind),
        });
        Self { definitions }
    }

    pub fn get(&self, kind: PieceKind) -> &PieceDefinition {
        &self.definitions[kind.index()]
    }

    /// Case-insensitive lookup by single-letter name
    pub fn by_name(&self, name: &str) -> Result<&PieceDefinition> {
        PieceKind::from_str(name)
            .map(|kind| self.get(kind))
            .ok_or_else(|| Error::PieceNotFound {
                name: name.to_string(),
            })
    }

    /// Uniformly chosen definition
    pub fn random_definition<R: RandomSource>(&self, rng: &mut R) -> &PieceDefinition {
        &self.definitions[rng.next_below(self.definitions.len() as u32) as usize]
    }

    pub fn definitions(&self) -> &[PieceDefinition] {
        &self.definitions
    }
}

fn random_color<R: RandomSource>(rng: &mut R) -> Color {
    Color(rng.next_below(0xff_ff_ff))
}
