use crate::catalog::RotationState;
use crate::types::{Color, GamePhase, PieceId, PieceKind, QUEUE_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub id: PieceId,
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
    pub bonk: u8,
    pub stopped: bool,
}

/// What a next-piece preview needs: the kind, its color and its spawn rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextPreview {
    pub kind: PieceKind,
    pub color: Color,
    pub offsets: RotationState,
}

/// Read-only view of a game for renderers and loggers
///
/// `cells` is row-major and already includes the falling piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<Option<Color>>,
    pub active: Option<ActiveSnapshot>,
    pub next: NextPreview,
    pub queue: [PieceKind; QUEUE_LEN],
    pub phase: GamePhase,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    /// Spawn counts indexed by [`PieceKind::index`]
    pub stats: [u32; 7],
}

impl GameSnapshot {
    pub fn get(&self, col: usize, row: usize) -> Option<Color> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[row * self.columns + col]
    }

    pub fn row(&self, row: usize) -> &[Option<Color>] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
