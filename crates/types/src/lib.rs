//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, event logging).
//!
//! # Grid Dimensions
//!
//! - **Columns**: 10 (indexed 0-9)
//! - **Rows**: 24 (indexed 0-23, row 0 is the top)
//! - **Spawn anchor**: (3, -1), one row above the visible grid
//!
//! # Gravity
//!
//! Gravity is expressed in frames at a fixed refresh rate:
//!
//! | Level | Frames per row |
//! |-------|----------------|
//! | 0-9 | 48, 43, 38, 33, 28, 23, 18, 13, 8, 6 |
//! | 10-12 | 5 |
//! | 13-15 | 4 |
//! | 16-18 | 3 |
//! | 19-28 | 2 |
//! | 29+ | 1 |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Command, PieceKind, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! // Parse a command
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//!
//! assert_eq!(DEFAULT_COLUMNS, 10);
//! assert_eq!(DEFAULT_ROWS, 24);
//! ```

use std::fmt;

/// Default grid width in cells
pub const DEFAULT_COLUMNS: usize = 10;

/// Default grid height in cells
pub const DEFAULT_ROWS: usize = 24;

/// Smallest accepted grid dimension (pieces live in a 4x4 box)
pub const MIN_GRID_DIM: usize = 4;

/// Largest grid dimension the runner accepts
pub const MAX_GRID_DIM: usize = 256;

/// Spawn anchor column
pub const SPAWN_X: i32 = 3;

/// Spawn anchor row (above the visible grid)
pub const SPAWN_Y: i32 = -1;

/// Number of pieces buffered ahead of the active one
pub const QUEUE_LEN: usize = 5;

/// Failed descents at which a piece is forced to settle
pub const BONK_LIMIT: u8 = 3;

/// Most rows a single lock can complete
pub const MAX_CLEARED_ROWS: usize = 4;

/// Display refresh rate the frame table is calibrated against (Hz)
pub const REFRESH_RATE_HZ: f64 = 60.0988;

/// Frames per gravity step for levels 0-9
pub const LEVEL_FRAMES: [u32; 10] = [48, 43, 38, 33, 28, 23, 18, 13, 8, 6];

/// Line clear scoring table
///
/// Base points for clearing N lines, multiplied by `max(level, 1)`:
/// - 1 line: 40
/// - 2 lines: 100
/// - 3 lines: 300
/// - 4 lines: 1200 (tetris)
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Lines needed per start level before the level starts climbing
pub const LINES_PER_LEVEL: u32 = 10;

/// Color every settled cell takes once the game is over
pub const GAME_OVER_COLOR: Color = Color(0x69_69_69);


/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "I" => Some(PieceKind::I),
            "O" => Some(PieceKind::O),
            "T" => Some(PieceKind::T),
            "L" => Some(PieceKind::L),
            "J" => Some(PieceKind::J),
            "Z" => Some(PieceKind::Z),
            "S" => Some(PieceKind::S),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::Z => 5,
            PieceKind::S => 6,
        }
    }
}

/// Abstract player commands
///
/// Collaborators translate device input (keys, scripted replays) into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance to the next stored rotation state
    RotateCw,
    /// Shift one column left
    MoveLeft,
    /// Shift one column right
    MoveRight,
    /// Shift one row down
    SoftDrop,
}

impl Command {
    /// Parse command from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("rotateCw"), Some(Command::RotateCw));
    /// assert_eq!(Command::from_str("SOFTDROP"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotatecw" => Some(Command::RotateCw),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::RotateCw => "rotateCw",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
        }
    }
}

/// 24-bit `0xRRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xff_ff_ff)
    }
}

/// Lifecycle phase of a game
///
/// `GameOver` is terminal: nothing moves a game out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

/// Piece ids count up from 1 and are never reused
pub type PieceId = u64;

/// A settled or falling block on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub color: Color,
    /// Id of the piece that painted this block
    pub piece_id: PieceId,
}

/// A cell on the grid: `None` is empty
pub type Cell = Option<Block>;
