//! Engine construction parameters

use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: usize,
    pub columns: usize,
    /// Level the game starts at; also raises the first level-up threshold
    pub start_level: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            start_level: 0,
        }
    }
}
