//! Scoring module - classic line-clear points and level progression
//!
//! Points are `LINE_SCORES[lines] * max(level, 1)` using the level in effect
//! before the clear. The level check also reads the pre-clear line total: once it
//! exceeds `start_level * 10 + 10`, every clear event bumps the level by one.

use crate::types::{LINES_PER_LEVEL, LINE_SCORES, MAX_CLEARED_ROWS};

/// Points for clearing `lines` rows at `level`
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > MAX_CLEARED_ROWS {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level.max(1))
}

/// Outcome of one clear event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub points: u32,
    pub level_up: bool,
    pub tetris: bool,
}

/// Running score, line and level totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreState {
    start_level: u32,
    score: u32,
    lines: u32,
    level: u32,
}

impl ScoreState {
    pub fn new(start_level: u32) -> Self {
        Self {
            start_level,
            score: 0,
            lines: 0,
            level: start_level,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Line total that must be exceeded before the level climbs
    pub fn level_threshold(&self) -> u32 {
        self.start_level * LINES_PER_LEVEL + LINES_PER_LEVEL
    }

    /// Record a clear of `cleared` rows. Zero rows is a no-op.
    pub fn apply_clear(&mut self, cleared: usize) -> ScoreResult {
        if cleared == 0 {
            return ScoreResult::default();
        }

        let lines_before = self.lines;
        let points = calculate_line_score(cleared, self.level);

        self.lines = self.lines.saturating_add(cleared as u32);
        self.score = self.score.saturating_add(points);

        let level_up = lines_before > self.level_threshold();
        if level_up {
            self.level += 1;
        }

        ScoreResult {
            points,
            level_up,
            tetris: cleared == MAX_CLEARED_ROWS,
        }
    }
}
