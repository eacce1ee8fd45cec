//! Gravity timing - level to tick interval, and an elapsed-time scheduler
//!
//! The scheduler replaces a wall-clock timer: callers feed it elapsed
//! milliseconds and pull due ticks one at a time, so a lock in the middle of a
//! long frame disarms it before any further tick fires.

use crate::types::{LEVEL_FRAMES, REFRESH_RATE_HZ};

/// Frames per gravity step at `level`
pub fn frames_for_level(level: u32) -> u32 {
    match level {
        0..=9 => LEVEL_FRAMES[level as usize],
        10..=12 => 5,
        13..=15 => 4,
        16..=18 => 3,
        19..=28 => 2,
        _ => 1,
    }
}

/// Gravity interval at `level` in milliseconds
pub fn interval_ms(level: u32) -> f64 {
    (1000.0 / REFRESH_RATE_HZ) * frames_for_level(level) as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityScheduler {
    interval_ms: f64,
    pending_ms: f64,
    armed: bool,
}

impl GravityScheduler {
    /// A disarmed scheduler
    pub fn new() -> Self {
        Self {
            interval_ms: interval_ms(0),
            pending_ms: 0.0,
            armed: false,
        }
    }

    /// Start timing at the interval for `level`, discarding pending time
    pub fn arm(&mut self, level: u32) {
        self.interval_ms = interval_ms(level);
        self.pending_ms = 0.0;
        self.armed = true;
    }

    /// Stop timing; pending time is dropped
    pub fn disarm(&mut self) {
        self.armed = false;
        self.pending_ms = 0.0;
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Add elapsed time. Ignored while disarmed.
    pub fn accumulate(&mut self, elapsed_ms: u32) {
        if self.armed {
            self.pending_ms += elapsed_ms as f64;
        }
    }

    /// Consume one due tick, if any
    pub fn take_tick(&mut self) -> bool {
        if self.armed && self.pending_ms >= self.interval_ms {
            self.pending_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }
}

impl Default for GravityScheduler {
    fn default() -> Self {
        Self::new()
    }
}
