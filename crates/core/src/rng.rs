//! RNG module - injectable randomness and the lookahead piece queue
//!
//! Pieces are drawn uniformly through [`PieceCatalog::random_definition`] (no
//! bag). The queue keeps a fixed lookahead of [`QUEUE_LEN`] pieces: every draw
//! pops the front and appends one freshly randomized kind at the back.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use arrayvec::ArrayVec;

use crate::catalog::PieceCatalog;
use crate::types::{PieceKind, QUEUE_LEN};

/// Source of randomness for piece selection and colors
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Value in `[0, max)`; `max` must be non-zero
    fn next_below(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state, usable as a seed to replay from here
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly.
        self.state >> 8
    }
}

/// FIFO of upcoming pieces with a fixed lookahead
#[derive(Debug, Clone)]
pub struct PieceQueue<R> {
    pending: ArrayVec<PieceKind, QUEUE_LEN>,
    rng: R,
}

impl<R: RandomSource> PieceQueue<R> {
    /// Create a queue pre-filled with [`QUEUE_LEN`] picks from `catalog`
    pub fn new(mut rng: R, catalog: &PieceCatalog) -> Self {
        let mut pending = ArrayVec::new();
        while !pending.is_full() {
            pending.push(catalog.random_definition(&mut rng).kind);
        }
        Self { pending, rng }
    }

    /// Piece that the next [`PieceQueue::draw`] returns
    pub fn peek(&self) -> PieceKind {
        self.pending[0]
    }

    /// Take the front piece and append a fresh pick from `catalog`
    pub fn draw(&mut self, catalog: &PieceCatalog) -> PieceKind {
        let front = self.pending.remove(0);
        self.pending
            .push(catalog.random_definition(&mut self.rng).kind);
        front
    }

    pub fn pending(&self) -> &[PieceKind] {
        &self.pending
    }
}
