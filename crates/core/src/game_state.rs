//! Game state module - the single engine state object
//!
//! This module ties together all core components: board, catalog, queue,
//! scoring and gravity. Every mutation goes through `&mut self`, so a gravity
//! tick and a command can never interleave. The falling piece is kept out of
//! the board between operations and composited only into snapshots; the board
//! holds settled blocks alone.
//!
//! Per-piece lifecycle driven by [`GameState::tick`]:
//!
//! - **Falling**: each tick moves the piece down one row while nothing is below.
//! - **Bonking**: a blocked descent bumps `bonk` and holds position. Moving out
//!   from over the obstacle resets it on the next tick.
//! - **Stopped**: after the third failed descent, or when resting on the floor,
//!   the piece stops. The following tick commits it to the board, clears lines,
//!   scores, and spawns the next piece.

use crate::board::Board;
use crate::catalog::{PieceCatalog, PieceDefinition};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::geometry::bounding_box;
use crate::gravity::GravityScheduler;
use crate::piece::ActivePiece;
use crate::rng::{PieceQueue, RandomSource, SimpleRng};
use crate::scoring::ScoreState;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextPreview};
use crate::types::*;

/// Emitted whenever a piece is committed to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub piece_id: PieceId,
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub tetris: bool,
    pub level_up: bool,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub game_over: bool,
}

/// What a single gravity tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No active piece (not started, or the game has ended)
    Idle,
    /// Moved down one row
    Fell,
    /// Descent blocked; position held with this bonk count
    Bonked(u8),
    /// Piece will be committed on the next tick
    Stopped,
    /// A piece that never entered the grid could not descend
    GameOver,
    /// Piece committed to the board
    Locked(LockEvent),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    catalog: PieceCatalog,
    queue: PieceQueue<R>,
    active: Option<ActivePiece>,
    /// Last id handed out; ids are never reused
    last_piece_id: PieceId,
    score: ScoreState,
    gravity: GravityScheduler,
    phase: GamePhase,
    started: bool,
    stats: [u32; 7],
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Default 24x10 game seeded with [`SimpleRng`]
    pub fn with_seed(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let catalog = PieceCatalog::new(&mut rng);
        let queue = PieceQueue::new(rng, &catalog);
        Self::assemble(Board::default(), catalog, queue, 0)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game; fails if the grid is smaller than 4x4
    pub fn new(config: EngineConfig, mut rng: R) -> Result<Self> {
        let board = Board::new(config.rows, config.columns)?;
        let catalog = PieceCatalog::new(&mut rng);
        let queue = PieceQueue::new(rng, &catalog);
        Ok(Self::assemble(board, catalog, queue, config.start_level))
    }

    fn assemble(board: Board, catalog: PieceCatalog, queue: PieceQueue<R>, start_level: u32) -> Self {
        Self {
            board,
            catalog,
            queue,
            active: None,
            last_piece_id: 0,
            score: ScoreState::new(start_level),
            gravity: GravityScheduler::new(),
            phase: GamePhase::Playing,
            started: false,
            stats: [0; 7],
            last_event: None,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn lines(&self) -> u32 {
        self.score.lines()
    }

    pub fn level(&self) -> u32 {
        self.score.level()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted setups
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    pub fn queue(&self) -> &PieceQueue<R> {
        &self.queue
    }

    pub fn stats(&self) -> &[u32; 7] {
        &self.stats
    }

    /// Interval the gravity timer was armed with at the last spawn
    pub fn gravity_interval_ms(&self) -> f64 {
        self.gravity.interval_ms()
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn the next piece from the queue
    pub fn spawn_piece(&mut self) {
        let kind = self.queue.draw(&self.catalog);
        let def = *self.catalog.get(kind);
        self.spawn_definition(def);
    }

    /// Replace the active piece with a specific definition
    ///
    /// Returns `Ok(false)` without spawning once the game is over.
    pub fn spawn_named(&mut self, name: &str) -> Result<bool> {
        let def = *self.catalog.by_name(name)?;
        if self.game_over() {
            return Ok(false);
        }
        self.started = true;
        self.spawn_definition(def);
        Ok(true)
    }

    fn spawn_definition(&mut self, def: PieceDefinition) {
        self.last_piece_id += 1;
        self.active = Some(ActivePiece::spawn(self.last_piece_id, &def));
        self.stats[def.kind.index()] += 1;
        // Level may have changed since the previous piece.
        self.gravity.arm(self.score.level());
    }

    /// Apply a player command; returns whether the piece changed
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.game_over() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        if !piece.accepts_input {
            return false;
        }

        let next = match command {
            Command::RotateCw => self.rotated(&piece),
            Command::MoveLeft => self.moved(&piece, -1),
            Command::MoveRight => self.moved(&piece, 1),
            Command::SoftDrop => self.dropped(&piece),
        };

        match next {
            Some(next) => {
                self.active = Some(next);
                true
            }
            None => false,
        }
    }

    /// Validate a rotation, clamping it back inside the side walls
    fn rotated(&self, piece: &ActivePiece) -> Option<ActivePiece> {
        let columns = self.board.columns() as i32;
        let mut candidate = piece.rotated();

        let bb = bounding_box(&candidate);
        if bb.left < 0 {
            candidate = candidate.shifted(-bb.left, 0);
        } else if bb.right >= columns {
            candidate = candidate.shifted(columns - 1 - bb.right, 0);
        }

        let bb = bounding_box(&candidate);
        if bb.bottom >= self.board.rows() as i32 || self.board.would_collide(&candidate, 0, 0) {
            return None;
        }
        Some(candidate)
    }

    fn moved(&self, piece: &ActivePiece, dx: i32) -> Option<ActivePiece> {
        let bb = bounding_box(piece);
        let at_wall = if dx < 0 {
            bb.left <= 0
        } else {
            bb.right >= self.board.columns() as i32 - 1
        };
        if at_wall || self.board.would_collide(piece, 0, dx) {
            return None;
        }
        Some(piece.shifted(dx, 0))
    }

    fn dropped(&self, piece: &ActivePiece) -> Option<ActivePiece> {
        let bb = bounding_box(piece);
        if bb.bottom + 1 >= self.board.rows() as i32 || self.board.would_collide(piece, 1, 0) {
            return None;
        }
        Some(piece.shifted(0, 1))
    }

    /// Run one gravity step
    pub fn tick(&mut self) -> TickOutcome {
        let Some(mut piece) = self.active else {
            return TickOutcome::Idle;
        };

        let rows = self.board.rows() as i32;
        let bb = bounding_box(&piece);

        if bb.bottom >= rows || piece.stopped {
            return match self.lock_piece() {
                Some(event) => TickOutcome::Locked(event),
                None => TickOutcome::Idle,
            };
        }

        if self.board.would_collide(&piece, 1, 0) {
            if piece.y < 0 {
                // Blocked before ever entering the grid.
                self.phase = GamePhase::GameOver;
                piece.stopped = true;
                piece.accepts_input = false;
                self.active = Some(piece);
                return TickOutcome::GameOver;
            }
            piece.bonk += 1;
        } else {
            piece.bonk = 0;
        }

        let outcome = if piece.bonk < BONK_LIMIT && bb.bottom < rows - 1 {
            if piece.bonk == 0 {
                piece.y += 1;
                TickOutcome::Fell
            } else {
                TickOutcome::Bonked(piece.bonk)
            }
        } else {
            piece.stopped = true;
            if piece.bonk >= BONK_LIMIT {
                piece.accepts_input = false;
            }
            TickOutcome::Stopped
        };

        self.active = Some(piece);
        outcome
    }

    /// Feed elapsed wall time to the gravity scheduler and run due ticks
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.gravity.accumulate(elapsed_ms);
        let mut ticks = 0;
        while self.gravity.take_tick() {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// Commit the active piece, clear lines, score, and spawn the next piece
    fn lock_piece(&mut self) -> Option<LockEvent> {
        let piece = self.active.take()?;

        self.board.write_cells(&piece, Some(piece.block()));
        self.gravity.disarm();

        let cleared = self.board.clear_full_rows();
        let result = self.score.apply_clear(cleared.len());

        let event = LockEvent {
            piece_id: piece.id,
            kind: piece.kind,
            lines_cleared: cleared.len() as u32,
            points: result.points,
            tetris: result.tetris,
            level_up: result.level_up,
            score: self.score.score(),
            lines: self.score.lines(),
            level: self.score.level(),
            game_over: self.game_over(),
        };
        self.last_event = Some(event);

        if self.game_over() {
            self.board.recolor(GAME_OVER_COLOR);
        } else {
            self.spawn_piece();
        }

        Some(event)
    }

    /// Next-piece preview: front of the queue in its spawn rotation
    pub fn next_preview(&self) -> NextPreview {
        let def = self.catalog.get(self.queue.peek());
        NextPreview {
            kind: def.kind,
            color: def.color,
            offsets: def.rotations[0],
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut board = self.board.clone();
        if let Some(piece) = self.active {
            board.write_cells(&piece, Some(piece.block()));
        }

        let mut queue = [PieceKind::I; QUEUE_LEN];
        queue.copy_from_slice(self.queue.pending());

        GameSnapshot {
            rows: board.rows(),
            columns: board.columns(),
            cells: board.cells().iter().map(|c| c.map(|b| b.color)).collect(),
            active: self.active.map(|p| ActiveSnapshot {
                id: p.id,
                kind: p.kind,
                rotation: p.rotation,
                x: p.x,
                y: p.y,
                bonk: p.bonk,
                stopped: p.stopped,
            }),
            next: self.next_preview(),
            queue,
            phase: self.phase,
            score: self.score.score(),
            lines: self.score.lines(),
            level: self.score.level(),
            stats: self.stats,
        }
    }
}
