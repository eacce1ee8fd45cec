//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block state machine. It has no
//! dependencies on terminals, timers, or I/O:
//!
//! - **Deterministic**: same seed, same pieces, same colors
//! - **Testable**: gravity is stepped explicitly, no wall-clock waits
//! - **Portable**: any collaborator can render a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven piece definitions and their rotation states
//! - [`rng`]: injectable randomness and the 5-piece lookahead queue
//! - [`board`]: grid storage, collision detection and line clearing
//! - [`geometry`]: bounding-box extremes of a piece
//! - [`piece`]: the falling piece
//! - [`game_state`]: commands, gravity ticks, locking and spawning
//! - [`scoring`]: classic line-clear points and level progression
//! - [`gravity`]: level to interval mapping and the elapsed-time scheduler
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameState, TickOutcome};
//! use tui_blockfall_types::Command;
//!
//! let mut game = GameState::with_seed(12345);
//! assert!(game.spawn_named("O").unwrap());
//!
//! // Commands and gravity ticks are plain method calls.
//! assert!(game.apply_command(Command::MoveLeft));
//! assert_eq!(game.tick(), TickOutcome::Fell);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Feed elapsed milliseconds to [`GameState::advance`]; it runs every gravity
//! tick that has come due at the interval armed when the current piece spawned.

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod game_state;
pub mod geometry;
pub mod gravity;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{PieceCatalog, PieceDefinition, RotationState};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use game_state::{GameState, LockEvent, TickOutcome};
pub use geometry::{bounding_box, BoundingBox};
pub use gravity::GravityScheduler;
pub use piece::ActivePiece;
pub use rng::{PieceQueue, RandomSource, SimpleRng};
pub use scoring::{calculate_line_score, ScoreResult, ScoreState};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextPreview};
