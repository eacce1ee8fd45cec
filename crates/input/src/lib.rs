//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into abstract [`crate::types::Command`]s. The
//! engine never sees key codes.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
