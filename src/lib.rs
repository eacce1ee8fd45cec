//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `tui_blockfall::{core,input,term,types}`
//! and holds the binary's configuration and event-log plumbing.

pub mod config;
pub mod event_log;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
