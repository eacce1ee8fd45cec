//! Terminal renderer for the falling-block engine.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer of styled character
//! cells, then flushes only the changed runs to the terminal. Nothing here
//! mutates game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
