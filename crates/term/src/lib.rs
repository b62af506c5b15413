//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders the
//! board into a simple framebuffer that can be flushed to a terminal
//! backend, keeping `core` deterministic and the view unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
