//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::UiAction`]. Placement
//! is driven by a keyboard cursor: movement keys steer the anchor, a
//! confirm key fires the placement intent. Cursor position itself is owned
//! by the main loop, not by the engine.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, should_quit};
