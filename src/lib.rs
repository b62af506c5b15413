//! Terminal block-grid puzzle (workspace facade crate).
//!
//! This package keeps the `tui_blocks::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_blocks_core as core;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;
