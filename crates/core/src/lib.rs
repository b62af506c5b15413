//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the
//! block-grid puzzle. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Zero-allocation hot paths for placement and clearing
//!
//! # Module Structure
//!
//! - [`board`]: 10x10 placement grid with fit checks and line clearing
//! - [`game_state`]: Complete game state: current shape, score, lifecycle
//! - [`shapes`]: The static catalog of 23 polyomino shapes
//! - [`rng`]: Seedable uniform shape selection
//! - [`scoring`]: Points per cleared cell
//! - [`snapshot`]: Copyable state snapshot for the presentation poll
//!
//! # Game Rules
//!
//! - Shapes are placed by anchor anywhere they fit; there is no gravity,
//!   no rotation, and no piece preview
//! - A full row or full column clears; fullness is judged before anything
//!   is removed, so a row and a column can clear simultaneously
//! - Each clear awards 10 points per distinct vacated cell (a row/column
//!   intersection counts once)
//! - The game ends when the freshly drawn shape fits nowhere; restart is
//!   only honored from that state
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::types::GameIntent;
//! use tui_blocks_core::GameState;
//!
//! let mut game = GameState::new(12345);
//! assert!(game.apply_intent(GameIntent::Place { x: 0, y: 0 }));
//!
//! // The first placement cannot complete a line.
//! assert_eq!(game.score(), 0);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedCells};
pub use game_state::GameState;
pub use rng::{ShapeDealer, SimpleRng};
pub use scoring::clear_score;
pub use snapshot::GameSnapshot;
