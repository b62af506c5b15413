//! Core types shared across the application.
//! This crate contains pure data types with no external dependencies.

/// Board dimensions
pub const GRID_WIDTH: u8 = 10;
pub const GRID_HEIGHT: u8 = 10;

/// Total number of cells on the board
pub const GRID_CELLS: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Presentation frame tick (milliseconds)
pub const TICK_MS: u32 = 16;

/// Points awarded per distinct cleared cell
pub const POINTS_PER_CELL: u32 = 10;

/// Duration of the line-clear flash, in presentation frames
pub const FLASH_FRAMES: u8 = 8;

/// Number of entries in the shape catalog
pub const SHAPE_COUNT: usize = 23;

/// Offset of a single block relative to a shape's anchor cell
pub type CellOffset = (i8, i8);

/// Absolute board coordinate (x, y)
pub type Coord = (i8, i8);

/// Index into the shape catalog.
///
/// Construction is checked against [`SHAPE_COUNT`], so holding a `ShapeId`
/// guarantees the catalog lookup is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShapeId(u8);

impl ShapeId {
    /// Create a `ShapeId` from a catalog index.
    /// Returns `None` if the index is out of range.
    pub fn new(index: usize) -> Option<Self> {
        (index < SHAPE_COUNT).then_some(Self(index as u8))
    }

    /// The catalog index this id refers to.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Intents the engine accepts from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Attempt to place the current shape with its anchor at (x, y).
    Place { x: i8, y: i8 },
    /// Reset the game; only honored from the game-over state.
    Restart,
}

/// Cursor-level actions produced by the input layer.
///
/// Cursor movement is presentation state. Only [`GameIntent`] values ever
/// reach the engine; the main loop translates `Place` at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    Place,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_id_bounds() {
        assert!(ShapeId::new(0).is_some());
        assert!(ShapeId::new(SHAPE_COUNT - 1).is_some());
        assert!(ShapeId::new(SHAPE_COUNT).is_none());
        assert!(ShapeId::new(usize::MAX).is_none());
    }

    #[test]
    fn test_shape_id_roundtrip() {
        for i in 0..SHAPE_COUNT {
            assert_eq!(ShapeId::new(i).unwrap().index(), i);
        }
    }

    #[test]
    fn test_grid_constants() {
        assert_eq!(GRID_CELLS, 100);
        assert_eq!(GRID_WIDTH, GRID_HEIGHT);
    }
}
