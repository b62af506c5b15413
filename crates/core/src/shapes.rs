//! Shape catalog - the fixed set of placeable polyominoes.
//!
//! Each shape is an offset list relative to its anchor cell (the cell the
//! cursor points at). Offsets are normalized: min dx and min dy are both 0.
//! The catalog is static configuration data; shapes have no rotation state.

use crate::types::{CellOffset, ShapeId, SHAPE_COUNT};

/// All placeable shapes.
static CATALOG: [&[CellOffset]; SHAPE_COUNT] = [
    // Horizontal lines, 2 through 5
    &[(0, 0), (1, 0)],
    &[(0, 0), (1, 0), (2, 0)],
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
    // Vertical lines, 2 through 5
    &[(0, 0), (0, 1)],
    &[(0, 0), (0, 1), (0, 2)],
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    // 2x2 square
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    // Small corner triominoes, four orientations
    &[(0, 0), (1, 0), (1, 1)],
    &[(0, 0), (0, 1), (1, 1)],
    &[(0, 1), (1, 1), (1, 0)],
    &[(0, 0), (0, 1), (1, 0)],
    // T pointing up, T pointing right
    &[(1, 0), (0, 1), (1, 1), (2, 1)],
    &[(0, 0), (0, 1), (0, 2), (1, 1)],
    // Large L
    &[(0, 0), (1, 0), (0, 1), (0, 2)],
    // S / Z pair
    &[(1, 0), (2, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
    // Plus
    &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
    // Corner zigzag
    &[(0, 0), (0, 1), (1, 1), (1, 2)],
    // 2x3, 3x3, 3x2 rectangles
    &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)],
    &[
        (0, 0),
        (1, 0),
        (2, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (0, 2),
        (1, 2),
        (2, 2),
    ],
    &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)],
];

/// Get the offset list for a shape
pub fn offsets(id: ShapeId) -> &'static [CellOffset] {
    CATALOG[id.index()]
}

/// Iterate every shape in the catalog
pub fn all_ids() -> impl Iterator<Item = ShapeId> {
    (0..SHAPE_COUNT).filter_map(ShapeId::new)
}
