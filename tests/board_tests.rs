//! Board tests - placement validity and line clearing through the public API

use std::collections::HashSet;

use tui_blocks::core::{clear_score, shapes, Board};
use tui_blocks::types::{CellOffset, ShapeId, GRID_HEIGHT, GRID_WIDTH};

/// Reference model for `can_place`: every offset-translated cell must be
/// inside the grid and empty.
fn model_can_place(board: &Board, shape: &[CellOffset], x: i8, y: i8) -> bool {
    shape.iter().all(|&(dx, dy)| {
        let cx = x as i16 + dx as i16;
        let cy = y as i16 + dy as i16;
        cx >= 0
            && cx < GRID_WIDTH as i16
            && cy >= 0
            && cy < GRID_HEIGHT as i16
            && !board.is_filled(cx as i8, cy as i8)
    })
}

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..GRID_WIDTH as i8 {
        board.set(x, y, true);
    }
}

fn fill_col(board: &mut Board, x: i8) {
    for y in 0..GRID_HEIGHT as i8 {
        board.set(x, y, true);
    }
}

fn fill_board(board: &mut Board) {
    for y in 0..GRID_HEIGHT as i8 {
        fill_row(board, y);
    }
}

#[test]
fn test_can_place_matches_model_exhaustively() {
    // Scatter some occupancy so both rejection reasons are exercised.
    let mut board = Board::new();
    board.set(0, 0, true);
    board.set(4, 4, true);
    board.set(5, 4, true);
    board.set(9, 9, true);
    board.set(2, 7, true);

    for id in shapes::all_ids() {
        let shape = shapes::offsets(id);
        for y in -6..(GRID_HEIGHT as i8 + 6) {
            for x in -6..(GRID_WIDTH as i8 + 6) {
                assert_eq!(
                    board.can_place(shape, x, y),
                    model_can_place(&board, shape, x, y),
                    "shape {:?} at ({}, {})",
                    id,
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn test_place_then_can_place_is_false() {
    for id in shapes::all_ids() {
        let mut board = Board::new();
        let shape = shapes::offsets(id);

        assert!(board.can_place(shape, 2, 3));
        board.place(shape, 2, 3);
        assert!(!board.can_place(shape, 2, 3), "shape {:?} double-place", id);
    }
}

#[test]
fn test_clear_single_full_row() {
    let mut board = Board::new();
    fill_row(&mut board, 6);

    let cleared = board.clear_full_lines();
    assert_eq!(cleared.len(), GRID_WIDTH as usize);
    assert!(cleared.iter().all(|&(_, y)| y == 6));
    assert_eq!(clear_score(cleared.len()), 100);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_intersecting_row_and_column() {
    let mut board = Board::new();
    fill_row(&mut board, 2);
    fill_col(&mut board, 7);

    let cleared = board.clear_full_lines();

    // 10 + 10 - 1: the crossing cell (7, 2) is reported once.
    assert_eq!(
        cleared.len(),
        GRID_WIDTH as usize + GRID_HEIGHT as usize - 1
    );
    let distinct: HashSet<_> = cleared.iter().copied().collect();
    assert_eq!(distinct.len(), cleared.len());
    assert!(distinct.contains(&(7, 2)));
    assert_eq!(clear_score(cleared.len()), 190);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_fully_filled_board() {
    let mut board = Board::new();
    fill_board(&mut board);

    let cleared = board.clear_full_lines();

    // Every cell sits on a full row and a full column; the distinct set is
    // still exactly the 100 board cells.
    assert_eq!(cleared.len(), 100);
    let distinct: HashSet<_> = cleared.iter().copied().collect();
    assert_eq!(distinct.len(), 100);
    assert_eq!(clear_score(cleared.len()), 1000);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_nothing_on_partial_lines() {
    // Row 0 misses its last cell; column 5 misses its bottom cell.
    let mut board = Board::new();
    for x in 0..GRID_WIDTH as i8 - 1 {
        board.set(x, 0, true);
    }
    for y in 1..GRID_HEIGHT as i8 - 1 {
        board.set(5, y, true);
    }

    let cleared = board.clear_full_lines();
    assert!(cleared.is_empty());
    assert_eq!(board.filled_count(), 17);
}

#[test]
fn test_column_fullness_judged_before_row_clears() {
    // A full row crossing an otherwise-full column: sequential clearing
    // would zero the crossing cell first and miss the column.
    let mut board = Board::new();
    fill_row(&mut board, 0);
    for y in 1..GRID_HEIGHT as i8 {
        board.set(3, y, true);
    }

    let cleared = board.clear_full_lines();
    assert_eq!(
        cleared.len(),
        GRID_WIDTH as usize + GRID_HEIGHT as usize - 1
    );
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_can_place_anywhere_on_empty_board() {
    let board = Board::new();
    for id in shapes::all_ids() {
        assert!(
            board.can_place_anywhere(shapes::offsets(id)),
            "shape {:?} should fit on an empty board",
            id
        );
    }
}

#[test]
fn test_can_place_anywhere_on_full_board() {
    let mut board = Board::new();
    fill_board(&mut board);
    for id in shapes::all_ids() {
        assert!(
            !board.can_place_anywhere(shapes::offsets(id)),
            "shape {:?} cannot fit on a full board",
            id
        );
    }
}

#[test]
fn test_can_place_anywhere_finds_last_remaining_slot() {
    // Only a single horizontal domino slot left, in the bottom-right corner.
    let mut board = Board::new();
    fill_board(&mut board);
    board.set(8, 9, false);
    board.set(9, 9, false);

    let domino = shapes::offsets(ShapeId::new(0).unwrap());
    assert!(board.can_place_anywhere(domino));
    assert!(board.can_place(domino, 8, 9));

    let square = shapes::offsets(ShapeId::new(8).unwrap());
    assert!(!board.can_place_anywhere(square));
}
