//! Placement validator - the single source of truth for legality
//!
//! Every attempted move, rotation, spawn, or drop goes through `can_place`
//! before it is applied; no other component decides collision on its own.

use crate::core::matrix::Matrix;
use crate::core::pieces::base_matrix;
use crate::types::{Rotation, TetrominoKind};

/// Board-space position of a piece's rotated bounding box, plus its rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiecePosition {
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
}

impl PiecePosition {
    pub fn new(x: i32, y: i32, rotation: Rotation) -> Self {
        Self { x, y, rotation }
    }
}

/// Decide whether a piece may occupy `pos` on `board`
///
/// The rotated bounding box is checked against the board extents first (a
/// fast pre-check that rejects independent of cell content), then every
/// occupied cell of the rotated shape is checked against the board.
pub fn can_place(kind: TetrominoKind, pos: PiecePosition, board: &Matrix) -> bool {
    let shape = base_matrix(kind).rotate_cw(pos.rotation);

    if pos.x < 0
        || pos.x + shape.width() as i32 > board.width() as i32
        || pos.y < 0
        || pos.y + shape.height() as i32 > board.height() as i32
    {
        return false;
    }

    for (i, cell) in shape.cells().iter().enumerate() {
        if cell.is_none() {
            continue;
        }

        let board_x = pos.x + (i % shape.width()) as i32;
        let board_y = pos.y + (i / shape.width()) as i32;

        if !board.is_free(board_x, board_y) {
            return false;
        }
    }

    true
}

/// Lowest legal y for the piece's current x/rotation
///
/// Linear probe downward from the current position; assumes the current
/// position itself is legal (the state machine maintains that invariant).
pub fn drop_y(kind: TetrominoKind, pos: PiecePosition, board: &Matrix) -> i32 {
    let mut y = pos.y + 1;
    while can_place(kind, PiecePosition { y, ..pos }, board) {
        y += 1;
    }
    y - 1
}
