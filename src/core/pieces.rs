//! Piece catalog - the seven tetromino shapes and their colors
//!
//! Each shape is encoded as its spawn-orientation matrix, trimmed to the
//! minimal bounding box (the I piece spawns vertical as a 1x4 column).
//! Rotated orientations are derived from the spawn matrix via
//! `Matrix::rotate_cw`, never stored.

use crate::core::matrix::Matrix;
use crate::types::{Cell, CellColor, TetrominoKind, PREVIEW_HEIGHT, PREVIEW_WIDTH};

/// Canonical display color for a piece kind
pub fn color(kind: TetrominoKind) -> CellColor {
    match kind {
        TetrominoKind::I => CellColor::Cyan,
        TetrominoKind::J => CellColor::Blue,
        TetrominoKind::L => CellColor::Orange,
        TetrominoKind::O => CellColor::Yellow,
        TetrominoKind::S => CellColor::Green,
        TetrominoKind::T => CellColor::Purple,
        TetrominoKind::Z => CellColor::Red,
    }
}

/// Spawn-orientation matrix for a piece kind
pub fn base_matrix(kind: TetrominoKind) -> Matrix {
    let c: Cell = Some(color(kind));
    let e: Cell = None;

    match kind {
        TetrominoKind::I => Matrix::from_cells(1, 4, vec![c, c, c, c]),
        TetrominoKind::J => Matrix::from_cells(2, 3, vec![e, c, e, c, c, c]),
        TetrominoKind::L => Matrix::from_cells(2, 3, vec![c, e, c, e, c, c]),
        TetrominoKind::O => Matrix::from_cells(2, 2, vec![c, c, c, c]),
        TetrominoKind::S => Matrix::from_cells(3, 2, vec![e, c, c, c, c, e]),
        TetrominoKind::T => Matrix::from_cells(3, 2, vec![c, c, c, e, c, e]),
        TetrominoKind::Z => Matrix::from_cells(3, 2, vec![c, c, e, e, c, c]),
    }
}

/// Fixed-size 3x4 display matrix for the hold/next panels
///
/// The spawn shape is anchored at the origin; no kind yields an empty panel.
pub fn preview_matrix(kind: Option<TetrominoKind>) -> Matrix {
    let empty = Matrix::new(PREVIEW_WIDTH, PREVIEW_HEIGHT);
    match kind {
        Some(kind) => empty.overlay(&base_matrix(kind), 0, 0),
        None => empty,
    }
}
