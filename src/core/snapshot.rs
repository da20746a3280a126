//! Immutable state snapshots for renderers
//!
//! The renderer reads one of these per frame and never touches `GameState`
//! directly; everything here is an owned copy.

use crate::core::game_state::{ActivePiece, GameState};
use crate::core::matrix::Matrix;
use crate::types::{GameStatus, Rotation, TetrominoKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: TetrominoKind,
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
    pub estimated_drop_y: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            rotation: value.rotation,
            estimated_drop_y: value.estimated_drop_y,
        }
    }
}

/// Everything the output boundary exposes: status, board grid, active piece,
/// held kind, upcoming queue, and the rows of a pending clear (if any)
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub board: Matrix,
    pub active: Option<ActiveSnapshot>,
    pub held: Option<TetrominoKind>,
    pub upcoming: Vec<TetrominoKind>,
    pub cleared_lines: Option<Vec<usize>>,
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status(),
            board: self.board().clone(),
            active: self.active().map(ActiveSnapshot::from),
            held: self.held_piece(),
            upcoming: self.upcoming().iter().copied().collect(),
            cleared_lines: self
                .pending_clear()
                .map(|pending| pending.lines.iter().copied().collect()),
        }
    }
}
