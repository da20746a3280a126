//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, timers, or I/O.

pub mod game_state;
pub mod matrix;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use game_state::{ActivePiece, GameState, PendingClear};
pub use matrix::Matrix;
pub use placement::{can_place, drop_y, PiecePosition};
pub use rng::{PieceSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
