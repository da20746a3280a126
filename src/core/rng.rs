//! Piece selection seam
//!
//! Randomness is an injected dependency: the state machine pulls kinds from
//! a `PieceSource`, which is either a seeded uniform generator (gameplay) or
//! an explicit scripted sequence (tests). Both are deterministic values that
//! clone with the game state.

use std::collections::VecDeque;

use crate::types::TetrominoKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Supplier of the next tetromino kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceSource {
    /// Uniform choice over the seven kinds, driven by a seeded LCG
    Uniform(SimpleRng),
    /// Fixed sequence, cycled when exhausted (for deterministic tests)
    Scripted(VecDeque<TetrominoKind>),
}

impl PieceSource {
    /// Seeded uniform source
    pub fn seeded(seed: u32) -> Self {
        PieceSource::Uniform(SimpleRng::new(seed))
    }

    /// Explicit-sequence source; the sequence must be non-empty
    pub fn scripted(kinds: impl IntoIterator<Item = TetrominoKind>) -> Self {
        let queue: VecDeque<TetrominoKind> = kinds.into_iter().collect();
        assert!(!queue.is_empty(), "scripted piece source needs at least one kind");
        PieceSource::Scripted(queue)
    }

    /// Draw the next kind
    pub fn next_kind(&mut self) -> TetrominoKind {
        match self {
            PieceSource::Uniform(rng) => {
                let i = rng.next_range(TetrominoKind::ALL.len() as u32) as usize;
                TetrominoKind::ALL[i]
            }
            PieceSource::Scripted(queue) => {
                // Cycle so a short script can drive a long game
                let kind = queue.pop_front().unwrap();
                queue.push_back(kind);
                kind
            }
        }
    }
}
