//! Game state machine
//!
//! Owns the board, the active/held pieces, the upcoming queue, and the
//! lifecycle status, and advances them through a single deterministic
//! transition function: `step(action, now_ms)` consumes one discrete action
//! and returns the next state. Time never comes from a clock read; callers
//! pass `now_ms` so the suspended-state delay is testable.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::core::matrix::Matrix;
use crate::core::pieces::base_matrix;
use crate::core::placement::{can_place, drop_y, PiecePosition};
use crate::core::rng::PieceSource;
use crate::types::{
    GameAction, GameConfig, GameStatus, Rotation, TetrominoKind, BOARD_HEIGHT, BOARD_WIDTH,
    SPAWN_X, SPAWN_Y, UPCOMING_QUEUE_LEN,
};

/// The falling piece, plus its cached landing row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: TetrominoKind,
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
    /// Lowest legal y for the current x/rotation; recomputed after every
    /// state-affecting transition, used only for the ghost preview
    pub estimated_drop_y: i32,
}

impl ActivePiece {
    fn at_spawn(kind: TetrominoKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: Rotation::R0,
            estimated_drop_y: SPAWN_Y,
        }
    }

    pub fn position(&self) -> PiecePosition {
        PiecePosition::new(self.x, self.y, self.rotation)
    }
}

/// Rows detected as full, waiting out the visual delay before the clear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingClear {
    pub lines: ArrayVec<usize, BOARD_HEIGHT>,
    pub since_ms: u64,
}

/// Complete game state
///
/// At most one pending clear exists at a time, and the active piece is
/// absent exactly while a spawn or clear delay is pending or the game is
/// over.
#[derive(Debug, Clone)]
pub struct GameState {
    status: GameStatus,
    board: Matrix,
    active: Option<ActivePiece>,
    held: Option<TetrominoKind>,
    upcoming: VecDeque<TetrominoKind>,
    pending_clear: Option<PendingClear>,
    source: PieceSource,
    config: GameConfig,
}

impl GameState {
    /// Fresh session: empty board, an active piece at spawn, a replenished queue
    pub fn new(config: GameConfig, mut source: PieceSource) -> Self {
        let first = source.next_kind();
        let upcoming = (0..UPCOMING_QUEUE_LEN).map(|_| source.next_kind()).collect();

        let mut state = Self {
            status: GameStatus::Playing,
            board: Matrix::new(BOARD_WIDTH, BOARD_HEIGHT),
            active: Some(ActivePiece::at_spawn(first)),
            held: None,
            upcoming,
            pending_clear: None,
            source,
            config,
        };
        state.refresh_estimated_drop();
        state
    }

    /// Convenience constructor with default timing
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig::default(), PieceSource::seeded(seed))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Matrix {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn held_piece(&self) -> Option<TetrominoKind> {
        self.held
    }

    pub fn upcoming(&self) -> &VecDeque<TetrominoKind> {
        &self.upcoming
    }

    pub fn pending_clear(&self) -> Option<&PendingClear> {
        self.pending_clear.as_ref()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// The deterministic transition function: one action in, next state out
    ///
    /// `now_ms` is the driver's monotonic clock; it is only compared against
    /// the pending-clear timestamp, never stored beyond that.
    pub fn step(&self, action: GameAction, now_ms: u64) -> GameState {
        let mut next = self.clone();
        next.apply(action, now_ms);
        next
    }

    fn apply(&mut self, action: GameAction, now_ms: u64) {
        // Pause toggling bypasses everything else, including the
        // suspended-delay check; it is a no-op in Suspended/GameOver.
        if action == GameAction::PauseResume {
            self.status = match self.status {
                GameStatus::Playing => GameStatus::Paused,
                GameStatus::Paused => GameStatus::Playing,
                other => other,
            };
            return;
        }

        // Commit an elapsed line clear before considering the action.
        if self.status == GameStatus::Suspended {
            let elapsed = self
                .pending_clear
                .as_ref()
                .map(|pending| now_ms.saturating_sub(pending.since_ms));
            if matches!(elapsed, Some(ms) if ms > self.config.line_clear_delay_ms) {
                self.commit_clear();
            }
        }

        // Actions are dropped unless the game is (now) playing. Inputs come
        // from loosely-synchronized external drivers, so this is a silent
        // no-op rather than an error.
        if self.status != GameStatus::Playing {
            return;
        }
        if self.active.is_none() {
            return;
        }

        match action {
            GameAction::Tick => {}
            GameAction::SaveTetromino => self.save_tetromino(),
            GameAction::Drop => self.hard_drop(),
            GameAction::MoveDown
            | GameAction::MoveLeft
            | GameAction::MoveRight
            | GameAction::Rotate => self.try_shift(action),
            // Handled before the dispatch.
            GameAction::PauseResume => {}
        }

        if self.pending_clear.is_none() {
            self.scan_full_lines(now_ms);
        }

        if self.active.is_none() && self.pending_clear.is_none() {
            self.spawn();
        }

        self.refresh_estimated_drop();
    }

    /// Hold the active piece, or swap it with the already-held one
    ///
    /// A swap replaces the active piece's kind at the same position and
    /// rotation; it only succeeds if the swapped-in footprint is legal
    /// there. Rotation deliberately does not reset across the swap.
    fn save_tetromino(&mut self) {
        let Some(mut active) = self.active else {
            return;
        };

        match self.held {
            None => {
                self.held = Some(active.kind);
                self.active = None;
                self.spawn();
            }
            Some(held_kind) => {
                if can_place(held_kind, active.position(), &self.board) {
                    self.held = Some(active.kind);
                    active.kind = held_kind;
                    self.active = Some(active);
                }
            }
        }
    }

    /// Hard drop: shift to the lowest legal row, then lock
    fn hard_drop(&mut self) {
        let Some(mut active) = self.active else {
            return;
        };

        active.y = drop_y(active.kind, active.position(), &self.board);
        self.active = Some(active);
        self.lock_active();
    }

    /// Validator-gated single-step move or rotation
    ///
    /// A rejected MoveDown is a natural landing and locks the piece.
    /// Rejected lateral moves and rotations are silently ignored - no wall
    /// kicks are attempted.
    fn try_shift(&mut self, action: GameAction) {
        let Some(active) = self.active else {
            return;
        };

        let candidate = match action {
            GameAction::MoveLeft => PiecePosition::new(active.x - 1, active.y, active.rotation),
            GameAction::MoveRight => PiecePosition::new(active.x + 1, active.y, active.rotation),
            GameAction::MoveDown => PiecePosition::new(active.x, active.y + 1, active.rotation),
            GameAction::Rotate => PiecePosition::new(active.x, active.y, active.rotation.cw()),
            _ => return,
        };

        if can_place(active.kind, candidate, &self.board) {
            self.active = Some(ActivePiece {
                x: candidate.x,
                y: candidate.y,
                rotation: candidate.rotation,
                ..active
            });
        } else if action == GameAction::MoveDown {
            self.lock_active();
        }
    }

    /// Commit the active piece's cells into the board and clear the slot
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let shape = base_matrix(active.kind).rotate_cw(active.rotation);
        self.board = self.board.overlay(&shape, active.x, active.y);
    }

    /// Detect fully-occupied rows and enter the suspended clear delay
    fn scan_full_lines(&mut self, now_ms: u64) {
        let lines = self.board.full_rows();
        if lines.is_empty() {
            return;
        }

        self.status = GameStatus::Suspended;
        self.pending_clear = Some(PendingClear {
            lines,
            since_ms: now_ms,
        });
    }

    /// Apply the deferred clear: collapse rows, resume play, spawn
    fn commit_clear(&mut self) {
        let Some(pending) = self.pending_clear.take() else {
            return;
        };

        self.board = self.board.clear_rows(&pending.lines);
        self.status = GameStatus::Playing;
        self.spawn();
    }

    /// Install the queue head as the active piece at the spawn position
    ///
    /// If the head cannot legally spawn the game is over; the queue is
    /// otherwise replenished back to its fixed minimum length.
    fn spawn(&mut self) {
        let Some(&head) = self.upcoming.front() else {
            return;
        };

        let spawn_pos = PiecePosition::new(SPAWN_X, SPAWN_Y, Rotation::R0);
        if !can_place(head, spawn_pos, &self.board) {
            self.status = GameStatus::GameOver;
            self.active = None;
            return;
        }

        if let Some(kind) = self.upcoming.pop_front() {
            self.upcoming.push_back(self.source.next_kind());
            self.active = Some(ActivePiece::at_spawn(kind));
            self.refresh_estimated_drop();
        }
    }

    /// Recompute the cached landing row for the ghost preview
    fn refresh_estimated_drop(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        let estimated = drop_y(active.kind, active.position(), &self.board);
        self.active = Some(ActivePiece {
            estimated_drop_y: estimated,
            ..active
        });
    }
}
