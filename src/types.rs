//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Fixed entry position for newly spawned pieces
pub const SPAWN_X: i32 = 4;
pub const SPAWN_Y: i32 = 0;

/// The upcoming queue is replenished back to this length after every pop
pub const UPCOMING_QUEUE_LEN: usize = 4;

/// Dimensions of the hold/next preview panels
pub const PREVIEW_WIDTH: usize = 3;
pub const PREVIEW_HEIGHT: usize = 4;

/// Event-loop cadence for the binary (milliseconds)
pub const TICK_MS: u64 = 16;

/// Cadence of the suspended-state poll timer (milliseconds)
pub const SUSPEND_POLL_MS: u64 = 500;

/// Key repeat throttling (milliseconds)
pub const KEY_REPEAT_MS: u64 = 100;
pub const SOFT_DROP_REPEAT_MS: u64 = 50;

/// Display color of a locked or falling cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// Cell on a matrix (None = empty sentinel, Some = filled with a color)
pub type Cell = Option<CellColor>;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl TetrominoKind {
    pub const ALL: [TetrominoKind; 7] = [
        TetrominoKind::I,
        TetrominoKind::J,
        TetrominoKind::L,
        TetrominoKind::O,
        TetrominoKind::S,
        TetrominoKind::T,
        TetrominoKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(TetrominoKind::I),
            "j" => Some(TetrominoKind::J),
            "l" => Some(TetrominoKind::L),
            "o" => Some(TetrominoKind::O),
            "s" => Some(TetrominoKind::S),
            "t" => Some(TetrominoKind::T),
            "z" => Some(TetrominoKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TetrominoKind::I => "i",
            TetrominoKind::J => "j",
            TetrominoKind::L => "l",
            TetrominoKind::O => "o",
            TetrominoKind::S => "s",
            TetrominoKind::T => "t",
            TetrominoKind::Z => "z",
        }
    }
}

/// Quarter-turn count applied to a piece's spawn matrix (R0 = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// Number of clockwise quarter turns this rotation represents
    pub fn turns(&self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }

    /// Next clockwise rotation (rotation + 1 mod 4)
    pub fn cw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }
}

/// Game actions - the full input vocabulary of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// No-op placeholder; its only effect is triggering the suspended-delay check
    Tick,
    MoveDown,
    MoveLeft,
    MoveRight,
    Drop,
    Rotate,
    SaveTetromino,
    PauseResume,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tick" => Some(GameAction::Tick),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "drop" => Some(GameAction::Drop),
            "rotate" => Some(GameAction::Rotate),
            "savetetromino" => Some(GameAction::SaveTetromino),
            "pauseresume" => Some(GameAction::PauseResume),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Tick => "tick",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Drop => "drop",
            GameAction::Rotate => "rotate",
            GameAction::SaveTetromino => "saveTetromino",
            GameAction::PauseResume => "pauseResume",
        }
    }
}

/// Game lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    /// Line-clear delay in progress; gameplay actions are deferred
    Suspended,
    Paused,
    GameOver,
}

/// Engine timing configuration
///
/// Kept as configuration rather than constants so drivers and tests can
/// pick their own values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Delay between line-full detection and the actual clear (milliseconds)
    pub line_clear_delay_ms: u64,
    /// Gravity interval for the external drop timer (milliseconds)
    pub gravity_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            line_clear_delay_ms: 500,
            gravity_interval_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cw_cycles() {
        let mut r = Rotation::R0;
        for _ in 0..4 {
            r = r.cw();
        }
        assert_eq!(r, Rotation::R0);
    }

    #[test]
    fn test_rotation_turns() {
        assert_eq!(Rotation::R0.turns(), 0);
        assert_eq!(Rotation::R1.turns(), 1);
        assert_eq!(Rotation::R2.turns(), 2);
        assert_eq!(Rotation::R3.turns(), 3);
    }

    #[test]
    fn test_action_string_roundtrip() {
        for action in [
            GameAction::Tick,
            GameAction::MoveDown,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Drop,
            GameAction::Rotate,
            GameAction::SaveTetromino,
            GameAction::PauseResume,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_kind_string_roundtrip() {
        for kind in TetrominoKind::ALL {
            assert_eq!(TetrominoKind::from_str(kind.as_str()), Some(kind));
        }
    }
}
