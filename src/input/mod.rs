//! Keyboard driver - translates key events into the engine's action vocabulary
//!
//! This layer is an external collaborator from the engine's point of view:
//! it only produces actions, never inspects game state. Repeats are
//! throttled per action so held keys do not flood the transition function.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameAction, KEY_REPEAT_MS, SOFT_DROP_REPEAT_MS};

/// Map a key code to a game action
pub fn map_key(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::MoveDown),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::Drop),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SaveTetromino),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::PauseResume),
        _ => None,
    }
}

/// Check for quit keys (q, Esc, Ctrl-C)
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Per-action minimum interval between accepted key events
///
/// Soft drop gets a faster repeat interval than the other actions.
#[derive(Debug, Clone)]
pub struct KeyThrottle {
    repeat: Duration,
    soft_drop_repeat: Duration,
    last_accepted: [Option<Instant>; 8],
}

fn action_slot(action: GameAction) -> usize {
    match action {
        GameAction::Tick => 0,
        GameAction::MoveDown => 1,
        GameAction::MoveLeft => 2,
        GameAction::MoveRight => 3,
        GameAction::Drop => 4,
        GameAction::Rotate => 5,
        GameAction::SaveTetromino => 6,
        GameAction::PauseResume => 7,
    }
}

impl KeyThrottle {
    pub fn new() -> Self {
        Self::with_intervals(KEY_REPEAT_MS, SOFT_DROP_REPEAT_MS)
    }

    pub fn with_intervals(repeat_ms: u64, soft_drop_repeat_ms: u64) -> Self {
        Self {
            repeat: Duration::from_millis(repeat_ms),
            soft_drop_repeat: Duration::from_millis(soft_drop_repeat_ms),
            last_accepted: [None; 8],
        }
    }

    /// Accept or swallow an action arriving at `now`
    pub fn allow(&mut self, action: GameAction, now: Instant) -> bool {
        let min_interval = if action == GameAction::MoveDown {
            self.soft_drop_repeat
        } else {
            self.repeat
        };

        let slot = action_slot(action);
        if let Some(last) = self.last_accepted[slot] {
            if now.duration_since(last) < min_interval {
                return false;
            }
        }

        self.last_accepted[slot] = Some(now);
        true
    }
}

impl Default for KeyThrottle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_covers_the_action_vocabulary() {
        assert_eq!(map_key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(map_key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(map_key(KeyCode::Down), Some(GameAction::MoveDown));
        assert_eq!(map_key(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameAction::Drop));
        assert_eq!(map_key(KeyCode::Char('s')), Some(GameAction::SaveTetromino));
        assert_eq!(map_key(KeyCode::Char('p')), Some(GameAction::PauseResume));
        assert_eq!(map_key(KeyCode::Home), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(should_quit(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_throttle_swallows_fast_repeats() {
        let mut throttle = KeyThrottle::with_intervals(100, 50);
        let t0 = Instant::now();

        assert!(throttle.allow(GameAction::MoveLeft, t0));
        assert!(!throttle.allow(GameAction::MoveLeft, t0 + Duration::from_millis(99)));
        assert!(throttle.allow(GameAction::MoveLeft, t0 + Duration::from_millis(100)));
    }

    #[test]
    fn test_throttle_tracks_actions_independently() {
        let mut throttle = KeyThrottle::with_intervals(100, 50);
        let t0 = Instant::now();

        assert!(throttle.allow(GameAction::MoveLeft, t0));
        assert!(throttle.allow(GameAction::Rotate, t0));
    }

    #[test]
    fn test_soft_drop_uses_the_faster_interval() {
        let mut throttle = KeyThrottle::with_intervals(100, 50);
        let t0 = Instant::now();

        assert!(throttle.allow(GameAction::MoveDown, t0));
        assert!(!throttle.allow(GameAction::MoveDown, t0 + Duration::from_millis(49)));
        assert!(throttle.allow(GameAction::MoveDown, t0 + Duration::from_millis(50)));
    }
}
