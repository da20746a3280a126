//! Terminal runner (default binary).
//!
//! Owns the two external timers the engine expects: a gravity timer that
//! emits MoveDown while the game is playing, and a poll timer that emits
//! Tick while a line clear is suspended. All actions funnel through the
//! engine's transition function with a monotonic millisecond clock.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetrocell::core::GameState;
use tetrocell::input::{map_key, should_quit, KeyThrottle};
use tetrocell::term::{GameView, TerminalRenderer, Viewport};
use tetrocell::types::{GameAction, GameStatus, SUSPEND_POLL_MS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::process::id();
    let mut state = GameState::with_seed(seed);
    let config = state.config();

    let view = GameView::default();
    let mut throttle = KeyThrottle::new();

    let start = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut gravity_acc_ms: u64 = 0;
    let mut poll_acc_ms: u64 = 0;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                    if should_quit(key) {
                        return Ok(());
                    }

                    let now = Instant::now();
                    if let Some(action) = map_key(key.code) {
                        if throttle.allow(action, now) {
                            state = state.step(action, now_ms(start));
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            // Gravity timer: fires only while playing.
            if state.status() == GameStatus::Playing {
                gravity_acc_ms += TICK_MS;
                if gravity_acc_ms >= config.gravity_interval_ms {
                    gravity_acc_ms = 0;
                    state = state.step(GameAction::MoveDown, now_ms(start));
                }
            } else {
                gravity_acc_ms = 0;
            }

            // Suspended poll timer: fires only while a clear is pending.
            if state.status() == GameStatus::Suspended {
                poll_acc_ms += TICK_MS;
                if poll_acc_ms >= SUSPEND_POLL_MS {
                    poll_acc_ms = 0;
                    state = state.step(GameAction::Tick, now_ms(start));
                }
            } else {
                poll_acc_ms = 0;
            }
        }
    }
}

fn now_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
