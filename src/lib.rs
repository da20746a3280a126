//! tetrocell - a deterministic matrix-based falling-block engine.
//!
//! The `core` module is the pure game engine: a 10x20 cell matrix, the
//! seven-piece catalog, a placement validator, and a state machine driven
//! by a `(state, action, now_ms) -> state` transition function. The
//! `input` and `term` modules are the external collaborators: a throttled
//! keyboard driver and a crossterm framebuffer renderer that reads
//! immutable snapshots.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
