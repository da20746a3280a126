//! Terminal frontend - framebuffer, game view, and renderer.
//!
//! Everything here consumes `GameSnapshot`s; nothing reaches back into the
//! engine.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, Rgb, ScreenCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
