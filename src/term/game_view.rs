//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::pieces::{base_matrix, preview_matrix};
use crate::core::{GameSnapshot, Matrix};
use crate::types::{CellColor, GameStatus, TetrominoKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

fn color_rgb(color: CellColor) -> Rgb {
    match color {
        CellColor::Cyan => Rgb::new(80, 220, 220),
        CellColor::Blue => Rgb::new(80, 120, 220),
        CellColor::Orange => Rgb::new(255, 165, 0),
        CellColor::Yellow => Rgb::new(240, 220, 80),
        CellColor::Green => Rgb::new(100, 220, 120),
        CellColor::Purple => Rgb::new(200, 120, 220),
        CellColor::Red => Rgb::new(220, 80, 80),
    }
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render a snapshot into a framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = BOARD_HEIGHT as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: BOARD_BG,
            bold: false,
            dim: true,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, '·', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as i32 {
            for x in 0..BOARD_WIDTH as i32 {
                if let Some(Some(color)) = snap.board.get(x, y) {
                    self.draw_board_cell(&mut fb, start_x, start_y, x, y, color, false);
                }
            }
        }

        // Ghost piece at the estimated landing row, then the active piece.
        if let Some(active) = snap.active {
            let shape = base_matrix(active.kind).rotate_cw(active.rotation);
            if active.estimated_drop_y > active.y {
                self.draw_shape(
                    &mut fb,
                    start_x,
                    start_y,
                    &shape,
                    active.x,
                    active.estimated_drop_y,
                    Some('░'),
                );
            }
            self.draw_shape(&mut fb, start_x, start_y, &shape, active.x, active.y, None);
        }

        // Flash the rows of a pending clear while suspended.
        if let Some(lines) = &snap.cleared_lines {
            let flash = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: BOARD_BG,
                bold: true,
                dim: false,
            };
            for &line in lines {
                for x in 0..BOARD_WIDTH as i32 {
                    self.fill_cell(&mut fb, start_x, start_y, x, line as i32, '▒', flash);
                }
            }
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        match snap.status {
            GameStatus::Paused => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED")
            }
            GameStatus::GameOver => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            GameStatus::Playing | GameStatus::Suspended => {}
        }

        fb
    }

    fn draw_shape(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        shape: &Matrix,
        at_x: i32,
        at_y: i32,
        ghost_ch: Option<char>,
    ) {
        for (i, cell) in shape.cells().iter().enumerate() {
            let Some(color) = cell else {
                continue;
            };

            let x = at_x + (i % shape.width()) as i32;
            let y = at_y + (i / shape.width()) as i32;
            if x < 0 || x >= BOARD_WIDTH as i32 || y < 0 || y >= BOARD_HEIGHT as i32 {
                continue;
            }

            match ghost_ch {
                Some(ch) => {
                    let style = CellStyle {
                        fg: Rgb::new(140, 140, 140),
                        bg: BOARD_BG,
                        bold: false,
                        dim: true,
                    };
                    self.fill_cell(fb, start_x, start_y, x, y, ch, style);
                }
                None => self.draw_board_cell(fb, start_x, start_y, x, y, *color, true),
            }
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i32,
        y: i32,
        color: CellColor,
        bold: bool,
    ) {
        let style = CellStyle {
            fg: color_rgb(color),
            bg: BOARD_BG,
            bold,
            dim: false,
        };
        self.fill_cell(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: i32,
        cell_y: i32,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + (cell_x as u16) * self.cell_w;
        let py = start_y + 1 + cell_y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x + 8 >= viewport.width {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "HOLD", label);
        y += 1;
        y = self.draw_preview(fb, panel_x, y, snap.held);
        y += 1;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        for &kind in snap.upcoming.iter().take(4) {
            if y >= viewport.height {
                break;
            }
            y = self.draw_preview(fb, panel_x, y, Some(kind));
        }
    }

    /// Draw one 3x4 preview matrix; returns the row below it.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        panel_x: u16,
        panel_y: u16,
        kind: Option<TetrominoKind>,
    ) -> u16 {
        let preview = preview_matrix(kind);
        for y in 0..preview.height() as i32 {
            for x in 0..preview.width() as i32 {
                if let Some(Some(color)) = preview.get(x, y) {
                    let style = CellStyle {
                        fg: color_rgb(color),
                        bg: Rgb::new(0, 0, 0),
                        bold: false,
                        dim: false,
                    };
                    fb.fill_rect(
                        panel_x + (x as u16) * self.cell_w,
                        panel_y + y as u16,
                        self.cell_w,
                        1,
                        '█',
                        style,
                    );
                }
            }
        }
        panel_y + preview.height() as u16
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
