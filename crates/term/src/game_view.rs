//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PAGE_BG: Rgb = Rgb::new(250, 248, 239);
const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);
const HIGH_TILE: Rgb = Rgb::new(237, 207, 115);

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square with typical glyph aspect ratio.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer frame size (including border) for a board of `size` cells.
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let n = size as u16;
        // One column/row of board background between and around tiles.
        let inner_w = n * (self.cell_w + 1) + 1;
        let inner_h = n * (self.cell_h + 1) + 1;
        (inner_w + 2, inner_h + 2)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(DARK_TEXT, PAGE_BG).into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let board = CellStyle::new(BOARD_BG, BOARD_BG);
        let border = CellStyle::new(DARK_TEXT, PAGE_BG);

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.size {
            for col in 0..snap.size {
                match snap.tile_at(row, col) {
                    Some(tile) => self.draw_tile(fb, start_x, start_y, tile),
                    None => self.draw_empty_cell(fb, start_x, start_y, row, col),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if !snap.playable() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            self.draw_overlay_text(
                fb,
                start_x,
                start_y.saturating_add(1),
                frame_w,
                frame_h,
                "r: restart",
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Top-left terminal position of the cell at `(row, col)`.
    fn cell_origin(&self, start_x: u16, start_y: u16, row: usize, col: usize) -> (u16, u16) {
        let px = start_x + 2 + (col as u16) * (self.cell_w + 1);
        let py = start_y + 2 + (row as u16) * (self.cell_h + 1);
        (px, py)
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: usize, col: usize) {
        let (px, py) = self.cell_origin(start_x, start_y, row, col);
        let style = CellStyle::new(EMPTY_BG, EMPTY_BG);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, tile: &TileView) {
        let (px, py) = self.cell_origin(start_x, start_y, tile.row, tile.col);
        let (bg, fg) = tile_colors(tile.value);
        let mut style = CellStyle::new(fg, bg).bold();
        if tile.just_merged {
            style.bg = bg.darken(0.12);
        }
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        if tile.just_spawned && self.cell_w >= 3 {
            let marker = CellStyle { bold: false, ..style };
            fb.put_char(px, py, '·', marker);
        }

        let mut label = [0u8; 24];
        let text = value_label(tile.value, self.cell_w as usize, &mut label);
        let text_w = text.len() as u16;
        let tx = px + self.cell_w.saturating_sub(text_w) / 2;
        let ty = py + self.cell_h / 2;
        fb.put_str(tx, ty, text, style);
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
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::new(DARK_TEXT, PAGE_BG).bold();
        let value = CellStyle::new(DARK_TEXT, PAGE_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.best_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.moves as u64, value);
        y = y.saturating_add(2);

        let dim = CellStyle { dim: true, ..value };
        fb.put_str(panel_x, y, "arrows/hjkl", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "r restart", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q quit", dim);
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
        let style = CellStyle::new(LIGHT_TEXT, DARK_TEXT).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Background and text colors for a tile value.
fn tile_colors(value: u64) -> (Rgb, Rgb) {
    let power = value.trailing_zeros();
    let bg = match power {
        1 => Rgb::new(238, 228, 218),
        2 => Rgb::new(237, 224, 200),
        3 => Rgb::new(242, 177, 121),
        4 => Rgb::new(245, 149, 99),
        5 => Rgb::new(246, 124, 95),
        6 => Rgb::new(246, 94, 59),
        p => HIGH_TILE.darken((p.saturating_sub(7) as f32 / 13.0).min(1.0)),
    };
    let fg = if power <= 2 { DARK_TEXT } else { LIGHT_TEXT };
    (bg, fg)
}

/// Decimal label for `value`, or `2^k` when the digits are wider than the tile.
fn value_label(value: u64, max_w: usize, buf: &mut [u8; 24]) -> &str {
    use std::io::Write;

    let mut cursor = std::io::Cursor::new(&mut buf[..]);
    let _ = write!(cursor, "{}", value);
    let mut len = cursor.position() as usize;
    if len > max_w {
        let mut cursor = std::io::Cursor::new(&mut buf[..]);
        let _ = write!(cursor, "2^{}", value.trailing_zeros());
        len = cursor.position() as usize;
    }
    std::str::from_utf8(&buf[..len]).unwrap_or("")
}
