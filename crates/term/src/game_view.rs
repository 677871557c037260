//! GameView: maps grid cells onto a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, Palette};

const BANNER_STYLE: Style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

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

/// Where the board frame sits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the frame.
    pub start_x: u16,
    pub start_y: u16,
    /// Frame size including the border.
    pub frame_w: u16,
    pub frame_h: u16,
}

impl BoardLayout {
    /// The whole viewport as one area, for text that must stay on screen.
    pub fn covering(viewport: Viewport) -> Self {
        Self {
            start_x: 0,
            start_y: 0,
            frame_w: viewport.width,
            frame_h: viewport.height,
        }
    }

    /// Whether the full frame, border included, lies inside `viewport`.
    pub fn fits(&self, viewport: Viewport) -> bool {
        self.start_x as u32 + self.frame_w as u32 <= viewport.width as u32
            && self.start_y as u32 + self.frame_h as u32 <= viewport.height as u32
    }
}

/// Board geometry and drawing primitives for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Center a `grid_w x grid_h` board inside `viewport`.
    pub fn layout(&self, grid_w: u16, grid_h: u16, viewport: Viewport) -> BoardLayout {
        let frame_w = grid_w.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = grid_h.saturating_mul(self.cell_h).saturating_add(2);

        BoardLayout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Background for the play area plus the border box.
    pub fn draw_frame(&self, fb: &mut FrameBuffer, layout: &BoardLayout, palette: &Palette) {
        fb.fill_rect(
            layout.start_x.saturating_add(1),
            layout.start_y.saturating_add(1),
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            Glyph::new(' ', Style::solid(palette.background)),
        );
        draw_border(fb, layout, Style::new(palette.border, Rgb::new(0, 0, 0)));
    }

    /// Fill one grid cell with a solid block of `color`.
    pub fn paint_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        cell: Cell,
        color: Rgb,
        palette: &Palette,
    ) {
        let style = Style::new(color, palette.background).bold();
        self.fill_cell(fb, layout, cell, Glyph::new('█', style));
    }

    /// Restore one grid cell to the board background.
    pub fn clear_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        cell: Cell,
        palette: &Palette,
    ) {
        let blank = Glyph::new(' ', Style::solid(palette.background));
        self.fill_cell(fb, layout, cell, blank);
    }

    /// Centered status text on the middle row of `area`.
    pub fn draw_banner(&self, fb: &mut FrameBuffer, area: &BoardLayout, text: &str) {
        let mid_y = area.start_y.saturating_add(area.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = area
            .start_x
            .saturating_add(area.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, BANNER_STYLE);
    }

    /// Terminal position of the top-left character of a grid cell.
    pub fn cell_origin(&self, layout: &BoardLayout, cell: Cell) -> (u16, u16) {
        let px = layout
            .start_x
            .saturating_add(1)
            .saturating_add(cell.x.saturating_mul(self.cell_w));
        let py = layout
            .start_y
            .saturating_add(1)
            .saturating_add(cell.y.saturating_mul(self.cell_h));
        (px, py)
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, layout: &BoardLayout, cell: Cell, glyph: Glyph) {
        let (px, py) = self.cell_origin(layout, cell);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: &BoardLayout, style: Style) {
    let (w, h) = (layout.frame_w, layout.frame_h);
    if w < 2 || h < 2 {
        return;
    }
    let (left, top) = (layout.start_x, layout.start_y);
    let right = left.saturating_add(w - 1);
    let bottom = top.saturating_add(h - 1);

    fb.fill_rect(left + 1, top, w - 2, 1, Glyph::new('─', style));
    fb.fill_rect(left + 1, bottom, w - 2, 1, Glyph::new('─', style));
    fb.fill_rect(left, top + 1, 1, h - 2, Glyph::new('│', style));
    fb.fill_rect(right, top + 1, 1, h - 2, Glyph::new('│', style));

    for (x, y, ch) in [
        (left, top, '┌'),
        (right, top, '┐'),
        (left, bottom, '└'),
        (right, bottom, '┘'),
    ] {
        fb.set(x, y, Glyph::new(ch, style));
    }
}
