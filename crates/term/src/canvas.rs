//! Board canvases: [`Renderer`] implementations on top of a framebuffer.
//!
//! [`BoardCanvas`] is pure and keeps a model of the painted grid so the frame
//! can be rebuilt at any time (banner changes, resizes). [`TerminalCanvas`]
//! adds the terminal: it tracks the viewport and flushes on `present`.
//!
//! A board larger than the viewport is reported through
//! [`Renderer::board_visible`]; banners then center on the viewport so they
//! stay readable.

use anyhow::Result;

use crate::engine::Renderer;
use crate::fb::{FrameBuffer, Glyph, Rgb};
use crate::game_view::{BoardLayout, GameView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::{Cell, Palette};

/// Framebuffer-backed board.
pub struct BoardCanvas {
    view: GameView,
    palette: Palette,
    grid_w: u16,
    grid_h: u16,
    viewport: Viewport,
    layout: BoardLayout,
    fb: FrameBuffer,
    /// Painted color per grid cell, row-major; None = background.
    model: Vec<Option<Rgb>>,
    banner: Option<String>,
}

impl BoardCanvas {
    pub fn new(
        view: GameView,
        palette: Palette,
        grid_w: u16,
        grid_h: u16,
        viewport: Viewport,
    ) -> Self {
        let layout = view.layout(grid_w, grid_h, viewport);
        let mut canvas = Self {
            view,
            palette,
            grid_w,
            grid_h,
            viewport,
            layout,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            model: vec![None; (grid_w as usize) * (grid_h as usize)],
            banner: None,
        };
        canvas.rebuild();
        canvas
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Color painted at `cell`, None for background or off-grid cells.
    pub fn color_at(&self, cell: Cell) -> Option<Rgb> {
        self.index(cell).and_then(|i| self.model[i])
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Adopt a new viewport; the frame is rebuilt around the same board.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.layout = self.view.layout(self.grid_w, self.grid_h, viewport);
        self.fb.resize(viewport.width, viewport.height);
        self.rebuild();
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x >= self.grid_w || cell.y >= self.grid_h {
            return None;
        }
        Some((cell.y as usize) * (self.grid_w as usize) + (cell.x as usize))
    }

    /// Redraw the whole framebuffer from the model.
    fn rebuild(&mut self) {
        self.fb.fill(Glyph::default());
        self.view.draw_frame(&mut self.fb, &self.layout, &self.palette);
        for y in 0..self.grid_h {
            for x in 0..self.grid_w {
                let cell = Cell::new(x, y);
                if let Some(color) = self.color_at(cell) {
                    self.view.paint_cell(&mut self.fb, &self.layout, cell, color, &self.palette);
                }
            }
        }
        self.draw_banner();
    }

    fn draw_banner(&mut self) {
        let Some(text) = &self.banner else {
            return;
        };
        let area = if self.layout.fits(self.viewport) {
            self.layout
        } else {
            BoardLayout::covering(self.viewport)
        };
        self.view.draw_banner(&mut self.fb, &area, text);
    }
}

impl Renderer for BoardCanvas {
    fn paint_cell(&mut self, cell: Cell, color: Rgb) -> Result<()> {
        let Some(i) = self.index(cell) else {
            return Ok(());
        };
        self.model[i] = Some(color);
        self.view.paint_cell(&mut self.fb, &self.layout, cell, color, &self.palette);
        // Keep the banner on top of the board.
        self.draw_banner();
        Ok(())
    }

    fn clear_cell(&mut self, cell: Cell) -> Result<()> {
        let Some(i) = self.index(cell) else {
            return Ok(());
        };
        self.model[i] = None;
        self.view.clear_cell(&mut self.fb, &self.layout, cell, &self.palette);
        self.draw_banner();
        Ok(())
    }

    fn clear_board(&mut self) -> Result<()> {
        self.model.fill(None);
        self.banner = None;
        self.rebuild();
        Ok(())
    }

    fn set_banner(&mut self, text: Option<&str>) -> Result<()> {
        self.banner = text.map(str::to_string);
        self.rebuild();
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }

    fn board_visible(&self) -> bool {
        self.layout.fits(self.viewport)
    }
}

/// Board canvas flushed to the real terminal.
pub struct TerminalCanvas {
    board: BoardCanvas,
    term: TerminalRenderer,
}

impl TerminalCanvas {
    pub fn new(
        view: GameView,
        palette: Palette,
        grid_w: u16,
        grid_h: u16,
        term: TerminalRenderer,
    ) -> Self {
        Self {
            board: BoardCanvas::new(view, palette, grid_w, grid_h, current_viewport()),
            term,
        }
    }

    pub fn into_terminal(self) -> TerminalRenderer {
        self.term
    }
}

impl Renderer for TerminalCanvas {
    fn paint_cell(&mut self, cell: Cell, color: Rgb) -> Result<()> {
        self.board.paint_cell(cell, color)
    }

    fn clear_cell(&mut self, cell: Cell) -> Result<()> {
        self.board.clear_cell(cell)
    }

    fn clear_board(&mut self) -> Result<()> {
        // Full clears also follow terminal resizes.
        self.board.set_viewport(current_viewport());
        self.term.invalidate();
        self.board.clear_board()
    }

    fn set_banner(&mut self, text: Option<&str>) -> Result<()> {
        self.board.set_banner(text)
    }

    fn present(&mut self) -> Result<()> {
        self.term.draw(self.board.frame())
    }

    fn board_visible(&self) -> bool {
        self.board.board_visible()
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> BoardCanvas {
        // 4x3 grid => 10x5 frame.
        BoardCanvas::new(
            GameView::default(),
            Palette::default(),
            4,
            3,
            Viewport::new(10, 5),
        )
    }

    #[test]
    fn new_canvas_draws_empty_frame() {
        let c = canvas();
        assert_eq!(c.frame().row_text(0), "┌────────┐");
        assert_eq!(c.frame().row_text(2), "│        │");
        assert_eq!(c.frame().row_text(4), "└────────┘");
    }

    #[test]
    fn paint_updates_model_and_frame() {
        let mut c = canvas();
        let palette = Palette::default();
        c.paint_cell(Cell::new(0, 0), palette.snake).unwrap();
        assert_eq!(c.color_at(Cell::new(0, 0)), Some(palette.snake));
        assert_eq!(c.frame().row_text(1), "│██      │");

        c.clear_cell(Cell::new(0, 0)).unwrap();
        assert_eq!(c.color_at(Cell::new(0, 0)), None);
        assert_eq!(c.frame().row_text(1), "│        │");
    }

    #[test]
    fn off_grid_paint_is_ignored() {
        let mut c = canvas();
        c.paint_cell(Cell::new(4, 0), Rgb::new(1, 2, 3)).unwrap();
        c.clear_cell(Cell::new(0, 9)).unwrap();
        assert_eq!(c.frame().row_text(1), "│        │");
    }

    #[test]
    fn banner_is_drawn_and_removed() {
        let mut c = canvas();
        let palette = Palette::default();
        c.paint_cell(Cell::new(1, 1), palette.food).unwrap();

        c.set_banner(Some("WIN")).unwrap();
        assert!(c.frame().row_text(2).contains("WIN"));

        c.set_banner(None).unwrap();
        assert!(!c.frame().row_text(2).contains("WIN"));
        // The painted cell under the banner comes back.
        assert_eq!(c.frame().row_text(2), "│  ██    │");
    }

    #[test]
    fn clear_board_wipes_cells_and_banner() {
        let mut c = canvas();
        c.paint_cell(Cell::new(2, 2), Rgb::new(0, 255, 0)).unwrap();
        c.set_banner(Some("PAUSED")).unwrap();

        c.clear_board().unwrap();
        assert_eq!(c.banner(), None);
        assert_eq!(c.color_at(Cell::new(2, 2)), None);
        assert_eq!(c.frame().row_text(3), "│        │");
    }

    #[test]
    fn viewport_change_recenters_board() {
        let mut c = canvas();
        c.paint_cell(Cell::new(0, 0), Rgb::new(0, 255, 0)).unwrap();
        c.set_viewport(Viewport::new(14, 7));
        assert_eq!(c.layout().start_x, 2);
        assert_eq!(c.layout().start_y, 1);
        assert_eq!(c.frame().row_text(2), "  │██      │  ");
    }

    #[test]
    fn default_board_in_80x24_is_reported_hidden() {
        let palette = Palette::default();
        let mut c = BoardCanvas::new(GameView::default(), palette, 32, 24, Viewport::new(80, 24));
        assert!(!c.board_visible());

        c.set_banner(Some("TERMINAL TOO SMALL")).unwrap();
        // Centered on the viewport, not on the clipped frame.
        let row = c.frame().row_text(12);
        assert_eq!(row.find("TERMINAL").map(|b| row[..b].chars().count()), Some(31));

        c.set_viewport(Viewport::new(80, 26));
        assert!(c.board_visible());
        c.paint_cell(Cell::new(5, 23), palette.food).unwrap();
        assert_eq!(c.frame().get(7 + 1 + 10, 24).unwrap().style.fg, palette.food);
    }
}
