//! Seams between the game loop and the platform layer.

use anyhow::Result;

use crate::types::{Cell, InputEvent, Rgb};

/// Source of discrete input events.
pub trait InputSource {
    /// Next event queued since the last call, or `None` once the queue is
    /// drained. Must not block.
    fn next_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Cell-granularity board painter.
///
/// Calls are buffered until [`Renderer::present`].
pub trait Renderer {
    /// Paint a grid cell with `color`.
    fn paint_cell(&mut self, cell: Cell, color: Rgb) -> Result<()>;

    /// Paint a grid cell with the board background.
    fn clear_cell(&mut self, cell: Cell) -> Result<()>;

    /// Clear the whole board (and redraw its frame).
    fn clear_board(&mut self) -> Result<()>;

    /// Show or hide a status line over the board.
    fn set_banner(&mut self, _text: Option<&str>) -> Result<()> {
        Ok(())
    }

    /// Flush buffered paint calls to the output.
    fn present(&mut self) -> Result<()>;

    /// Whether every board cell is currently on screen.
    ///
    /// The loop holds ticks while this is false.
    fn board_visible(&self) -> bool {
        true
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        (**self).next_event()
    }
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn paint_cell(&mut self, cell: Cell, color: Rgb) -> Result<()> {
        (**self).paint_cell(cell, color)
    }

    fn clear_cell(&mut self, cell: Cell) -> Result<()> {
        (**self).clear_cell(cell)
    }

    fn clear_board(&mut self) -> Result<()> {
        (**self).clear_board()
    }

    fn set_banner(&mut self, text: Option<&str>) -> Result<()> {
        (**self).set_banner(text)
    }

    fn present(&mut self) -> Result<()> {
        (**self).present()
    }

    fn board_visible(&self) -> bool {
        (**self).board_visible()
    }
}
