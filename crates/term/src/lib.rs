//! Terminal renderer for the snake board.
//!
//! A small, game-oriented rendering layer: the board is drawn into a simple
//! framebuffer which is then flushed to the terminal, diffed against the
//! previous frame. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep all terminal I/O behind [`TerminalRenderer`]
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use canvas::{BoardCanvas, TerminalCanvas};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
