//! Game loop driver.
//!
//! The core is pure; this crate wires it to the outside world through two
//! small traits:
//!
//! - [`InputSource`]: a per-tick drainable queue of [`InputEvent`]s
//! - [`Renderer`]: cell-granularity paint calls plus a full-board clear
//!
//! [`GameLoop`] runs the fixed-rate tick: drain input, advance the game,
//! forward changed cells to the renderer, then wait for the next deadline.
//!
//! [`InputEvent`]: crate::types::InputEvent

pub mod game_loop;
pub mod pacer;
pub mod traits;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use game_loop::{GameLoop, LoopControl};
pub use pacer::Pacer;
pub use traits::{InputSource, Renderer};
