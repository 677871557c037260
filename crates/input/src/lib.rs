//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputEvent`] and provides a
//! non-blocking [`TerminalInput`] that the game loop drains once per tick.

pub mod map;
pub mod source;

pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{translate, TerminalInput};
