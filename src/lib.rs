//! TUI Snake (workspace facade crate).
//!
//! Exposes `tui_snake::{core,engine,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
