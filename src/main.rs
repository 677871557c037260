//! Terminal Snake runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer.
//!
//! Environment:
//! - `SNAKE_GRID_WIDTH`, `SNAKE_GRID_HEIGHT`, `SNAKE_TICK_MS`, `SNAKE_SEED`,
//!   `SNAKE_RESET_DIRECTION`: see [`GameConfig::from_env`]
//! - `SNAKE_LOG_PATH`: write logs to this file (the terminal is in raw mode,
//!   so nothing is logged without it); filtered by `RUST_LOG`

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tui_snake::core::{GameConfig, GameState};
use tui_snake::engine::GameLoop;
use tui_snake::input::TerminalInput;
use tui_snake::term::{GameView, TerminalCanvas, TerminalRenderer};
use tui_snake::types::Palette;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    config.validate().context("invalid game configuration")?;
    let state = GameState::new(config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let (result, mut term) = run(state, term);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

fn run(state: GameState, term: TerminalRenderer) -> (Result<()>, TerminalRenderer) {
    let palette = Palette::default();
    let (w, h) = (state.grid().width(), state.grid().height());
    let canvas = TerminalCanvas::new(GameView::default(), palette, w, h, term);

    let mut game = GameLoop::new(state, TerminalInput::new(), canvas, palette);
    let result = game.run();
    let (_, _, canvas) = game.into_parts();
    (result, canvas.into_terminal())
}

fn init_logging() -> Result<()> {
    match std::env::var_os("SNAKE_LOG_PATH") {
        Some(path) => install_file_logger(Path::new(&path)),
        None => Ok(()),
    }
}

/// Route `tracing` output to `path`; fails if a subscriber is already set.
fn install_file_logger(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to install log subscriber")
}
