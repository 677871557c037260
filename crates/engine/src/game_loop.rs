//! Fixed-rate game loop.
//!
//! One tick = drain input → `GameState::tick` → paint changed cells → present.
//! A quit event ends the loop before the tick runs, so the in-progress frame
//! is never drawn. While the renderer cannot show the whole board the game
//! is held and a banner asks for a larger terminal.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{CellChange, GameState, TickOutcome};
use crate::pacer::Pacer;
use crate::traits::{InputSource, Renderer};
use crate::types::{InputEvent, Palette};

const BANNER_PAUSED: &str = "PAUSED";
const BANNER_WON: &str = "YOU WIN";
const BANNER_TOO_SMALL: &str = "TERMINAL TOO SMALL";

/// Whether the loop should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Drives a [`GameState`] with an input source and a renderer.
pub struct GameLoop<I, R> {
    state: GameState,
    input: I,
    renderer: R,
    palette: Palette,
    /// Banner currently shown by the renderer.
    banner: Option<&'static str>,
}

impl<I: InputSource, R: Renderer> GameLoop<I, R> {
    pub fn new(state: GameState, input: I, renderer: R, palette: Palette) -> Self {
        Self {
            state,
            input,
            renderer,
            palette,
            banner: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_parts(self) -> (GameState, I, R) {
        (self.state, self.input, self.renderer)
    }

    /// Draw the initial board.
    pub fn start(&mut self) -> Result<()> {
        self.repaint()?;
        self.sync_banner()?;
        self.renderer.present()
    }

    /// Run one tick.
    pub fn step(&mut self) -> Result<LoopControl> {
        let mut repaint = false;

        // Drain everything queued since the last tick; the snake keeps only
        // the latest accepted heading.
        while let Some(event) = self.input.next_event()? {
            match event {
                InputEvent::Quit => {
                    tracing::info!(episode = self.state.episode_id(), "quit requested");
                    return Ok(LoopControl::Quit);
                }
                InputEvent::DirectionKey(dir) => self.state.set_direction(dir),
                InputEvent::Pause => {
                    let paused = self.state.toggle_pause();
                    tracing::debug!(paused, "pause toggled");
                }
                InputEvent::Restart => {
                    self.state.restart();
                    tracing::info!(episode = self.state.episode_id(), "game restarted");
                    repaint = true;
                }
                InputEvent::Redraw => repaint = true,
            }
        }

        // Repaint first: it also picks up a new viewport after a resize.
        if repaint {
            self.repaint()?;
        }

        if self.renderer.board_visible() {
            if let Some(outcome) = self.state.tick() {
                if outcome.board_full {
                    tracing::info!(
                        episode = self.state.episode_id(),
                        len = self.state.snake().len(),
                        "board full, round won"
                    );
                }
                if outcome.reset {
                    self.repaint()?;
                } else {
                    self.apply(&outcome)?;
                }
            }
        }

        self.sync_banner()?;
        self.renderer.present()?;
        Ok(LoopControl::Continue)
    }

    /// Run until a quit event, one step per tick interval.
    pub fn run(&mut self) -> Result<()> {
        let interval = Duration::from_millis(self.state.config().tick_ms as u64);
        tracing::info!(
            width = self.state.grid().width(),
            height = self.state.grid().height(),
            tick_ms = self.state.config().tick_ms,
            seed = self.state.config().seed,
            "game loop started"
        );

        self.start()?;
        let mut pacer = Pacer::new(interval, Instant::now());
        loop {
            pacer.wait();
            if self.step()? == LoopControl::Quit {
                return Ok(());
            }
        }
    }

    fn apply(&mut self, outcome: &TickOutcome) -> Result<()> {
        for change in outcome.changes() {
            match change {
                CellChange::Cleared(cell) => self.renderer.clear_cell(cell)?,
                CellChange::Snake(cell) => self.renderer.paint_cell(cell, self.palette.snake)?,
                CellChange::Food(cell) => self.renderer.paint_cell(cell, self.palette.food)?,
            }
        }
        Ok(())
    }

    /// Clear the board and paint the snake and food from scratch.
    fn repaint(&mut self) -> Result<()> {
        self.renderer.clear_board()?;
        // Clearing the board drops any banner as well.
        self.banner = None;
        for cell in self.state.snake().segments() {
            self.renderer.paint_cell(cell, self.palette.snake)?;
        }
        if let Some(food) = self.state.food() {
            self.renderer.paint_cell(food, self.palette.food)?;
        }
        Ok(())
    }

    fn sync_banner(&mut self) -> Result<()> {
        let wanted = if !self.renderer.board_visible() {
            Some(BANNER_TOO_SMALL)
        } else if self.state.won() {
            Some(BANNER_WON)
        } else if self.state.paused() {
            Some(BANNER_PAUSED)
        } else {
            None
        };
        if wanted != self.banner {
            self.renderer.set_banner(wanted)?;
            self.banner = wanted;
        }
        Ok(())
    }
}
