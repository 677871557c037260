//! Terminal input source backed by crossterm's event queue.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::engine::InputSource;
use crate::map::handle_key_event;
use crate::types::InputEvent;

/// Drains pending terminal events without blocking.
///
/// Key releases and terminal auto-repeat are ignored; a resize becomes
/// [`InputEvent::Redraw`].
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = translate(event::read()?) {
                return Ok(Some(ev));
            }
        }
        Ok(None)
    }
}

/// Map a raw terminal event; None for events the game ignores.
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key),
        Event::Resize(_, _) => Some(InputEvent::Redraw),
        _ => None,
    }
}
