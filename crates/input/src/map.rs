//! Key mapping from terminal events to input events.

use crate::types::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to input events.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    let dir = match key.code {
        KeyCode::Up => Direction::Up,
        KeyCode::Down => Direction::Down,
        KeyCode::Left => Direction::Left,
        KeyCode::Right => Direction::Right,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            // Steering: WASD and vi keys
            'w' | 'k' => Direction::Up,
            's' | 'j' => Direction::Down,
            'a' | 'h' => Direction::Left,
            'd' | 'l' => Direction::Right,

            // Actions
            'p' | ' ' => return Some(InputEvent::Pause),
            'r' => return Some(InputEvent::Restart),
            _ => return None,
        },
        _ => return None,
    };
    Some(InputEvent::DirectionKey(dir))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
