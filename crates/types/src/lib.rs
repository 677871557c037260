//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The default playfield is a 32x24 torus:
//!
//! - **Width**: 32 columns (indexed 0-31)
//! - **Height**: 24 rows (indexed 0-23)
//! - **Spawn cell**: (16, 12), the grid center
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed timestep interval (20 ticks per second) |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GRID_HEIGHT, GRID_WIDTH};
//!
//! // Directions know their unit delta and their reversal
//! assert_eq!(Direction::Right.delta(), (1, 0));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//!
//! // Cells are plain values
//! let center = Cell::new(GRID_WIDTH / 2, GRID_HEIGHT / 2);
//! assert_eq!(center, Cell::new(16, 12));
//! ```

/// Grid width in cells (32 columns)
pub const GRID_WIDTH: u16 = 32;

/// Grid height in cells (24 rows)
pub const GRID_HEIGHT: u16 = 24;

/// Fixed timestep interval in milliseconds (50ms = 20 ticks per second)
pub const TICK_MS: u32 = 50;

/// Snake body color
pub const SNAKE_COLOR: Rgb = Rgb::new(0, 255, 0);

/// Food color
pub const FOOD_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Board background color
pub const BOARD_BACKGROUND_COLOR: Rgb = Rgb::new(0, 0, 0);

/// Board frame color
pub const BORDER_COLOR: Rgb = Rgb::new(93, 216, 228);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_matches_classic_layout() {
        // 640x480 window with 20px cells.
        assert_eq!(GRID_WIDTH, 640 / 20);
        assert_eq!(GRID_HEIGHT, 480 / 20);
        assert_eq!(TICK_MS, 1000 / 20);
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}

/// A grid cell address
///
/// `x` grows left to right, `y` grows top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Cell {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

/// Heading of the snake
///
/// Each direction is a unit step on the grid:
/// - **Up**: (0, -1)
/// - **Down**: (0, 1)
/// - **Left**: (-1, 0)
/// - **Right**: (1, 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180° reversal of this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Discrete events produced by an input source
///
/// `Quit` and `DirectionKey` drive the game; `Pause`, `Restart` and `Redraw`
/// are terminal conveniences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the game loop immediately
    Quit,
    /// Request a new heading (subject to the reversal rule)
    DirectionKey(Direction),
    /// Toggle pause state
    Pause,
    /// Start a new game from scratch
    Restart,
    /// Repaint the whole board (e.g. after a terminal resize)
    Redraw,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors used to paint the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub snake: Rgb,
    pub food: Rgb,
    pub background: Rgb,
    pub border: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            snake: SNAKE_COLOR,
            food: FOOD_COLOR,
            background: BOARD_BACKGROUND_COLOR,
            border: BORDER_COLOR,
        }
    }
}
