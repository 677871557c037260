//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on rendering, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: Toroidal grid with wraparound stepping
//! - [`snake`]: Segment chain, buffered heading, growth flag
//! - [`food`]: Bounded random food placement over free cells
//! - [`game_state`]: Per-tick orchestration (move, eat, collide, reset)
//! - [`config`]: Board size, tick rate, reset policy, seed
//!
//! # Game Rules
//!
//! - **Wraparound**: Leaving an edge re-enters from the opposite edge
//! - **No reversal**: A heading request opposite to the current heading is ignored
//! - **Growth lag**: Eating sets a flag; the snake grows on the following move
//! - **Self-collision**: The snake shrinks back to one cell at the center
//! - **Board full**: When no free cell is left for food the round is won
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_types::Direction;
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345)).unwrap();
//!
//! // Reversal of the initial heading (Right) is ignored
//! game.set_direction(Direction::Left);
//! let outcome = game.tick().unwrap();
//! assert_eq!(game.snake().direction(), Direction::Right);
//! assert_eq!(outcome.head, game.snake().head());
//! ```

pub mod config;
pub mod food;
pub mod game_state;
pub mod grid;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig, ResetDirection};
pub use food::{BoardFull, FoodState};
pub use game_state::{CellChange, GameState, Phase, TickOutcome};
pub use grid::GridWorld;
pub use snake::{SnakeState, Step};
