//! Game state module - the per-tick update loop
//!
//! This module ties together the grid, the snake, the food and the RNG.
//! Each tick applies the buffered heading, advances the snake, then checks
//! for food and for self-collision, in that order.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, GameConfig};
use crate::food::FoodState;
use crate::grid::GridWorld;
use crate::snake::SnakeState;
use crate::types::{Cell, Direction};

/// Lifecycle phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// The snake filled the board; no free cell is left for food.
    Won,
}

/// A single cell repaint, in the order the renderer must apply it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellChange {
    Cleared(Cell),
    Snake(Cell),
    Food(Cell),
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Head cell after the move (before any reset)
    pub head: Cell,
    /// Tail cell dropped by the move
    pub vacated: Option<Cell>,
    /// The head landed on the food
    pub ate: bool,
    /// New food cell, when the food moved this tick
    pub food: Option<Cell>,
    /// The snake ran into itself and was reset
    pub reset: bool,
    /// Eating filled the board
    pub board_full: bool,
}

impl TickOutcome {
    /// Cell repaints for an incremental redraw.
    ///
    /// Empty when `reset` is set: the whole board must be repainted then.
    pub fn changes(&self) -> ArrayVec<CellChange, 3> {
        let mut out = ArrayVec::new();
        if self.reset {
            return out;
        }
        // Clear first: the head may move into the cell the tail just left.
        if let Some(tail) = self.vacated {
            out.push(CellChange::Cleared(tail));
        }
        out.push(CellChange::Snake(self.head));
        if let Some(food) = self.food {
            out.push(CellChange::Food(food));
        }
        out
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: GridWorld,
    snake: SnakeState,
    /// None once the board is full.
    food: Option<FoodState>,
    rng: StdRng,
    phase: Phase,
    paused: bool,
    /// Monotonic round id (increments on reset and restart).
    episode_id: u32,
    /// Ticks advanced in the current round.
    step_in_episode: u64,
}

impl GameState {
    /// Create a new game: a length-1 snake at the center and food at a random free cell
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = GridWorld::new(config.grid_width, config.grid_height);
        let mut rng = StdRng::seed_from_u64(config.seed);
        let heading = config.reset_direction.pick(&mut rng);
        let snake = SnakeState::new(&grid, heading);
        let food = FoodState::spawn(&grid, &snake.occupied(), &mut rng).ok();
        Ok(Self::assemble(config, grid, snake, food, rng))
    }

    /// Create a game from an explicit snake and food cell
    ///
    /// Useful for scripted scenarios; the RNG is still seeded from `config`.
    pub fn from_parts(
        config: GameConfig,
        snake: SnakeState,
        food: Cell,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = GridWorld::new(config.grid_width, config.grid_height);
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self::assemble(config, grid, snake, Some(FoodState::at(food)), rng))
    }

    fn assemble(
        config: GameConfig,
        grid: GridWorld,
        snake: SnakeState,
        food: Option<FoodState>,
        rng: StdRng,
    ) -> Self {
        let phase = if food.is_some() { Phase::Running } else { Phase::Won };
        Self {
            config,
            grid,
            snake,
            food,
            rng,
            phase,
            paused: false,
            episode_id: 0,
            step_in_episode: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    /// Current food cell (None once the board is full)
    pub fn food(&self) -> Option<Cell> {
        self.food.map(|f| f.position())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn step_in_episode(&self) -> u64 {
        self.step_in_episode
    }

    /// Forward a heading request to the snake (reversals are ignored)
    pub fn set_direction(&mut self, dir: Direction) {
        self.snake.set_direction(dir);
    }

    /// Toggle pause state; returns the new state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Start over with a fresh snake and food, keeping the RNG stream
    pub fn restart(&mut self) {
        let heading = self.config.reset_direction.pick(&mut self.rng);
        self.snake.reset(&self.grid, heading);
        self.food = FoodState::spawn(&self.grid, &self.snake.occupied(), &mut self.rng).ok();
        self.phase = if self.food.is_some() {
            Phase::Running
        } else {
            Phase::Won
        };
        self.paused = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.step_in_episode = 0;
    }

    /// Main game tick - advance the snake by one cell
    ///
    /// Returns None when nothing moved (paused or won).
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.paused || self.phase == Phase::Won {
            return None;
        }
        let food_cell = self.food.as_ref()?.position();

        let step = self.snake.advance(&self.grid);
        self.step_in_episode += 1;

        let mut outcome = TickOutcome {
            head: step.head,
            vacated: step.vacated,
            ate: false,
            food: None,
            reset: false,
            board_full: false,
        };

        if self.snake.ate_food(food_cell) {
            outcome.ate = true;
            self.snake.grow();
            tracing::debug!(
                episode = self.episode_id,
                len = self.snake.len(),
                x = food_cell.x,
                y = food_cell.y,
                "food eaten"
            );
            match self.relocate_food() {
                Some(cell) => outcome.food = Some(cell),
                None => {
                    outcome.board_full = true;
                    return Some(outcome);
                }
            }
        }

        if self.snake.self_collided() {
            tracing::info!(
                episode = self.episode_id,
                len = self.snake.len(),
                steps = self.step_in_episode,
                "self collision, resetting snake"
            );
            let heading = self.config.reset_direction.pick(&mut self.rng);
            self.snake.reset(&self.grid, heading);
            outcome.reset = true;
            outcome.food = self.relocate_food();
            self.episode_id = self.episode_id.wrapping_add(1);
            self.step_in_episode = 0;
        }

        Some(outcome)
    }

    /// Move the food off the snake; switches to `Phase::Won` on a full board
    fn relocate_food(&mut self) -> Option<Cell> {
        let occupied = self.snake.occupied();
        let food = self.food.as_mut()?;
        match food.relocate(&self.grid, &occupied, &mut self.rng) {
            Ok(cell) => Some(cell),
            Err(err) => {
                tracing::info!(
                    episode = self.episode_id,
                    len = self.snake.len(),
                    "{err}"
                );
                self.food = None;
                self.phase = Phase::Won;
                None
            }
        }
    }
}
