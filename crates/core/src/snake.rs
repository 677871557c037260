//! Snake module - the segment chain and its movement rules
//!
//! The snake is an ordered chain of cells, head first. Each `advance` prepends
//! a new head one step along the current heading and drops the tail unless a
//! growth was requested on a previous tick.

use std::collections::{HashSet, VecDeque};

use crate::grid::GridWorld;
use crate::types::{Cell, Direction};

/// Cells touched by a single `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The new head cell
    pub head: Cell,
    /// The tail cell that was dropped (None when the snake grew)
    pub vacated: Option<Cell>,
}

/// Player-controlled snake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeState {
    /// Body cells, head at the front
    segments: VecDeque<Cell>,
    direction: Direction,
    /// Buffered heading, applied at the start of the next advance
    pending: Option<Direction>,
    /// Set by `grow`, consumed by the next advance
    grow_pending: bool,
}

impl SnakeState {
    /// Create a length-1 snake at the grid center
    pub fn new(grid: &GridWorld, direction: Direction) -> Self {
        let mut segments = VecDeque::with_capacity(grid.cell_count().min(1024));
        segments.push_back(grid.center());
        Self {
            segments,
            direction,
            pending: None,
            grow_pending: false,
        }
    }

    /// Build a snake from explicit cells (head first)
    ///
    /// Returns None for an empty body.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Option<Self> {
        let segments: VecDeque<Cell> = cells.into_iter().collect();
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            segments,
            direction,
            pending: None,
            grow_pending: false,
        })
    }

    pub fn head(&self) -> Cell {
        // Length >= 1 is an invariant of every constructor and of `advance`.
        self.segments[0]
    }

    pub fn tail(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn is_growing(&self) -> bool {
        self.grow_pending
    }

    /// Body cells from head to tail
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Occupied cells as a set, for food placement
    pub fn occupied(&self) -> HashSet<Cell> {
        self.segments.iter().copied().collect()
    }

    /// Request a new heading for the next advance
    ///
    /// A reversal of the current heading is ignored, otherwise the snake would
    /// turn into its own neck. Later requests overwrite earlier ones.
    pub fn set_direction(&mut self, dir: Direction) {
        if dir == self.direction.opposite() {
            return;
        }
        self.pending = Some(dir);
    }

    /// Move one cell along the heading, wrapping at the grid edges
    pub fn advance(&mut self, grid: &GridWorld) -> Step {
        if let Some(next) = self.pending.take() {
            self.direction = next;
        }

        let head = grid.step(self.head(), self.direction);
        self.segments.push_front(head);

        let vacated = if self.grow_pending {
            self.grow_pending = false;
            None
        } else {
            self.segments.pop_back()
        };

        Step { head, vacated }
    }

    /// Check if the head sits on the food cell
    pub fn ate_food(&self, food: Cell) -> bool {
        self.head() == food
    }

    /// Keep the tail on the next advance (one-tick growth lag)
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// Check if the head overlaps any other segment
    pub fn self_collided(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|&c| c == head)
    }

    /// Shrink back to a single segment at the grid center
    pub fn reset(&mut self, grid: &GridWorld, direction: Direction) {
        self.segments.clear();
        self.segments.push_back(grid.center());
        self.direction = direction;
        self.pending = None;
        self.grow_pending = false;
    }
}
