//! Food module - placement of the single food cell
//!
//! Placement is a single reservoir-sampling pass over the free cells, so it
//! always terminates. When no free cell is left the board is full, which the
//! caller treats as a win.

use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;
use thiserror::Error;

use crate::grid::GridWorld;
use crate::types::Cell;

/// No free cell remains for the food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("board is full: no free cell left for food")]
pub struct BoardFull;

/// Current food position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodState {
    position: Cell,
}

impl FoodState {
    /// Place food at a fixed cell
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Place food at a random free cell
    pub fn spawn<R: Rng + ?Sized>(
        grid: &GridWorld,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Result<Self, BoardFull> {
        let position = pick_free_cell(grid, occupied, rng)?;
        Ok(Self { position })
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a uniformly random cell outside `occupied`
    ///
    /// On `BoardFull` the position is left unchanged.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: &GridWorld,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Result<Cell, BoardFull> {
        self.position = pick_free_cell(grid, occupied, rng)?;
        Ok(self.position)
    }
}

/// Number of grid cells not in `occupied`
pub fn free_cell_count(grid: &GridWorld, occupied: &HashSet<Cell>) -> usize {
    let taken = occupied.iter().filter(|&&c| grid.contains(c)).count();
    grid.cell_count() - taken
}

fn pick_free_cell<R: Rng + ?Sized>(
    grid: &GridWorld,
    occupied: &HashSet<Cell>,
    rng: &mut R,
) -> Result<Cell, BoardFull> {
    if free_cell_count(grid, occupied) == 0 {
        return Err(BoardFull);
    }
    grid.cells()
        .filter(|c| !occupied.contains(c))
        .choose(rng)
        .ok_or(BoardFull)
}
