//! Grid module - board dimensions and toroidal coordinate arithmetic
//!
//! The grid is a `width x height` torus: stepping past an edge re-enters from
//! the opposite edge, so there are no wall collisions.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height
//! (top to bottom).

use crate::types::{Cell, Direction};

/// Fixed-size toroidal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWorld {
    width: u16,
    height: u16,
}

impl GridWorld {
    /// Create a grid; both dimensions must be non-zero (see `GameConfig::validate`)
    pub fn new(width: u16, height: u16) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Spawn cell: integer center of the grid
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Check if a cell lies on the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Neighbor of `cell` one step towards `dir`, wrapping around the edges
    #[inline]
    pub fn step(&self, cell: Cell, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell::new(
            wrap(cell.x as i32 + dx, self.width),
            wrap(cell.y as i32 + dy, self.height),
        )
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Cell::new(x, y)))
    }
}

#[inline(always)]
fn wrap(v: i32, dim: u16) -> u16 {
    v.rem_euclid(dim as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(GridWorld::new(32, 24).center(), Cell::new(16, 12));
        assert_eq!(GridWorld::new(5, 3).center(), Cell::new(2, 1));
    }

    #[test]
    fn test_step_inside() {
        let grid = GridWorld::new(32, 24);
        let c = Cell::new(5, 5);
        assert_eq!(grid.step(c, Direction::Up), Cell::new(5, 4));
        assert_eq!(grid.step(c, Direction::Down), Cell::new(5, 6));
        assert_eq!(grid.step(c, Direction::Left), Cell::new(4, 5));
        assert_eq!(grid.step(c, Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_step_wraps_horizontally() {
        let grid = GridWorld::new(32, 24);
        assert_eq!(grid.step(Cell::new(31, 7), Direction::Right), Cell::new(0, 7));
        assert_eq!(grid.step(Cell::new(0, 7), Direction::Left), Cell::new(31, 7));
    }

    #[test]
    fn test_step_wraps_vertically() {
        let grid = GridWorld::new(32, 24);
        assert_eq!(grid.step(Cell::new(3, 23), Direction::Down), Cell::new(3, 0));
        assert_eq!(grid.step(Cell::new(3, 0), Direction::Up), Cell::new(3, 23));
    }

    #[test]
    fn test_cells_cover_grid_once() {
        let grid = GridWorld::new(4, 3);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[11], Cell::new(3, 2));
        assert!(cells.iter().all(|&c| grid.contains(c)));
    }

    #[test]
    fn test_contains() {
        let grid = GridWorld::new(4, 3);
        assert!(grid.contains(Cell::new(3, 2)));
        assert!(!grid.contains(Cell::new(4, 0)));
        assert!(!grid.contains(Cell::new(0, 3)));
    }
}
