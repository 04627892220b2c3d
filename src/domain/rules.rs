use super::{Algorithm, Cell, Grid};
use rayon::prelude::*;

/// RuleEngine computes the next generation under B3/S23.
///
/// Every advance reads only from the grid it is given and writes into a
/// freshly allocated one, so no cell ever sees a neighbour's update from the
/// same pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub const fn new() -> Self {
        Self
    }

    pub const fn notation(&self) -> &'static str {
        "B3/S23"
    }

    /// Next state of the cell at (x, y) in `grid`
    pub fn next_cell(&self, grid: &Grid, x: usize, y: usize) -> Cell {
        let current = grid.cell(x as i64, y as i64);
        current.evolve(grid.live_neighbours(x, y))
    }

    /// Serial evolution - returns a new grid
    pub fn advance(&self, grid: &Grid) -> Grid {
        let (width, height) = grid.dimensions();
        Grid::from_fn(width, height, |x, y| self.next_cell(grid, x, y))
    }

    /// Parallel evolution using rayon, one task per row
    pub fn advance_parallel(&self, grid: &Grid) -> Grid {
        let (width, height) = grid.dimensions();
        let cells: Vec<Cell> = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| (0..width).map(move |x| self.next_cell(grid, x, y)))
            .collect();

        Grid::from_cells(width, height, cells)
    }

    pub fn advance_with(&self, algorithm: Algorithm, grid: &Grid) -> Grid {
        match algorithm {
            Algorithm::Serial => self.advance(grid),
            Algorithm::Parallel => self.advance_parallel(grid),
        }
    }
}
