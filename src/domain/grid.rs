use super::Cell;

/// Grid is the fixed-size toroidal cell matrix.
/// Every coordinate is taken modulo the dimensions, so there is no edge and
/// no out-of-bounds state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead. Zero dimensions are clamped to 1.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Map any integer coordinate onto the torus
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        (
            x.rem_euclid(self.width as i64) as usize,
            y.rem_euclid(self.height as i64) as usize,
        )
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell at any coordinate, wrapped onto the torus
    pub fn cell(&self, x: i64, y: i64) -> Cell {
        let (x, y) = self.wrap(x, y);
        self.cells[self.index(x, y)]
    }

    /// Whether the cell at (x, y) is alive; coordinates wrap
    pub fn alive(&self, x: i64, y: i64) -> bool {
        self.cell(x, y).is_alive()
    }

    /// Write a cell state; coordinates wrap
    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        let (x, y) = self.wrap(x, y);
        let idx = self.index(x, y);
        self.cells[idx] = Cell::from_alive(alive);
    }

    /// Independent copy to read from while the next generation is written
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Live cells among the 8 toroidally wrapped neighbours. Always 0..=8.
    pub fn live_neighbours(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as i64, y as i64);

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| self.alive(x + dx, y + dy))
            .count() as u8
    }

    /// Build a grid of the same size by evaluating `f` for every in-range coordinate
    pub(crate) fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> Cell) -> Self {
        let mut grid = Self::new(width, height);
        let (width, height) = grid.dimensions();
        grid.cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        grid
    }

    /// Build a grid from pre-computed row-major cells
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }

    /// Positions of live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 5);
        assert_eq!(grid.dimensions(), (7, 5));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimensions_are_clamped() {
        let grid = Grid::new(0, 0);
        assert_eq!(grid.dimensions(), (1, 1));
        assert!(!grid.alive(-3, 12));
    }

    #[test]
    fn test_toroidal_periodicity() {
        let (w, h) = (7_i64, 5_i64);
        let mut grid = Grid::new(w as usize, h as usize);
        grid.set(2, 3, true);
        grid.set(6, 0, true);

        for y in 0..h {
            for x in 0..w {
                for (k, j) in [(-3, 2), (1, -1), (4, 7), (-1, -5)] {
                    assert_eq!(grid.alive(x + k * w, y + j * h), grid.alive(x, y));
                }
            }
        }
    }

    #[test]
    fn test_set_wraps_negative_coordinates() {
        let mut grid = Grid::new(10, 10);
        grid.set(-1, -1, true);
        assert!(grid.alive(9, 9));
        grid.set(19, 29, false);
        assert!(!grid.alive(9, 9));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, true);
        let mut copy = grid.snapshot();
        copy.set(1, 1, false);
        copy.set(2, 2, true);

        assert!(grid.alive(1, 1));
        assert!(!grid.alive(2, 2));
    }

    #[test]
    fn test_neighbours_wrap_across_corner() {
        let mut grid = Grid::new(10, 10);
        grid.set(9, 9, true);
        grid.set(1, 0, true);
        grid.set(0, 9, true);
        assert_eq!(grid.live_neighbours(0, 0), 3);
    }

    #[test]
    fn test_neighbours_exclude_self_and_cap_at_eight() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, true);
            }
        }
        for (x, y, _) in grid.iter_cells() {
            assert_eq!(grid.live_neighbours(x, y), 8);
        }
    }

    #[test]
    fn test_live_cells_row_major() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 0, true);
        grid.set(0, 2, true);
        grid.set(1, 1, true);
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(3, 0), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, true);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }
}
