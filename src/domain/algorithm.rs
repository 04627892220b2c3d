//! Selects how a generation is evaluated.
//!
//! Both strategies produce identical grids; they only differ in how the
//! per-cell work is scheduled.

/// Grids at or above this many cells are advanced in parallel by default
pub const PARALLEL_THRESHOLD: usize = 250_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Row-major scan on the calling thread
    #[default]
    Serial,
    /// Rows evaluated on the rayon pool
    Parallel,
}

impl Algorithm {
    /// Pick a strategy for a grid with `cells` cells
    pub fn for_cells(cells: usize) -> Self {
        if cells >= PARALLEL_THRESHOLD {
            Algorithm::Parallel
        } else {
            Algorithm::Serial
        }
    }

    /// Display name for logs and the benchmark table
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }
}
