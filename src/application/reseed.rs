use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::{Grid, PatternKind};

/// Drops a random pattern at a random spot on a fixed generation cadence
pub struct Reseeder {
    every: Option<u64>,
    rng: StdRng,
}

impl Reseeder {
    pub fn new(every: Option<u64>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            every: every.filter(|&n| n > 0),
            rng,
        }
    }

    pub fn disabled() -> Self {
        Self::new(None, Some(0))
    }

    pub fn is_due(&self, generation: u64) -> bool {
        self.every
            .is_some_and(|every| generation > 0 && generation % every == 0)
    }

    /// Stamp one randomly chosen pattern anywhere on the torus
    pub fn reseed(&mut self, grid: &mut Grid) -> (PatternKind, i64, i64) {
        let (width, height) = grid.dimensions();
        let kind = *PatternKind::ALL
            .choose(&mut self.rng)
            .unwrap_or(&PatternKind::Glider);
        let x = self.rng.random_range(0..width as i64);
        let y = self.rng.random_range(0..height as i64);

        kind.stamp(grid, x, y);
        log::debug!("reseeded {kind} at ({x}, {y})");
        (kind, x, y)
    }
}
