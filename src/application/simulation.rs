use crate::config::SimConfig;
use crate::domain::{Algorithm, Grid, PatternKind, RuleEngine};

use super::Reseeder;

/// Patterns placed on a fresh grid, top-left corners
pub const SEED_LAYOUT: &[(PatternKind, i64, i64)] = &[
    (PatternKind::Glider, 10, 10),
    (PatternKind::Block, 30, 30),
    (PatternKind::Blinker, 50, 50),
    (PatternKind::Toad, 70, 70),
    (PatternKind::Tub, 10, 40),
    (PatternKind::Pulsar, 30, 60),
    (PatternKind::MiddleweightSpaceship, 50, 80),
];

/// Simulation owns the grid and everything needed to advance it.
/// It is passed by value through each frame instead of living in a global.
pub struct Simulation {
    pub grid: Grid,
    pub engine: RuleEngine,
    pub algorithm: Algorithm,
    pub reseeder: Reseeder,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub update_interval: f32,
}

impl Simulation {
    /// Empty grid, paused, no reseeding
    pub fn new(width: usize, height: usize) -> Self {
        let grid = Grid::new(width, height);
        Self {
            algorithm: Algorithm::for_cells(width * height),
            grid,
            engine: RuleEngine::new(),
            reseeder: Reseeder::disabled(),
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            update_interval: SimConfig::default().frame_interval(),
        }
    }

    /// Running simulation with the standard seed layout stamped in
    pub fn from_config(config: &SimConfig) -> Self {
        let mut sim = Self::new(config.width, config.height);
        sim.reseeder = Reseeder::new(config.reseed_every, config.seed);
        sim.update_interval = config.frame_interval();
        sim.is_running = true;
        sim.with_layout(SEED_LAYOUT)
    }

    /// Stamp each `(pattern, x, y)` in order
    pub fn with_layout(mut self, layout: &[(PatternKind, i64, i64)]) -> Self {
        for &(kind, x, y) in layout {
            self.place(kind, x, y);
        }
        self
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Stamp a single pattern with its top-left corner at (x, y)
    pub fn place(&mut self, kind: PatternKind, x: i64, y: i64) {
        kind.stamp(&mut self.grid, x, y);
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::info!(
            "{} at generation {}",
            if self.is_running { "resumed" } else { "paused" },
            self.generation
        );
        self
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        log::info!("cleared grid");
        self
    }

    /// Stamp a random pattern right now
    pub fn reseed(mut self) -> Self {
        let (kind, x, y) = self.reseeder.reseed(&mut self.grid);
        log::info!("placed {} at ({x}, {y})", kind.pattern());
        self
    }

    /// Advance exactly one generation, then apply a due reseed
    pub fn step(mut self) -> Self {
        self.grid = self.engine.advance_with(self.algorithm, &self.grid);
        self.generation += 1;

        if self.reseeder.is_due(self.generation) {
            self = self.reseed();
        }
        self
    }

    /// Advance at most one generation per frame once a full interval has accumulated.
    /// Leftover time carries into the next frame; a backlog beyond one interval is dropped.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.update_interval {
            self.update_timer -= self.update_interval;
            if self.update_timer >= self.update_interval {
                self.update_timer = 0.0;
            }
            self = self.step();
        }
        self
    }
}
