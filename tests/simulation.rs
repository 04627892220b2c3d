use std::collections::HashSet;

use toroidal_life::{
    DisplaySink, Grid, Palette, PatternKind, PixelBuffer, Renderer, RuleEngine, SimConfig,
    Simulation,
};

fn live_set(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.live_cells().collect()
}

#[derive(Default)]
struct CountingSink {
    frames: usize,
    last_live_pixels: usize,
}

impl DisplaySink for CountingSink {
    fn present(&mut self, frame: &PixelBuffer) {
        self.frames += 1;
        self.last_live_pixels = frame
            .as_bytes()
            .chunks_exact(4)
            .filter(|p| *p == Palette::default().alive)
            .count();
    }
}

#[test]
fn glider_crosses_the_corner_of_a_small_torus() {
    let mut grid = Grid::new(10, 10);
    PatternKind::Glider.stamp(&mut grid, 0, 0);
    let start = live_set(&grid);

    let engine = RuleEngine::new();
    let after = (0..4).fold(grid, |g, _| engine.advance(&g));

    let expected: HashSet<_> = start.iter().map(|&(x, y)| ((x + 1) % 10, (y + 1) % 10)).collect();
    assert_eq!(live_set(&after), expected);
}

#[test]
fn glider_returns_home_after_forty_generations() {
    let mut grid = Grid::new(10, 10);
    PatternKind::Glider.stamp(&mut grid, 8, 8);

    let engine = RuleEngine::new();
    let after = (0..40).fold(grid.snapshot(), |g, _| engine.advance(&g));
    assert_eq!(after, grid);
}

#[test]
fn every_generation_is_presented() {
    let config = SimConfig::default().with_seed(9).with_reseed_every(None);
    let mut sim = Simulation::from_config(&config).with_running(false);
    let mut renderer = Renderer::new(config.width, config.height, config.palette);
    let mut sink = CountingSink::default();

    for _ in 0..5 {
        renderer.render(&sim.grid, &mut sink);
        assert_eq!(sink.last_live_pixels, sim.grid.population());
        sim = sim.step();
    }
    assert_eq!(sink.frames, 5);
    assert_eq!(sim.generation, 5);
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = SimConfig::default().with_seed(1234).with_reseed_every(Some(7));
    let run = || (0..50).fold(Simulation::from_config(&config), |s, _| s.step());

    assert_eq!(run().grid, run().grid);
}

#[test]
fn named_lookup_drives_placement() {
    let mut grid = Grid::new(20, 20);
    let kind: PatternKind = "beacon".parse().unwrap();
    kind.stamp(&mut grid, 19, 19);

    assert!(grid.alive(19, 19));
    assert!(grid.alive(0, 19));
    assert!(grid.alive(19, 0));
    assert!(!grid.alive(0, 0));
    assert!(grid.alive(2, 2));
    assert_eq!(grid.population(), 6);
}
