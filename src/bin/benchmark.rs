//! Compares serial and parallel generation advance across grid sizes

use std::time::Instant;

use toroidal_life::{Algorithm, Config, Grid, PatternKind, RuleEngine};

/// Tile the grid with guns and pulsars so every size has steady activity
fn seeded_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size);
    let step = 40;
    for y in (0..size).step_by(step) {
        for x in (0..size).step_by(step) {
            let kind = if (x / step + y / step) % 2 == 0 {
                PatternKind::GosperGliderGun
            } else {
                PatternKind::Pulsar
            };
            kind.stamp(&mut grid, x as i64, y as i64);
        }
    }
    grid
}

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let engine = RuleEngine::new();
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = engine.advance_with(algorithm, &grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();
    println!("=== {} advance benchmark ===\n", RuleEngine::new().notation());

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        log::debug!("benchmarking {size}x{size}");
        let serial_ms = benchmark(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let default = Algorithm::for_cells(Config::GRID_WIDTH * Config::GRID_HEIGHT);
    println!(
        "\nDefault for {}x{}: {}",
        Config::GRID_WIDTH,
        Config::GRID_HEIGHT,
        default.name()
    );
}
