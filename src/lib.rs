// Domain layer - grid, rule and pattern library
pub mod domain;

// Application layer - owns and advances the simulation
pub mod application;

pub mod config;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, Pattern, PatternKind, RuleEngine, presets};
pub use application::{Reseeder, Simulation};
pub use config::{Config, ConfigError, SimConfig};
pub use rendering::{DisplaySink, Palette, PixelBuffer, Renderer};
