//! Simulation settings.
//!
//! Defaults mirror a 100×100 torus painted white on black at 60 generations
//! per second. A few values can be overridden from the environment.

use std::env;

use thiserror::Error;

use crate::rendering::Palette;

pub struct Config;

impl Config {
    pub const GRID_WIDTH: usize = 100;
    pub const GRID_HEIGHT: usize = 100;
    /// Window pixels per cell
    pub const CELL_SCALE: usize = 8;
    pub const GENERATIONS_PER_SECOND: f32 = 60.0;
    pub const RESEED_EVERY: u64 = 600;

    pub const ENV_FPS: &'static str = "LIFE_FPS";
    pub const ENV_RESEED_EVERY: &'static str = "LIFE_RESEED_EVERY";
    pub const ENV_SEED: &'static str = "LIFE_SEED";
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a number, got `{value}`")]
    NotANumber { var: &'static str, value: String },
    #[error("{var} must be between 1 and 240, got {value}")]
    FpsOutOfRange { var: &'static str, value: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub generations_per_second: f32,
    /// Stamp a random pattern every this many generations; `None` disables it
    pub reseed_every: Option<u64>,
    /// Fixed seed for the reseeder, otherwise seeded from the OS
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: Config::GRID_WIDTH,
            height: Config::GRID_HEIGHT,
            generations_per_second: Config::GENERATIONS_PER_SECOND,
            reseed_every: Some(Config::RESEED_EVERY),
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl SimConfig {
    /// Defaults with overrides from `LIFE_FPS`, `LIFE_RESEED_EVERY` (0 disables) and `LIFE_SEED`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(fps) = parse::<f32>(&lookup, Config::ENV_FPS)? {
            if !(1.0..=240.0).contains(&fps) {
                return Err(ConfigError::FpsOutOfRange { var: Config::ENV_FPS, value: fps });
            }
            config.generations_per_second = fps;
        }
        if let Some(every) = parse::<u64>(&lookup, Config::ENV_RESEED_EVERY)? {
            config.reseed_every = (every > 0).then_some(every);
        }
        if let Some(seed) = parse::<u64>(&lookup, Config::ENV_SEED)? {
            config.seed = Some(seed);
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_reseed_every(mut self, every: Option<u64>) -> Self {
        self.reseed_every = every;
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Seconds between generations
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.generations_per_second
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::NotANumber { var, value: raw }),
    }
}
