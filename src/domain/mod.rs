mod cell;
mod grid;
mod rules;
mod patterns;
mod algorithm;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::RuleEngine;
pub use patterns::{Pattern, PatternKind, UnknownPattern, presets};
pub use algorithm::{Algorithm, PARALLEL_THRESHOLD};
