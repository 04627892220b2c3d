mod reseed;
mod simulation;

pub use reseed::Reseeder;
pub use simulation::{SEED_LAYOUT, Simulation};
