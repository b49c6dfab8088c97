pub mod colony;
pub mod engine;

pub use colony::Colony;
pub use engine::{Phase, SimulationEngine, Tick};
