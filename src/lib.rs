//! # Langton's Ants
//!
//! Several ants walking a shared toroidal grid under Langton's rule, or under
//! a multi-color variant where every ant owns its own pair of colors.
//!
//! The library holds the simulation core: grid, ants, the seeded initial
//! placement and the step driver. Frames leave the core as read-only
//! snapshots; rendering and export are thin layers on top.

pub mod ant;
pub mod cli;
pub mod config;
pub mod direction;
pub mod error;
pub mod export;
pub mod render;
pub mod simulation;
pub mod snapshot;
pub mod world;

pub use ant::{Ant, ColorAnt, Turn};
pub use cli::Args;
pub use config::{SimulationConfig, Variant};
pub use direction::Direction;
pub use error::{Result, SimError};
pub use simulation::{Phase, SimulationEngine, Tick};
pub use export::{FrameFormat, FrameWriter};
pub use snapshot::{Frame, Snapshot};
pub use world::{Cell, Grid};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, Direction, Frame, FrameWriter, Phase, Result, SimError, SimulationConfig,
        SimulationEngine, Snapshot, Tick, Variant,
    };
}
