pub mod grid;
pub mod spawn;

pub use grid::{Cell, Grid, BLACK, WHITE};
pub use spawn::spawn_ants;
