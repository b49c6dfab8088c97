use crate::world::grid::{Cell, Grid};
use serde::{Deserialize, Serialize};

/// Read-only view of the simulation after a tick.
///
/// Borrows from the driver, so it cannot outlive the next `step`.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub step: u32,
    pub max_steps: u32,
    pub grid: &'a Grid,
    /// Present only for the multi-color rule
    pub trail: Option<&'a Grid>,
}

impl<'a> Snapshot<'a> {
    /// Grid a renderer should draw: the trail image when present, otherwise the grid
    pub fn display_grid(&self) -> &'a Grid {
        self.trail.unwrap_or(self.grid)
    }

    /// Owned copy suitable for keeping or exporting
    pub fn to_frame(&self) -> Frame {
        Frame {
            step: self.step,
            max_steps: self.max_steps,
            height: self.grid.height(),
            width: self.grid.width(),
            cells: self.grid.as_slice().to_vec(),
            trail: self.trail.map(|t| t.as_slice().to_vec()),
        }
    }
}

/// Owned, serializable copy of a snapshot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub step: u32,
    pub max_steps: u32,
    pub height: usize,
    pub width: usize,
    /// Row-major grid cells
    pub cells: Vec<Cell>,
    /// Trail image cells; written as `null` for the binary rule so bincode stays decodable
    #[serde(default)]
    pub trail: Option<Vec<Cell>>,
}
