use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cell color code
pub type Cell = i16;

/// Untouched / black cell
pub const BLACK: Cell = 0;
/// Flipped cell of the binary rule
pub const WHITE: Cell = 1;

/// Toroidal grid of cell colors, row-major
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a zero-filled grid
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(SimError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                height, width
            )));
        }
        if isize::try_from(height).is_err() || isize::try_from(width).is_err() {
            return Err(SimError::InvalidConfig("grid dimensions too large".to_string()));
        }
        let len = height
            .checked_mul(width)
            .ok_or_else(|| SimError::InvalidConfig("grid cell count overflows".to_string()))?;
        Ok(Self {
            height,
            width,
            cells: vec![BLACK; len],
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map any signed coordinate onto the torus
    #[inline]
    pub fn wrap(&self, y: isize, x: isize) -> (usize, usize) {
        (
            y.rem_euclid(self.height as isize) as usize,
            x.rem_euclid(self.width as isize) as usize,
        )
    }

    #[inline(always)]
    fn offset(&self, y: usize, x: usize) -> usize {
        (y % self.height) * self.width + (x % self.width)
    }

    /// Read a cell; coordinates wrap
    #[inline]
    pub fn get(&self, y: usize, x: usize) -> Cell {
        self.cells[self.offset(y, x)]
    }

    /// Write a cell; coordinates wrap
    #[inline]
    pub fn set(&mut self, y: usize, x: usize, value: Cell) {
        let idx = self.offset(y, x);
        self.cells[idx] = value;
    }

    /// Raw row-major cells
    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of cells holding a non-zero color
    pub fn count_nonzero(&self) -> usize {
        self.cells.iter().filter(|&&c| c != BLACK).count()
    }

    /// Count of cells per color value
    pub fn histogram(&self) -> BTreeMap<Cell, usize> {
        let mut counts = BTreeMap::new();
        for &c in &self.cells {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    /// Positions whose value differs from `other`. Both grids must share dimensions.
    pub fn diff(&self, other: &Grid) -> Vec<(usize, usize)> {
        debug_assert_eq!((self.height, self.width), (other.height, other.width));
        self.cells
            .iter()
            .zip(&other.cells)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }
}
