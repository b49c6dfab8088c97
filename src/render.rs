use crate::snapshot::Snapshot;
use crate::world::grid::{Cell, Grid, BLACK};
use colored::{Color, Colorize};
use std::fmt::Write;

const PALETTE: [Color; 10] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightBlue,
    Color::BrightMagenta,
];

const FILLED: char = '█';
const EMPTY: char = ' ';

/// Draws snapshots as down-sampled text frames
#[derive(Clone, Copy, Debug)]
pub struct TerminalRenderer {
    max_cols: usize,
    color: bool,
}

impl TerminalRenderer {
    pub fn new(max_cols: usize, color: bool) -> Self {
        Self {
            max_cols: max_cols.max(1),
            color,
        }
    }

    /// Grid cells folded into each printed character, per axis
    pub fn block_size(&self, grid: &Grid) -> usize {
        grid.width().div_ceil(self.max_cols)
    }

    /// Render the display grid of `snapshot` followed by a step caption
    pub fn render(&self, snapshot: &Snapshot<'_>) -> String {
        let grid = snapshot.display_grid();
        let block = self.block_size(grid);
        let rows = grid.height().div_ceil(block);
        let cols = grid.width().div_ceil(block);
        let mut out = String::with_capacity((cols + 1) * (rows + 1));

        for by in 0..rows {
            for bx in 0..cols {
                let value = block_value(grid, by * block, bx * block, block);
                self.push_cell(&mut out, value, snapshot.trail.is_some());
            }
            out.push('\n');
        }

        let caption = format!("step: {} / {}", snapshot.step, snapshot.max_steps);
        if self.color {
            let _ = writeln!(out, "{}", caption.dimmed());
        } else {
            let _ = writeln!(out, "{}", caption);
        }
        out
    }

    fn push_cell(&self, out: &mut String, value: Cell, multicolor: bool) {
        if value == BLACK {
            out.push(EMPTY);
            return;
        }
        if !self.color {
            out.push(if multicolor { glyph_for(value) } else { FILLED });
            return;
        }
        let color = if multicolor {
            PALETTE[(value as usize / 2) % PALETTE.len()]
        } else {
            Color::White
        };
        let _ = write!(out, "{}", FILLED.to_string().color(color));
    }
}

/// Largest color in the block starting at `(y0, x0)`, clipped to the grid
fn block_value(grid: &Grid, y0: usize, x0: usize, block: usize) -> Cell {
    let mut best = BLACK;
    for y in y0..(y0 + block).min(grid.height()) {
        for x in x0..(x0 + block).min(grid.width()) {
            best = best.max(grid.get(y, x));
        }
    }
    best
}

/// Plain-text stand-in for a color: one letter per ant
fn glyph_for(value: Cell) -> char {
    let ant = (value as u32 / 2).saturating_sub(1);
    char::from_u32('a' as u32 + ant % 26).unwrap_or(FILLED)
}
