use crate::ant::{Ant, ColorAnt};
use crate::config::Variant;
use crate::error::Result;
use crate::world::grid::Grid;

/// Ants of one run together with the rule-specific buffers they paint
#[derive(Clone, Debug)]
pub enum Colony {
    Binary(Vec<Ant>),
    Multicolor { ants: Vec<ColorAnt>, trail: Grid },
}

impl Colony {
    /// Build the colony for `variant` from freshly spawned ants
    pub fn new(variant: Variant, ants: Vec<Ant>, height: usize, width: usize) -> Result<Self> {
        match variant {
            Variant::Binary => Ok(Colony::Binary(ants)),
            Variant::Multicolor => {
                let ants = ants
                    .into_iter()
                    .map(ColorAnt::new)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Colony::Multicolor {
                    ants,
                    trail: Grid::new(height, width)?,
                })
            }
        }
    }

    /// Move every ant once, in creation order. Later ants see earlier ants' writes.
    pub fn tick(&mut self, grid: &mut Grid) {
        match self {
            Colony::Binary(ants) => {
                for ant in ants.iter_mut() {
                    ant.move_on(grid);
                }
            }
            Colony::Multicolor { ants, trail } => {
                for ant in ants.iter_mut() {
                    ant.move_on(grid, trail);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Colony::Binary(ants) => ants.len(),
            Colony::Multicolor { ants, .. } => ants.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ants in creation order
    pub fn ants(&self) -> Box<dyn Iterator<Item = &Ant> + '_> {
        match self {
            Colony::Binary(ants) => Box::new(ants.iter()),
            Colony::Multicolor { ants, .. } => Box::new(ants.iter().map(|a| &a.ant)),
        }
    }

    pub fn trail(&self) -> Option<&Grid> {
        match self {
            Colony::Binary(_) => None,
            Colony::Multicolor { trail, .. } => Some(trail),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Colony::Binary(_) => Variant::Binary,
            Colony::Multicolor { .. } => Variant::Multicolor,
        }
    }
}
