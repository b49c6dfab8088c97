use crate::direction::Direction;
use crate::error::{Result, SimError};
use crate::world::grid::{Cell, Grid, BLACK, WHITE};

/// Rotation chosen by a rule for the cell under the ant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Right,
    Left,
}

/// Position and heading of a single ant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ant {
    /// 1-based creation index
    pub id: u32,
    pub y: usize,
    pub x: usize,
    pub direction: Direction,
    pub moves: u32,
}

impl Ant {
    /// Create a new ant at `(y, x)` facing `direction`
    pub fn new(id: u32, y: usize, x: usize, direction: Direction) -> Self {
        Self {
            id,
            y,
            x,
            direction,
            moves: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.y, self.x)
    }

    #[inline]
    fn turn(&mut self, turn: Turn) {
        self.direction = match turn {
            Turn::Right => self.direction.right_rotated(),
            Turn::Left => self.direction.left_rotated(),
        };
    }

    /// Step one cell along the current heading, wrapping around the grid edges
    #[inline]
    fn advance(&mut self, grid: &Grid) {
        let (y, x) = self.direction.forward(self.y as isize, self.x as isize);
        (self.y, self.x) = grid.wrap(y, x);
        self.moves += 1;
    }

    /// Binary Langton rule.
    ///
    /// On WHITE turn clockwise and paint BLACK; on anything else turn
    /// counterclockwise and paint WHITE. Then move forward one cell.
    pub fn move_on(&mut self, grid: &mut Grid) {
        let cell = grid.get(self.y, self.x);
        if cell == WHITE {
            self.turn(Turn::Right);
            grid.set(self.y, self.x, BLACK);
        } else {
            self.turn(Turn::Left);
            grid.set(self.y, self.x, WHITE);
        }
        self.advance(grid);
    }
}

/// Ant of the multi-color rule: owns two color codes and paints a trail image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorAnt {
    pub ant: Ant,
    color1: Cell,
    color2: Cell,
}

impl ColorAnt {
    /// Wrap an ant, deriving its colors from the id: `2·id` and `2·id + 1`.
    pub fn new(ant: Ant) -> Result<Self> {
        let (color1, color2) = Self::colors_for(ant.id)?;
        Ok(Self {
            ant,
            color1,
            color2,
        })
    }

    /// Color pair owned by the ant with the given 1-based id
    pub fn colors_for(id: u32) -> Result<(Cell, Cell)> {
        let base = u64::from(id) * 2;
        let color1 = Cell::try_from(base);
        let color2 = Cell::try_from(base + 1);
        match (color1, color2) {
            (Ok(c1), Ok(c2)) if id > 0 => Ok((c1, c2)),
            _ => Err(SimError::InvalidConfig(format!(
                "ant {} has no representable color pair",
                id
            ))),
        }
    }

    #[inline]
    pub fn colors(&self) -> (Cell, Cell) {
        (self.color1, self.color2)
    }

    /// Branch taken for `cell`. Untouched cells count as `color1`.
    /// Colors owned by other ants select neither branch.
    #[inline]
    pub fn turn_for(&self, cell: Cell) -> Option<Turn> {
        if cell == self.color1 || cell == BLACK {
            Some(Turn::Right)
        } else if cell == self.color2 {
            Some(Turn::Left)
        } else {
            None
        }
    }

    /// Multi-color rule.
    ///
    /// Records the pre-move color in `trail`, flips between the two owned
    /// colors, steps forward and marks the new head in `color2`. A cell never
    /// goes back to 0 once painted.
    pub fn move_on(&mut self, grid: &mut Grid, trail: &mut Grid) {
        let (y, x) = self.ant.position();
        let cell = grid.get(y, x);
        trail.set(y, x, cell);

        match self.turn_for(cell) {
            Some(Turn::Right) => {
                self.ant.turn(Turn::Right);
                grid.set(y, x, self.color2);
            }
            Some(Turn::Left) => {
                self.ant.turn(Turn::Left);
                grid.set(y, x, self.color1);
            }
            None => {}
        }

        self.ant.advance(grid);
        trail.set(self.ant.y, self.ant.x, self.color2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(1, 3, 4, Direction::South);

        assert_eq!(ant.id, 1);
        assert_eq!(ant.position(), (3, 4));
        assert_eq!(ant.direction, Direction::South);
        assert_eq!(ant.moves, 0);
    }

    #[test]
    fn test_black_cell_turns_left_and_paints_white() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut ant = Ant::new(1, 2, 2, Direction::North);

        ant.move_on(&mut grid);

        assert_eq!(grid.get(2, 2), WHITE);
        assert_eq!(ant.direction, Direction::West);
        assert_eq!(ant.position(), (2, 1));
        assert_eq!(ant.moves, 1);
    }

    #[test]
    fn test_white_cell_turns_right_and_paints_black() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, WHITE);
        let mut ant = Ant::new(1, 2, 2, Direction::North);

        ant.move_on(&mut grid);

        assert_eq!(grid.get(2, 2), BLACK);
        assert_eq!(ant.direction, Direction::East);
        assert_eq!(ant.position(), (2, 3));
    }

    #[test]
    fn test_move_wraps_at_every_edge() {
        // black cells turn the ant left, so each heading is one right turn from the edge it crosses
        let mut grid = Grid::new(4, 6).unwrap();
        let mut ant = Ant::new(1, 0, 3, Direction::East);
        ant.move_on(&mut grid);
        assert_eq!(ant.position(), (3, 3));

        let mut ant = Ant::new(1, 2, 0, Direction::North);
        ant.move_on(&mut grid);
        assert_eq!(ant.position(), (2, 5));

        let mut ant = Ant::new(1, 3, 1, Direction::West);
        ant.move_on(&mut grid);
        assert_eq!(ant.position(), (0, 1));

        let mut ant = Ant::new(1, 1, 5, Direction::South);
        ant.move_on(&mut grid);
        assert_eq!(ant.position(), (1, 0));
    }

    #[test]
    fn test_move_changes_exactly_one_cell() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut ant = Ant::new(1, 4, 4, Direction::East);

        for _ in 0..200 {
            let before = grid.clone();
            let start = ant.position();
            ant.move_on(&mut grid);
            assert_eq!(before.diff(&grid), vec![start]);
        }
    }

    #[test]
    fn test_colors_for() {
        assert_eq!(ColorAnt::colors_for(1).unwrap(), (2, 3));
        assert_eq!(ColorAnt::colors_for(19).unwrap(), (38, 39));
        assert!(ColorAnt::colors_for(0).is_err());
        assert!(ColorAnt::colors_for(20_000).is_err());
    }

    #[test]
    fn test_turn_for_is_exclusive_over_own_domain() {
        let ant = ColorAnt::new(Ant::new(3, 0, 0, Direction::North)).unwrap();
        let (c1, c2) = ant.colors();

        assert_eq!(ant.turn_for(BLACK), Some(Turn::Right));
        assert_eq!(ant.turn_for(c1), Some(Turn::Right));
        assert_eq!(ant.turn_for(c2), Some(Turn::Left));
        // another ant's color
        assert_eq!(ant.turn_for(2), None);
    }

    #[test]
    fn test_color_ant_move_on_untouched_cell() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut trail = Grid::new(5, 5).unwrap();
        let mut ant = ColorAnt::new(Ant::new(1, 2, 2, Direction::North)).unwrap();

        ant.move_on(&mut grid, &mut trail);

        assert_eq!(grid.get(2, 2), 3);
        assert_eq!(trail.get(2, 2), 0);
        assert_eq!(ant.ant.direction, Direction::East);
        assert_eq!(ant.ant.position(), (2, 3));
        assert_eq!(trail.get(2, 3), 3);
    }

    #[test]
    fn test_color_ant_move_on_second_color() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut trail = Grid::new(5, 5).unwrap();
        grid.set(2, 2, 3);
        let mut ant = ColorAnt::new(Ant::new(1, 2, 2, Direction::North)).unwrap();

        ant.move_on(&mut grid, &mut trail);

        assert_eq!(grid.get(2, 2), 2);
        assert_eq!(trail.get(2, 2), 3);
        assert_eq!(ant.ant.direction, Direction::West);
        assert_eq!(ant.ant.position(), (2, 1));
    }

    #[test]
    fn test_color_ant_passes_over_foreign_color() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut trail = Grid::new(5, 5).unwrap();
        grid.set(2, 2, 4);
        let mut ant = ColorAnt::new(Ant::new(1, 2, 2, Direction::South)).unwrap();

        ant.move_on(&mut grid, &mut trail);

        assert_eq!(grid.get(2, 2), 4);
        assert_eq!(trail.get(2, 2), 4);
        assert_eq!(ant.ant.direction, Direction::South);
        assert_eq!(ant.ant.position(), (3, 2));
    }
}
