/// Heading of an ant on the grid.
///
/// Discriminants fix the order used when a direction is drawn from the RNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    West = 2,
    South = 3,
}

impl Direction {
    /// All directions in draw order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::West,
        Direction::South,
    ];

    /// Direction for a draw in `0..4`; values wrap
    #[inline]
    pub const fn from_index(idx: u8) -> Self {
        Self::ALL[(idx % 4) as usize]
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Turn 90° clockwise
    #[inline]
    pub const fn right_rotated(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Turn 90° counterclockwise
    #[inline]
    pub const fn left_rotated(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// One step from `(y, x)`. Rows grow southwards. No wraparound is applied.
    #[inline]
    pub const fn forward(self, y: isize, x: isize) -> (isize, isize) {
        match self {
            Direction::North => (y - 1, x),
            Direction::East => (y, x + 1),
            Direction::South => (y + 1, x),
            Direction::West => (y, x - 1),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::West => "west",
            Direction::South => "south",
        }
    }
}
