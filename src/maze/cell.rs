/// The four cardinal directions a cell can border a neighbor in.
///
/// `CARDINALS` fixes the scan order everywhere neighbors are
/// enumerated, so generation and solving never depend on the iteration
/// order of an associative container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction pointing back at this one across a shared wall.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A single cell of the maze: one wall flag per direction, stored as
/// "wall present", plus a `visited` marker that only generation may
/// use. Solvers keep their own visitation state per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: [bool; 4],
    pub(crate) visited: bool,
}

impl Cell {
    /// A cell with all four walls closed and no generation state.
    pub const CLOSED: Cell = Cell {
        walls: [true; 4],
        visited: false,
    };

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub(crate) fn clear_wall(&mut self, direction: Direction) {
        self.walls[direction.index()] = false;
    }
}
