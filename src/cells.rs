use std::fmt;

use smallvec::SmallVec;

use crate::coordinates::Position;
use crate::walls::WallId;

pub type DirectionSmallVec = SmallVec<[Direction; 4]>;
pub type PositionSmallVec = SmallVec<[Position; 4]>;

/// One of the four sides of a square cell.
/// Row indices grow along `+Y`, column indices along `+X`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    PositiveX,
    PositiveY,
    NegativeX,
    NegativeY,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::PositiveX,
                                     Direction::PositiveY,
                                     Direction::NegativeX,
                                     Direction::NegativeY];

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::PositiveX => Direction::NegativeX,
            Direction::PositiveY => Direction::NegativeY,
            Direction::NegativeX => Direction::PositiveX,
            Direction::NegativeY => Direction::PositiveY,
        }
    }

    /// Slot of this direction in a cell's wall table.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::PositiveX => 0,
            Direction::PositiveY => 1,
            Direction::NegativeX => 2,
            Direction::NegativeY => 3,
        }
    }

    /// Is the wall on this side thin along the X axis?
    #[inline]
    pub fn is_along_x(self) -> bool {
        match self {
            Direction::PositiveX | Direction::NegativeX => true,
            Direction::PositiveY | Direction::NegativeY => false,
        }
    }

    /// The coordinate one cell away in this direction. May lie outside any grid.
    #[inline]
    pub fn offset(self, position: Position) -> Position {
        let Position { x, y } = position;
        match self {
            Direction::PositiveX => Position::new(x + 1, y),
            Direction::PositiveY => Position::new(x, y + 1),
            Direction::NegativeX => Position::new(x - 1, y),
            Direction::NegativeY => Position::new(x, y - 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match *self {
            Direction::PositiveX => "+X",
            Direction::PositiveY => "+Y",
            Direction::NegativeX => "-X",
            Direction::NegativeY => "-Y",
        };
        f.write_str(text)
    }
}

/// A square cell of the maze. The walls are ids into the grid's wall arena, two
/// neighbouring cells hold the same id for the wall they share.
#[derive(Debug, Clone)]
pub struct Cell {
    position: Position,
    visited: bool,
    walls: [WallId; 4],
}

impl Cell {
    pub(crate) fn new(position: Position, walls: [WallId; 4]) -> Cell {
        Cell {
            position,
            visited: false,
            walls,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    #[inline]
    pub fn wall(&self, direction: Direction) -> WallId {
        self.walls[direction.index()]
    }

    /// All four walls in `Direction::ALL` order.
    #[inline]
    pub fn walls(&self) -> [WallId; 4] {
        self.walls
    }

    /// The direction under which this cell holds `wall`, if it borders it at all.
    pub fn direction_of(&self, wall: WallId) -> Option<Direction> {
        Direction::ALL.iter().cloned().find(|dir| self.wall(*dir) == wall)
    }
}
