use std::fmt;

use nalgebra::Vector3;

use crate::coordinates::Position;
use crate::errors::*;

/// Stable index of a wall in the grid's wall arena.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct WallId(pub usize);

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "wall#{}", self.0)
    }
}

/// Where a wall stands in ground local space: the centre of the wall block and its extent
/// along each axis. `y` is up.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct WallPlacement {
    pub center: Vector3<f32>,
    pub extent: Vector3<f32>,
}

/// An edge between two cells, or between a cell and the outside of the grid.
///
/// `other_cell` is `None` exactly for walls on the grid boundary. The `has_wall` state is
/// only changed through the grid so that every transition reaches the build queue.
#[derive(Debug, Clone)]
pub struct Wall {
    id: WallId,
    main_cell: Position,
    other_cell: Option<Position>,
    has_wall: bool,
    placement: WallPlacement,
}

impl Wall {
    pub(crate) fn new(id: WallId,
                      main_cell: Position,
                      other_cell: Option<Position>,
                      placement: WallPlacement)
                      -> Wall {
        Wall {
            id,
            main_cell,
            other_cell,
            has_wall: false,
            placement,
        }
    }

    #[inline]
    pub fn id(&self) -> WallId {
        self.id
    }

    #[inline]
    pub fn main_cell(&self) -> Position {
        self.main_cell
    }

    #[inline]
    pub fn other_cell(&self) -> Option<Position> {
        self.other_cell
    }

    #[inline]
    pub fn has_wall(&self) -> bool {
        self.has_wall
    }

    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.other_cell.is_none()
    }

    #[inline]
    pub fn placement(&self) -> WallPlacement {
        self.placement
    }

    /// Both cells this wall separates, `main_cell` first.
    pub fn cells(&self) -> (Position, Option<Position>) {
        (self.main_cell, self.other_cell)
    }

    /// The cell on the other side of the wall from `cell`.
    /// `Ok(None)` when looking out across the grid boundary.
    pub fn opposite_cell(&self, cell: Position) -> Result<Option<Position>> {
        if cell == self.main_cell {
            Ok(self.other_cell)
        } else if Some(cell) == self.other_cell {
            Ok(Some(self.main_cell))
        } else {
            Err(out_of_range(format!("{} is not a cell of {}", cell, self.id)))
        }
    }

    /// Set the state, returning whether it actually changed.
    #[inline]
    pub(crate) fn set_has_wall(&mut self, has_wall: bool) -> bool {
        let changed = self.has_wall != has_wall;
        self.has_wall = has_wall;
        changed
    }
}
