use std::fmt;
use std::str::FromStr;

use error_chain::bail;

use crate::errors::*;
use crate::units::{ColumnIndex, RowIndex};

/// A zero based grid coordinate. `x` is the column, `y` the row.
/// Positions carry no bounds of their own, a grid decides whether it can address them.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    #[inline]
    pub fn from_row_column_indices(row: RowIndex, column: ColumnIndex) -> Position {
        Position::new(column.0 as i32, row.0 as i32)
    }
}

impl From<(i32, i32)> for Position {
    fn from(x_y_pair: (i32, i32)) -> Position {
        Position::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The nine named places of a rectangle, used to pick the start and end cells of a maze.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Location {
    LeftUpper,
    LeftMiddle,
    LeftLower,
    CenterUpper,
    CenterMiddle,
    CenterLower,
    RightUpper,
    RightMiddle,
    RightLower,
}

impl Location {
    pub const ALL: [Location; 9] = [Location::LeftUpper,
                                    Location::LeftMiddle,
                                    Location::LeftLower,
                                    Location::CenterUpper,
                                    Location::CenterMiddle,
                                    Location::CenterLower,
                                    Location::RightUpper,
                                    Location::RightMiddle,
                                    Location::RightLower];
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Location> {
        let location = match s.to_lowercase().as_str() {
            "left-upper" => Location::LeftUpper,
            "left-middle" => Location::LeftMiddle,
            "left-lower" => Location::LeftLower,
            "center-upper" => Location::CenterUpper,
            "center-middle" => Location::CenterMiddle,
            "center-lower" => Location::CenterLower,
            "right-upper" => Location::RightUpper,
            "right-middle" => Location::RightMiddle,
            "right-lower" => Location::RightLower,
            _ => return Err(validation(format!("unknown location '{}'", s))),
        };
        Ok(location)
    }
}

/// Width and height of a maze in cells. Neither can drop below 1.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Result<Size> {
        let mut size = Size { width: 1, height: 1 };
        size.set_width(width)?;
        size.set_height(height)?;
        Ok(size)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_width(&mut self, width: i32) -> Result<()> {
        if width < 1 {
            bail!(ErrorKind::Validation(format!("maze width must be at least 1, got {}", width)));
        }
        self.width = width;
        Ok(())
    }

    pub fn set_height(&mut self, height: i32) -> Result<()> {
        if height < 1 {
            bail!(ErrorKind::Validation(format!("maze height must be at least 1, got {}", height)));
        }
        self.height = height;
        Ok(())
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Is the position inside a rectangle of this size anchored at (0, 0)?
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    /// Map a named relative location to an absolute position within this size.
    pub fn position_of(&self, location: Location) -> Position {
        let (left, center, right) = (0, self.width / 2, self.width - 1);
        let (upper, middle, lower) = (0, self.height / 2, self.height - 1);
        match location {
            Location::LeftUpper => Position::new(left, upper),
            Location::LeftMiddle => Position::new(left, middle),
            Location::LeftLower => Position::new(left, lower),
            Location::CenterUpper => Position::new(center, upper),
            Location::CenterMiddle => Position::new(center, middle),
            Location::CenterLower => Position::new(center, lower),
            Location::RightUpper => Position::new(right, upper),
            Location::RightMiddle => Position::new(right, middle),
            Location::RightLower => Position::new(right, lower),
        }
    }
}

impl Default for Size {
    fn default() -> Size {
        Size { width: 10, height: 10 }
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Rect {
    pub origin: Position,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Position, size: Size) -> Rect {
        Rect { origin, size }
    }
}
