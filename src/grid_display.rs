use std::fmt;

use crate::cells::{Direction, PositionSmallVec};
use crate::coordinates::Position;
use crate::grid::Grid;
use crate::pathing::Distances;
use crate::utils::FnvHashSet;

const CORNER: &str = "+";
const WALL_X: &str = "|";
const WALL_Y: &str = "---";
const OPEN_X: &str = " ";
const OPEN_Y: &str = "   ";
const EMPTY_BODY: &str = "   ";

/// Fills the inside of a cell when a grid is drawn as text. Bodies are three characters wide.
pub trait GridDisplay {
    fn render_cell_body(&self, position: Position) -> String;
}

impl GridDisplay for Distances {
    fn render_cell_body(&self, position: Position) -> String {
        if let Some(d) = self.distance_to(position) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from(EMPTY_BODY)
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path: FnvHashSet<Position>,
}

impl PathDisplay {
    pub fn new(path: &[Position]) -> Self {
        PathDisplay { on_path: path.iter().cloned().collect() }
    }
}

impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, position: Position) -> String {
        if self.on_path.contains(&position) {
            String::from(" . ")
        } else {
            String::from(EMPTY_BODY)
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    starts: PositionSmallVec,
    ends: PositionSmallVec,
}

impl StartEndPointsDisplay {
    pub fn new(starts: PositionSmallVec, ends: PositionSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay { starts, ends }
    }
}

impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, position: Position) -> String {
        if self.starts.contains(&position) {
            String::from(" S ")
        } else if self.ends.contains(&position) {
            String::from(" E ")
        } else {
            String::from(EMPTY_BODY)
        }
    }
}

/// A grid drawn as text with the cell bodies filled by an optional `GridDisplay`.
/// Every wall is drawn from its own state, so broken boundary walls show as gaps.
pub struct GridText<'a> {
    grid: &'a Grid,
    display: Option<&'a dyn GridDisplay>,
}

impl<'a> GridText<'a> {
    pub fn new(grid: &'a Grid, display: Option<&'a dyn GridDisplay>) -> GridText<'a> {
        GridText { grid, display }
    }

    fn is_standing(&self, position: Position, direction: Direction) -> bool {
        self.grid.open_sides(position).map_or(true, |open| !open.contains(&direction))
    }

    fn horizontal_line(&self, row: &[Position], direction: Direction) -> String {
        let mut line = String::from(CORNER);
        for &position in row {
            line.push_str(if self.is_standing(position, direction) { WALL_Y } else { OPEN_Y });
            line.push_str(CORNER);
        }
        line
    }
}

impl<'a> fmt::Display for GridText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self.grid.iter_row().collect::<Vec<_>>();

        // The upper boundary, every later row draws only its lower walls
        if let Some(first_row) = rows.first() {
            writeln!(f, "{}", self.horizontal_line(first_row, Direction::NegativeY))?;
        }

        for row in &rows {
            let mut middle = String::new();
            if let Some(&first) = row.first() {
                middle.push_str(if self.is_standing(first, Direction::NegativeX) { WALL_X } else { OPEN_X });
            }
            for &position in row {
                match self.display {
                    Some(display) => middle.push_str(&display.render_cell_body(position)),
                    None => middle.push_str(EMPTY_BODY),
                }
                middle.push_str(if self.is_standing(position, Direction::PositiveX) { WALL_X } else { OPEN_X });
            }
            writeln!(f, "{}", middle)?;
            writeln!(f, "{}", self.horizontal_line(row, Direction::PositiveY))?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", GridText::new(self, None))
    }
}
