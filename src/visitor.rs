//! Navigation over a built grid: start and end cells, visiting, and wall editing by position.

use log::debug;

use crate::cells::{Cell, Direction};
use crate::coordinates::{Location, Position};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{ColumnIndex, RowIndex};

/// Owns a grid and remembers which of its cells are the start and the end of the maze.
///
/// Reading a cell through `visit` marks it visited: the generators grow the maze by visiting
/// cells, and the point edits (`break_walls`, `build_walls`) visit the cell they touch. Use
/// `cell` for a read without that side effect.
#[derive(Debug)]
pub struct CellsVisitor {
    grid: Grid,
    start: Position,
    end: Position,
}

impl CellsVisitor {
    /// Wrap `grid`, with the start in the left upper corner and the end in the right lower one.
    pub fn new(grid: Grid) -> CellsVisitor {
        let size = grid.size();
        CellsVisitor {
            grid,
            start: size.position_of(Location::LeftUpper),
            end: size.position_of(Location::RightLower),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    pub fn start_cell(&self) -> Result<&Cell> {
        self.grid.cell(self.start)
    }

    pub fn end_cell(&self) -> Result<&Cell> {
        self.grid.cell(self.end)
    }

    pub fn set_start_by_location(&mut self, location: Location) {
        self.start = self.grid.size().position_of(location);
    }

    pub fn set_end_by_location(&mut self, location: Location) {
        self.end = self.grid.size().position_of(location);
    }

    pub fn set_start(&mut self, position: Position) -> Result<()> {
        self.grid.cell(position)?;
        self.start = position;
        Ok(())
    }

    pub fn set_end(&mut self, position: Position) -> Result<()> {
        self.grid.cell(position)?;
        self.end = position;
        Ok(())
    }

    /// Read a cell without visiting it.
    #[inline]
    pub fn cell(&self, position: Position) -> Result<&Cell> {
        self.grid.cell(position)
    }

    /// Read a cell and mark it visited.
    pub fn visit(&mut self, position: Position) -> Result<&Cell> {
        self.grid.set_visited(position, true)?;
        self.grid.cell(position)
    }

    pub fn visit_at(&mut self, row: RowIndex, column: ColumnIndex) -> Result<&Cell> {
        let position = self.grid.cell_at(row, column)?.position();
        self.visit(position)
    }

    #[inline]
    pub fn mark_visited(&mut self, position: Position) -> Result<()> {
        self.grid.set_visited(position, true)
    }

    pub fn is_visited(&self, position: Position) -> Result<bool> {
        Ok(self.grid.cell(position)?.is_visited())
    }

    pub fn reset_all_visited_flags(&mut self, visited: bool) {
        self.grid.set_all_visited(visited);
    }

    pub fn break_all_walls(&mut self) {
        debug!("breaking all walls");
        self.grid.set_all_walls(false);
    }

    pub fn build_all_walls(&mut self) {
        debug!("building all walls");
        self.grid.set_all_walls(true);
    }

    /// Break the walls on the given sides of the cell at `position`, visiting it.
    pub fn break_walls(&mut self, position: Position, directions: &[Direction]) -> Result<()> {
        self.set_walls(position, directions, false)
    }

    /// Raise the walls on the given sides of the cell at `position`, visiting it.
    pub fn build_walls(&mut self, position: Position, directions: &[Direction]) -> Result<()> {
        self.set_walls(position, directions, true)
    }

    fn set_walls(&mut self, position: Position, directions: &[Direction], has_wall: bool) -> Result<()> {
        let cell = self.visit(position)?;
        let ids = directions.iter().map(|dir| cell.wall(*dir)).collect::<Vec<_>>();
        for id in ids {
            self.grid.set_has_wall(id, has_wall)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_builder::tests::unit_grid;

    fn visitor(w: i32, h: i32) -> CellsVisitor {
        CellsVisitor::new(unit_grid(w, h))
    }

    fn visited_count(v: &CellsVisitor) -> usize {
        v.grid().iter_cells().filter(|c| c.is_visited()).count()
    }

    #[test]
    fn default_start_and_end() {
        let v = visitor(4, 3);
        assert_eq!(v.start(), Position::new(0, 0));
        assert_eq!(v.end(), Position::new(3, 2));
        assert_eq!(v.start_cell().unwrap().position(), Position::new(0, 0));
        assert_eq!(v.end_cell().unwrap().position(), Position::new(3, 2));
    }

    #[test]
    fn selecting_start_and_end_does_not_visit() {
        let mut v = visitor(5, 5);
        for &location in Location::ALL.iter() {
            v.set_start_by_location(location);
            v.set_end_by_location(location);
            assert_eq!(v.start_cell().unwrap().position(), v.grid().size().position_of(location));
        }
        v.set_start_by_location(Location::CenterMiddle);
        assert_eq!(v.start(), Position::new(2, 2));
        assert_eq!(visited_count(&v), 0);
    }

    #[test]
    fn explicit_start_must_be_on_the_grid() {
        let mut v = visitor(2, 2);
        v.set_start(Position::new(1, 0)).unwrap();
        assert_eq!(v.start(), Position::new(1, 0));
        assert!(v.set_end(Position::new(2, 2)).is_err());
        assert_eq!(v.end(), Position::new(1, 1));
    }

    #[test]
    fn visiting_marks_the_cell() {
        let mut v = visitor(3, 3);
        let p = Position::new(2, 1);
        assert!(!v.cell(p).unwrap().is_visited());
        assert!(v.visit(p).unwrap().is_visited());
        assert!(v.is_visited(p).unwrap());

        let cell = v.visit_at(RowIndex(2), ColumnIndex(0)).unwrap();
        assert_eq!(cell.position(), Position::new(0, 2));
        assert_eq!(visited_count(&v), 2);

        assert!(v.visit(Position::new(3, 0)).is_err());
        assert!(v.visit_at(RowIndex(3), ColumnIndex(0)).is_err());
        assert_eq!(visited_count(&v), 2);
    }

    #[test]
    fn reset_visited_flags() {
        let mut v = visitor(3, 2);
        v.mark_visited(Position::new(1, 1)).unwrap();
        v.reset_all_visited_flags(true);
        assert_eq!(visited_count(&v), 6);
        v.reset_all_visited_flags(false);
        assert_eq!(visited_count(&v), 0);
    }

    #[test]
    fn bulk_walls() {
        let mut v = visitor(3, 3);
        v.build_all_walls();
        assert!(v.grid().iter_walls().all(|w| w.has_wall()));
        let queue = v.grid().build_queue().clone();
        assert_eq!(queue.drain().len(), v.grid().walls_count().0);

        // already standing, nothing more to announce
        v.build_all_walls();
        assert!(queue.is_empty());

        v.break_all_walls();
        assert!(v.grid().iter_walls().all(|w| !w.has_wall()));
        assert_eq!(queue.len(), v.grid().walls_count().0);
    }

    #[test]
    fn point_wall_edits_visit_the_cell() {
        let mut v = visitor(2, 2);
        v.build_all_walls();
        let p = Position::new(0, 0);
        v.break_walls(p, &[Direction::PositiveX, Direction::PositiveY]).unwrap();

        assert!(v.is_visited(p).unwrap());
        assert!(v.grid().can_pass(p, Direction::PositiveX).unwrap());
        assert!(v.grid().can_pass(Position::new(1, 0), Direction::NegativeX).unwrap());
        assert!(v.grid().can_pass(Position::new(0, 1), Direction::NegativeY).unwrap());
        assert!(!v.grid().can_pass(p, Direction::NegativeX).unwrap());
        // the neighbours were not visited by the edit
        assert!(!v.is_visited(Position::new(1, 0)).unwrap());

        v.build_walls(p, &[Direction::PositiveX]).unwrap();
        assert!(!v.grid().can_pass(p, Direction::PositiveX).unwrap());
    }

    #[test]
    fn point_wall_edit_out_of_range_changes_nothing() {
        let mut v = visitor(2, 2);
        v.build_all_walls();
        let queue = v.grid().build_queue().clone();
        queue.drain();

        let err = v.break_walls(Position::new(0, 5), &[Direction::PositiveX]).unwrap_err();
        match *err.kind() {
            ErrorKind::OutOfRange(_) => (),
            ref other => panic!("expected out of range, got {:?}", other),
        }
        assert!(queue.is_empty());
        assert_eq!(visited_count(&v), 0);
    }
}
