use std::fmt;
use std::slice;

use log::trace;
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;

use crate::build_queue::{BuildQueue, WallBuildEvent};
use crate::cells::{Cell, Direction, DirectionSmallVec, PositionSmallVec};
use crate::coordinates::{Position, Rect, Size};
use crate::errors::*;
use crate::units::{CellsCount, ColumnIndex, RowIndex, WallsCount};
use crate::walls::{Wall, WallId};

/// Undirected graph of the open passages: one node per cell in row major order, one edge per
/// broken interior wall.
pub type PassageGraph = Graph<Position, WallId, Undirected, u32>;

/// The cells of a maze and the arena of walls between them.
///
/// Cells are stored row major. Each cell refers to its four walls by `WallId`, two neighbouring
/// cells refer to the same id for their shared wall. Built by `grid_builder::build_grid`.
pub struct Grid {
    size: Size,
    cells: Vec<Cell>,
    walls: Vec<Wall>,
    build_queue: BuildQueue,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: size: {:?}, cells: {}, walls: {}, pending builds: {}",
               self.size, self.cells.len(), self.walls.len(), self.build_queue.len())
    }
}

impl Grid {
    pub(crate) fn from_parts(size: Size,
                             cells: Vec<Cell>,
                             walls: Vec<Wall>,
                             build_queue: BuildQueue)
                             -> Grid {
        Grid {
            size,
            cells,
            walls,
            build_queue,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The rectangle covered by the grid, anchored at its first cell.
    pub fn rect(&self) -> Rect {
        let origin = self.cells.first().map_or(Position::default(), |c| c.position());
        Rect::new(origin, self.size)
    }

    #[inline]
    pub fn cells_count(&self) -> CellsCount {
        CellsCount(self.cells.len())
    }

    #[inline]
    pub fn walls_count(&self) -> WallsCount {
        WallsCount(self.walls.len())
    }

    #[inline]
    pub fn build_queue(&self) -> &BuildQueue {
        &self.build_queue
    }

    #[inline]
    pub fn is_valid_position(&self, position: Position) -> bool {
        self.size.contains(position)
    }

    /// Convert a position to its row major index.
    pub fn position_to_index(&self, position: Position) -> Result<usize> {
        if self.is_valid_position(position) {
            Ok(position.y as usize * self.size.width() as usize + position.x as usize)
        } else {
            Err(out_of_range(format!("cell {} is outside a {}x{} grid",
                                     position,
                                     self.size.width(),
                                     self.size.height())))
        }
    }

    pub fn cell(&self, position: Position) -> Result<&Cell> {
        let index = self.position_to_index(position)?;
        Ok(&self.cells[index])
    }

    pub fn cell_at(&self, row: RowIndex, column: ColumnIndex) -> Result<&Cell> {
        self.cell(self.row_column_position(row, column)?)
    }

    pub fn wall(&self, id: WallId) -> Result<&Wall> {
        self.walls
            .get(id.0)
            .ok_or_else(|| out_of_range(format!("{} does not exist, the grid has {} walls", id, self.walls.len())))
    }

    pub fn wall_at(&self, position: Position, direction: Direction) -> Result<&Wall> {
        let id = self.cell(position)?.wall(direction);
        self.wall(id)
    }

    #[inline]
    pub fn iter_cells(&self) -> slice::Iter<Cell> {
        self.cells.iter()
    }

    #[inline]
    pub fn iter_walls(&self) -> slice::Iter<Wall> {
        self.walls.iter()
    }

    /// Cell positions row by row.
    pub fn iter_row(&self) -> impl Iterator<Item = Vec<Position>> + '_ {
        self.cells
            .chunks(self.size.width() as usize)
            .map(|row| row.iter().map(Cell::position).collect())
    }

    pub fn set_visited(&mut self, position: Position, visited: bool) -> Result<()> {
        let index = self.position_to_index(position)?;
        self.cells[index].set_visited(visited);
        Ok(())
    }

    pub(crate) fn set_all_visited(&mut self, visited: bool) {
        for cell in &mut self.cells {
            cell.set_visited(visited);
        }
    }

    /// Raise or remove a wall. A real state change is announced on the build queue exactly once,
    /// setting the current state again is a no-op. Returns whether the state changed.
    pub fn set_has_wall(&mut self, id: WallId, has_wall: bool) -> Result<bool> {
        let build_queue = &self.build_queue;
        let wall = self.walls
            .get_mut(id.0)
            .ok_or_else(|| out_of_range(format!("{} does not exist", id)))?;

        let changed = wall.set_has_wall(has_wall);
        if changed {
            trace!("{} now {}", id, if has_wall { "standing" } else { "broken" });
            build_queue.push(WallBuildEvent {
                wall: id,
                has_wall,
                placement: wall.placement(),
            });
        }
        Ok(changed)
    }

    #[inline]
    pub fn break_wall(&mut self, id: WallId) -> Result<bool> {
        self.set_has_wall(id, false)
    }

    #[inline]
    pub fn build_wall(&mut self, id: WallId) -> Result<bool> {
        self.set_has_wall(id, true)
    }

    pub(crate) fn set_all_walls(&mut self, has_wall: bool) {
        for index in 0..self.walls.len() {
            // Every index in the arena is valid
            let _ = self.set_has_wall(WallId(index), has_wall);
        }
    }

    /// Can a walker leave the cell at `position` through its `direction` side?
    /// Boundary walls that are broken count as passable.
    pub fn can_pass(&self, position: Position, direction: Direction) -> Result<bool> {
        Ok(!self.wall_at(position, direction)?.has_wall())
    }

    /// Sides of the cell at `position` whose wall is broken, boundary sides included.
    pub fn open_sides(&self, position: Position) -> Result<DirectionSmallVec> {
        let cell = self.cell(position)?;
        let mut open = DirectionSmallVec::new();
        for &direction in Direction::ALL.iter() {
            if !self.wall(cell.wall(direction))?.has_wall() {
                open.push(direction);
            }
        }
        Ok(open)
    }

    /// The cell across the wall in `direction`, `None` at the grid boundary.
    pub fn neighbour(&self, position: Position, direction: Direction) -> Result<Option<Position>> {
        self.wall_at(position, direction)?.opposite_cell(position)
    }

    /// Cells reachable in one step from `position` through broken walls.
    pub fn passages(&self, position: Position) -> Result<PositionSmallVec> {
        let cell = self.cell(position)?;
        let mut linked = PositionSmallVec::new();
        for wall_id in cell.walls().iter() {
            let wall = self.wall(*wall_id)?;
            if !wall.has_wall() {
                if let Some(other) = wall.opposite_cell(position)? {
                    linked.push(other);
                }
            }
        }
        Ok(linked)
    }

    pub fn broken_walls_count(&self) -> usize {
        self.walls.iter().filter(|w| !w.has_wall()).count()
    }

    pub fn passage_graph(&self) -> PassageGraph {
        let mut graph = PassageGraph::with_capacity(self.cells.len(), self.cells.len());
        for cell in &self.cells {
            let _ = graph.add_node(cell.position());
        }

        let width = self.size.width() as usize;
        let node = |p: Position| NodeIndex::new(p.y as usize * width + p.x as usize);
        for wall in self.walls.iter().filter(|w| !w.has_wall()) {
            if let Some(other) = wall.other_cell() {
                let _ = graph.add_edge(node(wall.main_cell()), node(other), wall.id());
            }
        }
        graph
    }

    /// Is there exactly one path between any two cells, with the outer boundary closed?
    pub fn is_perfect_maze(&self) -> bool {
        let boundary_closed = self.walls
            .iter()
            .filter(|w| w.is_boundary())
            .all(Wall::has_wall);
        if !boundary_closed {
            return false;
        }

        let graph = self.passage_graph();
        graph.edge_count() + 1 == graph.node_count() && connected_components(&graph) == 1 &&
        !is_cyclic_undirected(&graph)
    }

    fn row_column_position(&self, row: RowIndex, column: ColumnIndex) -> Result<Position> {
        let position = Position::from_row_column_indices(row, column);
        if row.0 < self.size.height() as usize && column.0 < self.size.width() as usize {
            Ok(position)
        } else {
            Err(out_of_range(format!("row {} column {} is outside a {}x{} grid",
                                     row.0,
                                     column.0,
                                     self.size.width(),
                                     self.size.height())))
        }
    }
}
