//! Maze generation algorithms.
//!
//! Every generator starts from the same reset: all walls standing and no cell visited. It then
//! breaks walls until the grid is a spanning tree of passages, a perfect maze, with the boundary
//! left closed. Which generator runs is a configuration choice, see `Algorithm`.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use petgraph::unionfind::UnionFind;
use rand::Rng;

use crate::cells::Direction;
use crate::coordinates::Position;
use crate::errors::*;
use crate::visitor::CellsVisitor;
use crate::walls::WallId;

/// A supply of uniformly distributed indices.
pub trait IndexSource {
    /// An index in `[0, upper)`. `upper` is never 0.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Draws indices from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> IndexSource for RngSource<R> {
    #[inline]
    fn next_index(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

/// Replays a fixed sequence of draws, cycling when it runs out. Each draw is reduced modulo
/// the requested bound, so any sequence fits any frontier. An empty script always draws 0.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<usize>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<usize>) -> ScriptedSource {
        ScriptedSource { draws, next: 0 }
    }
}

impl IndexSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.draws.is_empty() {
            return 0;
        }
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw % upper
    }
}

/// A maze generation algorithm over a visitor's grid.
pub trait MazeGenerator {
    /// Raise every wall, clear every visited flag and prepare to grow from the start cell.
    /// Running it twice in a row leaves the same state as running it once.
    fn init(&mut self, visitor: &mut CellsVisitor) -> Result<()>;

    /// Reset with `init` and then carve the whole maze.
    fn generate(&mut self, visitor: &mut CellsVisitor, source: &mut dyn IndexSource) -> Result<()>;
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Algorithm {
    FrontierGrowth,
    RecursiveBacktracker,
    UnionFind,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::FrontierGrowth,
                                     Algorithm::RecursiveBacktracker,
                                     Algorithm::UnionFind];

    pub fn generator(self) -> Box<dyn MazeGenerator> {
        match self {
            Algorithm::FrontierGrowth => Box::new(FrontierGrowth::new()),
            Algorithm::RecursiveBacktracker => Box::new(RecursiveBacktracker::new()),
            Algorithm::UnionFind => Box::new(UnionFindMerge::new()),
        }
    }
}

impl Default for Algorithm {
    fn default() -> Algorithm {
        Algorithm::FrontierGrowth
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Algorithm> {
        match s.to_lowercase().as_str() {
            "frontier" | "frontier-growth" => Ok(Algorithm::FrontierGrowth),
            "backtracker" | "recursive-backtracker" => Ok(Algorithm::RecursiveBacktracker),
            "union-find" | "kruskal" => Ok(Algorithm::UnionFind),
            _ => Err(validation(format!("unknown maze algorithm '{}'", s))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Algorithm::FrontierGrowth => "frontier-growth",
            Algorithm::RecursiveBacktracker => "recursive-backtracker",
            Algorithm::UnionFind => "union-find",
        };
        f.write_str(name)
    }
}

// The reset shared by every generator.
fn reset(visitor: &mut CellsVisitor) {
    visitor.build_all_walls();
    visitor.reset_all_visited_flags(false);
}

/// Randomized frontier growth.
///
/// Keeps a list of walls bordering the visited region. A wall drawn at random is broken only
/// if exactly one of its cells is visited, which joins one new cell to the region and never
/// closes a loop. The new cell's walls join the end of the frontier. Walls can sit in the
/// frontier more than once, a repeat draw after both sides are visited simply drops it.
#[derive(Debug, Clone, Default)]
pub struct FrontierGrowth {
    frontier: Vec<WallId>,
}

impl FrontierGrowth {
    pub fn new() -> FrontierGrowth {
        FrontierGrowth::default()
    }

    #[inline]
    pub fn frontier(&self) -> &[WallId] {
        &self.frontier
    }

    /// Evaluate one randomly drawn frontier wall.
    /// Returns false without drawing once the frontier is empty.
    pub fn step(&mut self, visitor: &mut CellsVisitor, source: &mut dyn IndexSource) -> Result<bool> {
        if self.frontier.is_empty() {
            return Ok(false);
        }

        let len = self.frontier.len();
        let index = source.next_index(len);
        let wall_id = *self.frontier
            .get(index)
            .ok_or_else(|| out_of_range(format!("drew frontier index {} of {}", index, len)))?;
        let (main, other) = visitor.grid().wall(wall_id)?.cells();

        if let Some(other) = other {
            let main_visited = visitor.is_visited(main)?;
            let other_visited = visitor.is_visited(other)?;
            if main_visited != other_visited {
                visitor.grid_mut().break_wall(wall_id)?;
                let newcomer = if main_visited { other } else { main };
                trace!("{} broken, {} joins the maze", wall_id, newcomer);
                let walls = visitor.visit(newcomer)?.walls();
                self.frontier.extend_from_slice(&walls);
            }
        }

        // Drop the first occurrence, the rest keep their order
        if let Some(first) = self.frontier.iter().position(|&w| w == wall_id) {
            let _ = self.frontier.remove(first);
        }
        Ok(true)
    }
}

impl MazeGenerator for FrontierGrowth {
    fn init(&mut self, visitor: &mut CellsVisitor) -> Result<()> {
        reset(visitor);
        self.frontier.clear();
        let start = visitor.start();
        let walls = visitor.visit(start)?.walls();
        self.frontier.extend_from_slice(&walls);
        Ok(())
    }

    fn generate(&mut self, visitor: &mut CellsVisitor, source: &mut dyn IndexSource) -> Result<()> {
        self.init(visitor)?;
        let mut steps = 0usize;
        while self.step(visitor, source)? {
            steps += 1;
        }
        debug!("frontier growth done after {} draws, {} walls broken",
               steps,
               visitor.grid().broken_walls_count());
        Ok(())
    }
}

/// Depth first carving with an explicit stack. From the cell on top of the stack a random
/// unvisited neighbour is joined and pushed, a cell without any is popped.
/// Makes long winding corridors with few dead ends.
#[derive(Debug, Clone, Default)]
pub struct RecursiveBacktracker {
    stack: Vec<Position>,
}

impl RecursiveBacktracker {
    pub fn new() -> RecursiveBacktracker {
        RecursiveBacktracker::default()
    }

    fn unvisited_neighbours(visitor: &CellsVisitor,
                            position: Position)
                            -> Result<Vec<(WallId, Position)>> {
        let cell = visitor.cell(position)?;
        let mut found = Vec::with_capacity(4);
        for &dir in Direction::ALL.iter() {
            let wall = visitor.grid().wall(cell.wall(dir))?;
            if let Some(next) = wall.opposite_cell(position)? {
                if !visitor.is_visited(next)? {
                    found.push((wall.id(), next));
                }
            }
        }
        Ok(found)
    }
}

impl MazeGenerator for RecursiveBacktracker {
    fn init(&mut self, visitor: &mut CellsVisitor) -> Result<()> {
        reset(visitor);
        self.stack.clear();
        let start = visitor.start();
        visitor.visit(start)?;
        self.stack.push(start);
        Ok(())
    }

    fn generate(&mut self, visitor: &mut CellsVisitor, source: &mut dyn IndexSource) -> Result<()> {
        self.init(visitor)?;
        let mut deepest = self.stack.len();

        while let Some(&current) = self.stack.last() {
            let neighbours = Self::unvisited_neighbours(visitor, current)?;
            if neighbours.is_empty() {
                let _ = self.stack.pop();
                continue;
            }

            let (wall_id, next) = neighbours[source.next_index(neighbours.len())];
            visitor.grid_mut().break_wall(wall_id)?;
            visitor.visit(next)?;
            self.stack.push(next);
            deepest = deepest.max(self.stack.len());
        }

        debug!("recursive backtracker done, deepest stack {}", deepest);
        Ok(())
    }
}

/// Randomized Kruskal. Interior walls are shuffled and each one is broken when the cells on
/// its two sides are not yet connected, tracked with a union-find over the cells.
#[derive(Debug, Clone, Default)]
pub struct UnionFindMerge;

impl UnionFindMerge {
    pub fn new() -> UnionFindMerge {
        UnionFindMerge
    }
}

impl MazeGenerator for UnionFindMerge {
    fn init(&mut self, visitor: &mut CellsVisitor) -> Result<()> {
        reset(visitor);
        let start = visitor.start();
        visitor.visit(start)?;
        Ok(())
    }

    fn generate(&mut self, visitor: &mut CellsVisitor, source: &mut dyn IndexSource) -> Result<()> {
        self.init(visitor)?;

        let mut interior: Vec<(WallId, Position, Position)> = visitor.grid()
            .iter_walls()
            .filter_map(|w| w.other_cell().map(|other| (w.id(), w.main_cell(), other)))
            .collect();

        // Fisher-Yates
        for i in (1..interior.len()).rev() {
            let j = source.next_index(i + 1);
            interior.swap(i, j);
        }

        let mut sets = UnionFind::<usize>::new(visitor.grid().cells_count().0);
        let mut merged = 0usize;
        for (wall_id, a, b) in interior {
            let a_index = visitor.grid().position_to_index(a)?;
            let b_index = visitor.grid().position_to_index(b)?;
            if sets.union(a_index, b_index) {
                visitor.grid_mut().break_wall(wall_id)?;
                visitor.visit(a)?;
                visitor.visit(b)?;
                merged += 1;
            }
        }

        debug!("union-find done, {} merges", merged);
        Ok(())
    }
}
