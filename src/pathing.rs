//! Walking a maze through its broken walls.

use itertools::Itertools;
use smallvec::SmallVec;

use crate::coordinates::Position;
use crate::errors::*;
use crate::grid::Grid;
use crate::utils::{self, FnvHashMap};

pub type FurthestPoints = SmallVec<[Position; 8]>;

/// Steps from a start cell to every cell reachable from it through open passages.
#[derive(Debug, Clone)]
pub struct Distances {
    start: Position,
    distances: FnvHashMap<Position, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill outwards from `start`.
    pub fn new(grid: &Grid, start: Position) -> Result<Distances> {
        grid.cell(start)?;

        let mut max_distance = 0;
        let mut distances = utils::fnv_hashmap(grid.cells_count().0);
        distances.insert(start, 0);

        // Unweighted, so the first distance a cell is given is its shortest one and the map
        // doubles as the visited set.
        let mut frontier = vec![start];
        while !frontier.is_empty() {
            let mut next_frontier = vec![];
            for position in &frontier {
                let distance = distances[position];
                max_distance = max_distance.max(distance);

                for linked in grid.passages(*position)? {
                    if !distances.contains_key(&linked) {
                        distances.insert(linked, distance + 1);
                        next_frontier.push(linked);
                    }
                }
            }
            frontier = next_frontier;
        }

        Ok(Distances {
            start,
            distances,
            max_distance,
        })
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// `None` for cells the start cannot reach or that are not on the grid.
    #[inline]
    pub fn distance_to(&self, position: Position) -> Option<u32> {
        self.distances.get(&position).cloned()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// All cells at the maximum distance, sorted so repeated runs agree.
    pub fn furthest_points(&self) -> FurthestPoints {
        self.distances
            .iter()
            .filter(|&(_, d)| *d == self.max_distance)
            .map(|(p, _)| *p)
            .sorted()
            .collect()
    }
}

/// The cells from the start of `distances` to `end`, both included.
/// `None` when `end` is unreachable or `distances` does not describe `grid`.
pub fn shortest_path(grid: &Grid, distances: &Distances, end: Position) -> Option<Vec<Position>> {
    let mut current_distance = distances.distance_to(end)?;
    let mut current = end;
    let mut path = vec![end];

    while current != distances.start() {
        let closest = grid.passages(current)
            .ok()?
            .into_iter()
            .filter_map(|p| distances.distance_to(p).map(|d| (p, d)))
            .min_by_key(|&(_, d)| d);

        match closest {
            Some((closer, closer_distance)) if closer_distance < current_distance => {
                current = closer;
                current_distance = closer_distance;
                path.push(current);
            }
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The longest path in a perfect maze: from the cell furthest from an arbitrary cell to the
/// cell furthest from that one. On a maze with loops this is just some long path.
pub fn longest_path(grid: &Grid) -> Result<Vec<Position>> {
    let arbitrary = Distances::new(grid, Position::default())?;
    let from = arbitrary.furthest_points()[0];
    let distances = Distances::new(grid, from)?;
    let to = distances.furthest_points()[0];
    shortest_path(grid, &distances, to)
        .ok_or_else(|| precondition(format!("no path between {} and {}", from, to)))
}
