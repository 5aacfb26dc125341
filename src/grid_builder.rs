use log::debug;

use crate::build_queue::BuildQueue;
use crate::cells::{Cell, Direction};
use crate::coordinates::{Position, Size};
use crate::errors::*;
use crate::grid::Grid;
use crate::placement::{wall_placement, GroundRegion, WallDimensions};
use crate::walls::{Wall, WallId};

/// Build the cells and walls for a maze of `size` on `ground`.
///
/// Cells are visited row major. Each cell creates its `+X` and `+Y` walls, shared with the
/// neighbour on that side when there is one. `-X` and `-Y` walls are only created on the first
/// column and row, everywhere else they are the `+X`/`+Y` wall of an earlier neighbour.
/// All walls start unwalled and nothing is announced on `build_queue` until they change.
pub fn build_grid(size: Size,
                  ground: &GroundRegion,
                  dimensions: WallDimensions,
                  build_queue: BuildQueue)
                  -> Result<Grid> {

    ground.validate()?;

    let (width, height) = (size.width(), size.height());
    let cells_count = size.area();
    let walls_count_hint = (width as usize * (height as usize + 1)) +
                           (height as usize * (width as usize + 1));

    let mut tables: Vec<[Option<WallId>; 4]> = vec![[None; 4]; cells_count];
    let mut walls: Vec<Wall> = Vec::with_capacity(walls_count_hint);
    let index = |p: Position| p.y as usize * width as usize + p.x as usize;

    for y in 0..height {
        for x in 0..width {
            let position = Position::new(x, y);

            let mut add_wall = |direction: Direction, walls: &mut Vec<Wall>| {
                let neighbour = direction.offset(position);
                let other = if size.contains(neighbour) { Some(neighbour) } else { None };
                let id = WallId(walls.len());
                let placement = wall_placement(size, position, direction, ground, dimensions);
                walls.push(Wall::new(id, position, other, placement));

                tables[index(position)][direction.index()] = Some(id);
                if let Some(other) = other {
                    tables[index(other)][direction.opposite().index()] = Some(id);
                }
            };

            if x == 0 {
                add_wall(Direction::NegativeX, &mut walls);
            }
            if y == 0 {
                add_wall(Direction::NegativeY, &mut walls);
            }
            add_wall(Direction::PositiveX, &mut walls);
            add_wall(Direction::PositiveY, &mut walls);
        }
    }

    let mut cells = Vec::with_capacity(cells_count);
    for (i, table) in tables.into_iter().enumerate() {
        let position = Position::new((i % width as usize) as i32, (i / width as usize) as i32);
        let mut cell_walls = [WallId(0); 4];
        for &direction in Direction::ALL.iter() {
            cell_walls[direction.index()] = table[direction.index()]
                .ok_or_else(|| precondition(format!("cell {} has no {} wall", position, direction)))?;
        }
        cells.push(Cell::new(position, cell_walls));
    }

    debug!("built {}x{} grid with {} walls", width, height, walls.len());
    Ok(Grid::from_parts(size, cells, walls, build_queue))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::units::{WallHeight, WallThickness, WallsCount};
    use crate::utils::fnv_hashmap;
    use nalgebra::Vector3;

    pub(crate) fn wall_dimensions() -> WallDimensions {
        WallDimensions::new(WallThickness(0.3), WallHeight(0.5)).unwrap()
    }

    /// A grid on unit sized ground, for tests across the crate.
    pub(crate) fn unit_grid(width: i32, height: i32) -> Grid {
        let size = Size::new(width, height).unwrap();
        build_grid(size, &GroundRegion::for_size(size), wall_dimensions(), BuildQueue::new())
            .unwrap()
    }

    #[test]
    fn wall_counts() {
        for &(w, h) in &[(1, 1), (2, 1), (1, 2), (3, 3), (5, 2)] {
            let g = unit_grid(w, h);
            let (w, h) = (w as usize, h as usize);
            assert_eq!(g.walls_count(), WallsCount(w * (h + 1) + h * (w + 1)));
            let boundary = g.iter_walls().filter(|wall| wall.is_boundary()).count();
            assert_eq!(boundary, 2 * (w + h));
        }
    }

    #[test]
    fn walls_are_referenced_once_per_side() {
        let g = unit_grid(4, 3);
        let mut references = fnv_hashmap::<WallId, usize>(g.walls_count().0);
        for cell in g.iter_cells() {
            for &dir in Direction::ALL.iter() {
                *references.entry(cell.wall(dir)).or_insert(0) += 1;
            }
        }
        assert_eq!(references.len(), g.walls_count().0);
        for wall in g.iter_walls() {
            let expected = if wall.is_boundary() { 1 } else { 2 };
            assert_eq!(references[&wall.id()], expected, "{:?}", wall);
        }
    }

    #[test]
    fn shared_walls_sit_on_opposite_sides() {
        let g = unit_grid(3, 3);
        for cell in g.iter_cells() {
            for &dir in Direction::ALL.iter() {
                let wall = g.wall(cell.wall(dir)).unwrap();
                match wall.opposite_cell(cell.position()).unwrap() {
                    Some(other) => {
                        assert_eq!(other, dir.offset(cell.position()));
                        assert_eq!(g.cell(other).unwrap().wall(dir.opposite()), wall.id());
                    }
                    None => assert!(!g.is_valid_position(dir.offset(cell.position()))),
                }
            }
        }
    }

    #[test]
    fn walls_start_unwalled_and_silent() {
        let g = unit_grid(3, 2);
        assert!(g.iter_walls().all(|w| !w.has_wall()));
        assert!(g.iter_cells().all(|c| !c.is_visited()));
        assert!(g.build_queue().is_empty());
    }

    #[test]
    fn placement_is_computed_for_the_creating_cell() {
        let size = Size::new(2, 2).unwrap();
        let ground = GroundRegion::for_size(size);
        let g = build_grid(size, &ground, wall_dimensions(), BuildQueue::new()).unwrap();
        for wall in g.iter_walls() {
            let main = g.cell(wall.main_cell()).unwrap();
            let dir = main.direction_of(wall.id()).unwrap();
            let expected = wall_placement(size, wall.main_cell(), dir, &ground, wall_dimensions());
            assert_eq!(wall.placement(), expected);
        }
    }

    #[test]
    fn rotated_ground_is_rejected() {
        let size = Size::new(2, 2).unwrap();
        let mut ground = GroundRegion::for_size(size);
        ground.rotation = Vector3::new(15.0, 0.0, 0.0);
        let result = build_grid(size, &ground, wall_dimensions(), BuildQueue::new());
        match *result.unwrap_err().kind() {
            ErrorKind::Validation(_) => (),
            ref other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn flat_ground_is_rejected() {
        let size = Size::new(3, 2).unwrap();
        let mut ground = GroundRegion::for_size(size);
        ground.scale.z = 0.0;
        let result = build_grid(size, &ground, wall_dimensions(), BuildQueue::new());
        match *result.unwrap_err().kind() {
            ErrorKind::Validation(_) => (),
            ref other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn grid_shares_the_given_queue() {
        let size = Size::new(1, 1).unwrap();
        let queue = BuildQueue::new();
        let g = build_grid(size, &GroundRegion::for_size(size), wall_dimensions(), queue.clone())
            .unwrap();
        assert!(g.build_queue().is_same_queue(&queue));
    }
}
