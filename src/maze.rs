use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::build_queue::BuildQueue;
use crate::environment::{MazeEnvironment, MazeSettings};
use crate::errors::*;
use crate::generators::{IndexSource, MazeGenerator, RngSource};
use crate::grid::Grid;
use crate::grid_builder::build_grid;
use crate::placement::GroundRegion;
use crate::visitor::CellsVisitor;

/// A grid built for an environment, with its start and end cells chosen and a generator ready.
pub struct Maze {
    settings: MazeSettings,
    ground: GroundRegion,
    visitor: CellsVisitor,
    generator: Box<dyn MazeGenerator>,
}

impl Maze {
    /// Ask `environment` for its settings, ground and queue and build the walled grid on them.
    /// No walls stand and no events are queued until `generate` runs.
    pub fn new<E: MazeEnvironment + ?Sized>(environment: &mut E) -> Result<Maze> {
        let settings = environment.settings().clone();
        let ground = environment.build_ground();
        let grid = build_grid(settings.size,
                              &ground,
                              settings.wall_dimensions()?,
                              environment.build_queue())?;

        let mut visitor = CellsVisitor::new(grid);
        visitor.set_start_by_location(settings.start);
        visitor.set_end_by_location(settings.end);
        if let Some(position) = settings.start_position {
            visitor.set_start(position)?;
        }
        if let Some(position) = settings.end_position {
            visitor.set_end(position)?;
        }

        Ok(Maze {
            generator: settings.algorithm.generator(),
            settings,
            ground,
            visitor,
        })
    }

    /// Reset the grid and carve a new maze with indices drawn from `source`.
    pub fn generate(&mut self, source: &mut dyn IndexSource) -> Result<()> {
        self.generator.generate(&mut self.visitor, source)?;
        info!("generated {}x{} maze with {}, {} walls broken",
              self.settings.size.width(),
              self.settings.size.height(),
              self.settings.algorithm,
              self.visitor.grid().broken_walls_count());
        Ok(())
    }

    /// `generate` with a `SmallRng` seeded from the settings, or from entropy without a seed.
    pub fn generate_seeded(&mut self) -> Result<()> {
        let rng = match self.settings.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.generate(&mut RngSource(rng))
    }

    #[inline]
    pub fn settings(&self) -> &MazeSettings {
        &self.settings
    }

    #[inline]
    pub fn ground(&self) -> &GroundRegion {
        &self.ground
    }

    #[inline]
    pub fn visitor(&self) -> &CellsVisitor {
        &self.visitor
    }

    #[inline]
    pub fn visitor_mut(&mut self) -> &mut CellsVisitor {
        &mut self.visitor
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        self.visitor.grid()
    }

    #[inline]
    pub fn build_queue(&self) -> &BuildQueue {
        self.visitor.grid().build_queue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::{Location, Position, Size};
    use crate::environment::MazeSettingsBuilder;
    use crate::generators::{Algorithm, ScriptedSource};
    use nalgebra::Vector3;

    struct TestEnvironment {
        settings: MazeSettings,
        queue: BuildQueue,
        rotation: Vector3<f32>,
        grounds_built: usize,
    }

    impl TestEnvironment {
        fn new(settings: MazeSettings) -> TestEnvironment {
            TestEnvironment {
                settings,
                queue: BuildQueue::new(),
                rotation: Vector3::zeros(),
                grounds_built: 0,
            }
        }
    }

    impl MazeEnvironment for TestEnvironment {
        fn settings(&self) -> &MazeSettings {
            &self.settings
        }

        fn build_ground(&mut self) -> GroundRegion {
            self.grounds_built += 1;
            let mut ground = GroundRegion::for_size(self.settings.size);
            ground.rotation = self.rotation;
            ground
        }

        fn build_queue(&self) -> BuildQueue {
            self.queue.clone()
        }
    }

    fn settings(width: i32, height: i32) -> MazeSettings {
        MazeSettingsBuilder::new().size(width, height).build().unwrap()
    }

    #[test]
    fn construction_uses_the_environment() {
        let mut env = TestEnvironment::new(MazeSettingsBuilder::new()
            .size(5, 3)
            .start(Location::CenterMiddle)
            .end(Location::LeftLower)
            .build()
            .unwrap());
        let maze = Maze::new(&mut env).unwrap();

        assert_eq!(env.grounds_built, 1);
        assert_eq!(maze.grid().size(), Size::new(5, 3).unwrap());
        assert_eq!(maze.visitor().start(), Position::new(2, 1));
        assert_eq!(maze.visitor().end(), Position::new(0, 2));
        assert!(maze.build_queue().is_same_queue(&env.queue));
        assert!(env.queue.is_empty());
    }

    #[test]
    fn exact_positions_override_locations() {
        let mut env = TestEnvironment::new(MazeSettingsBuilder::new()
            .size(4, 4)
            .start(Location::LeftUpper)
            .start_position(Some(Position::new(1, 2)))
            .end_position(Some(Position::new(3, 0)))
            .build()
            .unwrap());
        let mut maze = Maze::new(&mut env).unwrap();
        assert_eq!(maze.visitor().start(), Position::new(1, 2));
        assert_eq!(maze.visitor().end(), Position::new(3, 0));

        maze.generate(&mut ScriptedSource::new(vec![2, 7, 1])).unwrap();
        assert!(maze.visitor().start_cell().unwrap().is_visited());
        assert!(maze.grid().is_perfect_maze());
    }

    #[test]
    fn off_grid_position_fails_construction() {
        let mut settings = settings(3, 3);
        settings.start_position = Some(Position::new(0, 3));
        let mut env = TestEnvironment::new(settings);
        match *Maze::new(&mut env).err().unwrap().kind() {
            ErrorKind::OutOfRange(_) => (),
            ref other => panic!("expected out of range, got {:?}", other),
        }
    }

    #[test]
    fn rotated_ground_fails_construction() {
        let mut env = TestEnvironment::new(settings(3, 3));
        env.rotation = Vector3::new(0.0, 90.0, 0.0);
        assert!(Maze::new(&mut env).is_err());
    }

    #[test]
    fn generation_feeds_the_environment_queue() {
        let mut env = TestEnvironment::new(settings(2, 1));
        let mut maze = Maze::new(&mut env).unwrap();
        maze.generate(&mut ScriptedSource::new(vec![0])).unwrap();

        let events = env.queue.drain();
        assert_eq!(events.iter().filter(|e| e.has_wall).count(), 7);
        assert_eq!(events.iter().filter(|e| !e.has_wall).count(), 1);
        assert!(maze.grid().is_perfect_maze());
    }

    #[test]
    fn seeded_generation_repeats() {
        for &algorithm in Algorithm::ALL.iter() {
            let settings = MazeSettingsBuilder::new()
                .size(7, 5)
                .algorithm(algorithm)
                .seed(Some(1234))
                .build()
                .unwrap();
            let walls = |settings: &MazeSettings| {
                let mut env = TestEnvironment::new(settings.clone());
                let mut maze = Maze::new(&mut env).unwrap();
                maze.generate_seeded().unwrap();
                assert!(maze.grid().is_perfect_maze());
                maze.grid().iter_walls().map(|w| w.has_wall()).collect::<Vec<_>>()
            };
            assert_eq!(walls(&settings), walls(&settings));
        }
    }
}
