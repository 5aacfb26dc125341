//! What a maze needs from the world it is built in, and how it is configured.

use std::time::Duration;

use crate::build_queue::BuildQueue;
use crate::coordinates::{Location, Position, Size};
use crate::errors::*;
use crate::generators::Algorithm;
use crate::placement::{GroundRegion, WallDimensions};
use crate::units::{WallHeight, WallThickness};

#[derive(Debug, Clone, PartialEq)]
pub struct MazeSettings {
    pub size: Size,
    pub start: Location,
    pub end: Location,
    /// Exact start cell, taking precedence over `start`.
    pub start_position: Option<Position>,
    /// Exact end cell, taking precedence over `end`.
    pub end_position: Option<Position>,
    pub wall_thickness: WallThickness,
    pub wall_height: WallHeight,
    /// Pacing hint for a consumer materializing queued walls one by one. Generation ignores it.
    pub build_interval: Duration,
    pub algorithm: Algorithm,
    /// `None` draws from entropy.
    pub seed: Option<u64>,
}

impl MazeSettings {
    pub fn wall_dimensions(&self) -> Result<WallDimensions> {
        WallDimensions::new(self.wall_thickness, self.wall_height)
    }
}

impl Default for MazeSettings {
    fn default() -> MazeSettings {
        MazeSettings {
            size: Size::default(),
            start: Location::LeftUpper,
            end: Location::RightLower,
            start_position: None,
            end_position: None,
            wall_thickness: WallThickness(0.3),
            wall_height: WallHeight(0.5),
            build_interval: Duration::from_millis(100),
            algorithm: Algorithm::default(),
            seed: None,
        }
    }
}

/// Builds `MazeSettings` from the defaults, validating everything in `build`.
#[derive(Debug, Clone)]
pub struct MazeSettingsBuilder {
    width: i32,
    height: i32,
    settings: MazeSettings,
}

impl MazeSettingsBuilder {
    pub fn new() -> MazeSettingsBuilder {
        let settings = MazeSettings::default();
        MazeSettingsBuilder {
            width: settings.size.width(),
            height: settings.size.height(),
            settings,
        }
    }

    pub fn size(mut self, width: i32, height: i32) -> MazeSettingsBuilder {
        self.width = width;
        self.height = height;
        self
    }

    pub fn start(mut self, location: Location) -> MazeSettingsBuilder {
        self.settings.start = location;
        self
    }

    pub fn end(mut self, location: Location) -> MazeSettingsBuilder {
        self.settings.end = location;
        self
    }

    pub fn start_position(mut self, position: Option<Position>) -> MazeSettingsBuilder {
        self.settings.start_position = position;
        self
    }

    pub fn end_position(mut self, position: Option<Position>) -> MazeSettingsBuilder {
        self.settings.end_position = position;
        self
    }

    pub fn wall_thickness(mut self, thickness: f32) -> MazeSettingsBuilder {
        self.settings.wall_thickness = WallThickness(thickness);
        self
    }

    pub fn wall_height(mut self, height: f32) -> MazeSettingsBuilder {
        self.settings.wall_height = WallHeight(height);
        self
    }

    pub fn build_interval(mut self, interval: Duration) -> MazeSettingsBuilder {
        self.settings.build_interval = interval;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> MazeSettingsBuilder {
        self.settings.algorithm = algorithm;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> MazeSettingsBuilder {
        self.settings.seed = seed;
        self
    }

    pub fn build(self) -> Result<MazeSettings> {
        let mut settings = self.settings;
        settings.size = Size::new(self.width, self.height)?;
        settings.wall_dimensions()?;
        for position in settings.start_position.iter().chain(settings.end_position.iter()) {
            if !settings.size.contains(*position) {
                return Err(out_of_range(format!("{} is outside a {}x{} maze",
                                                position,
                                                settings.size.width(),
                                                settings.size.height())));
            }
        }
        Ok(settings)
    }
}

impl Default for MazeSettingsBuilder {
    fn default() -> MazeSettingsBuilder {
        MazeSettingsBuilder::new()
    }
}

/// The host a maze is built in: it supplies the settings and the ground the walls stand on,
/// and consumes the wall transitions through the build queue.
pub trait MazeEnvironment {
    fn settings(&self) -> &MazeSettings;

    fn build_ground(&mut self) -> GroundRegion;

    /// The queue the grid announces wall transitions on. Handles are shared, so the
    /// environment can keep a clone and drain it while or after the maze generates.
    fn build_queue(&self) -> BuildQueue;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = MazeSettings::default();
        assert_eq!((s.size.width(), s.size.height()), (10, 10));
        assert_eq!(s.start, Location::LeftUpper);
        assert_eq!(s.end, Location::RightLower);
        assert_eq!(s.algorithm, Algorithm::FrontierGrowth);
        assert_eq!(s.seed, None);
        assert_eq!((s.start_position, s.end_position), (None, None));
        assert!(s.wall_dimensions().is_ok());
        assert_eq!(MazeSettingsBuilder::new().build().unwrap(), s);
    }

    #[test]
    fn builder_sets_every_field() {
        let s = MazeSettingsBuilder::new()
            .size(4, 7)
            .start(Location::CenterMiddle)
            .end(Location::LeftLower)
            .start_position(Some(Position::new(3, 0)))
            .end_position(Some(Position::new(0, 6)))
            .wall_thickness(0.1)
            .wall_height(2.0)
            .build_interval(Duration::from_secs(1))
            .algorithm(Algorithm::UnionFind)
            .seed(Some(99))
            .build()
            .unwrap();
        assert_eq!((s.size.width(), s.size.height()), (4, 7));
        assert_eq!(s.start, Location::CenterMiddle);
        assert_eq!(s.end, Location::LeftLower);
        assert_eq!(s.start_position, Some(Position::new(3, 0)));
        assert_eq!(s.end_position, Some(Position::new(0, 6)));
        assert_eq!(s.wall_thickness, WallThickness(0.1));
        assert_eq!(s.wall_height, WallHeight(2.0));
        assert_eq!(s.build_interval, Duration::from_secs(1));
        assert_eq!(s.algorithm, Algorithm::UnionFind);
        assert_eq!(s.seed, Some(99));
    }

    #[test]
    fn builder_validates() {
        assert!(MazeSettingsBuilder::new().size(0, 3).build().is_err());
        assert!(MazeSettingsBuilder::new().size(3, -1).build().is_err());
        assert!(MazeSettingsBuilder::new().wall_thickness(0.0).build().is_err());
        assert!(MazeSettingsBuilder::new().wall_height(f32::NAN).build().is_err());

        let off_grid = MazeSettingsBuilder::new()
            .size(3, 3)
            .end_position(Some(Position::new(3, 0)))
            .build();
        match *off_grid.unwrap_err().kind() {
            ErrorKind::OutOfRange(_) => (),
            ref other => panic!("expected out of range, got {:?}", other),
        }
    }
}
