//! Projection of grid walls into the ground region's local space.
//!
//! The ground is centred on the origin with the maze's first row at `+z`. Grid `x` runs along
//! world `x`, grid `y` runs along world `-z`, and walls stand on top of the ground (`+y`).

use nalgebra::Vector3;

use crate::cells::Direction;
use crate::coordinates::{Position, Size};
use crate::errors::*;
use crate::units::{WallHeight, WallThickness};
use crate::walls::WallPlacement;

/// The region the maze is built on, as reported by the environment once it has built it.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct GroundRegion {
    pub position: Vector3<f32>,
    pub scale: Vector3<f32>,
    /// Euler angles in degrees.
    pub rotation: Vector3<f32>,
}

impl GroundRegion {
    /// An unrotated ground at the origin that gives every cell one unit of space.
    pub fn for_size(size: Size) -> GroundRegion {
        GroundRegion {
            position: Vector3::zeros(),
            scale: Vector3::new(size.width() as f32, 1.0, size.height() as f32),
            rotation: Vector3::zeros(),
        }
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.rotation == Vector3::zeros()
    }

    /// Wall placement only understands axis aligned ground.
    pub fn ensure_neutral(&self) -> Result<()> {
        if self.is_neutral() {
            Ok(())
        } else {
            Err(validation(format!("ground region must not be rotated, got euler angles ({}, {}, {})",
                                   self.rotation.x,
                                   self.rotation.y,
                                   self.rotation.z)))
        }
    }

    /// Every scale component must be finite and positive, cells are sized by dividing it.
    pub fn ensure_scaled(&self) -> Result<()> {
        if self.scale.iter().all(|v| v.is_finite() && *v > 0.0) {
            Ok(())
        } else {
            Err(validation(format!("ground region scale must be positive, got ({}, {}, {})",
                                   self.scale.x,
                                   self.scale.y,
                                   self.scale.z)))
        }
    }

    /// The checks wall placement relies on.
    pub fn validate(&self) -> Result<()> {
        self.ensure_neutral()?;
        self.ensure_scaled()
    }
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct WallDimensions {
    pub thickness: WallThickness,
    pub height: WallHeight,
}

impl WallDimensions {
    pub fn new(thickness: WallThickness, height: WallHeight) -> Result<WallDimensions> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(thickness.0) || !valid(height.0) {
            return Err(validation(format!("wall thickness and height must be positive, got {} and {}",
                                          thickness.0,
                                          height.0)));
        }
        Ok(WallDimensions { thickness, height })
    }
}

/// Centre and extent of the wall on the `direction` side of the cell at `position`.
pub fn wall_placement(grid_size: Size,
                      position: Position,
                      direction: Direction,
                      ground: &GroundRegion,
                      dimensions: WallDimensions)
                      -> WallPlacement {

    let (width, height) = (grid_size.width() as f32, grid_size.height() as f32);
    let unit_x = ground.scale.x / width;
    let unit_z = ground.scale.z / height;

    // Corner of the cell nearest the first row and column
    let left_upper_x = unit_x * (position.x as f32 - width / 2.0);
    let left_upper_z = unit_z * (height / 2.0 - position.y as f32);

    let center_x = left_upper_x + unit_x / 2.0;
    let center_z = left_upper_z - unit_z / 2.0;

    let right_lower_x = left_upper_x + unit_x;
    let right_lower_z = left_upper_z - unit_z;

    let WallThickness(thickness) = dimensions.thickness;
    let WallHeight(wall_height) = dimensions.height;
    let y = ground.scale.y / 2.0 + wall_height / 2.0;

    let center = match direction {
        Direction::PositiveX => Vector3::new(right_lower_x, y, center_z),
        Direction::PositiveY => Vector3::new(center_x, y, right_lower_z),
        Direction::NegativeX => Vector3::new(left_upper_x, y, center_z),
        Direction::NegativeY => Vector3::new(center_x, y, left_upper_z),
    };
    let extent = if direction.is_along_x() {
        Vector3::new(thickness, wall_height, unit_z)
    } else {
        Vector3::new(unit_x, wall_height, thickness)
    };

    WallPlacement { center, extent }
}
