//! The build plate boundary.

use nalgebra::Vector3;
use platepack_core::{BoxSize, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rectangular working area boxes are packed into.
///
/// The depth (z) is carried for callers that track the available headroom
/// above the plate, but the engine never checks it: boxes are assumed to be
/// stackable to any height.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plate {
    /// Dimensions (width, height, depth).
    dimensions: Vector3<f64>,
}

impl Plate {
    /// Creates a new plate with the given width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            dimensions: Vector3::new(width, height, 0.0),
        }
    }

    /// Sets the carried depth (headroom above the plate).
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.dimensions.z = depth;
        self
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the carried depth.
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the plate area.
    pub fn area(&self) -> f64 {
        self.dimensions.x * self.dimensions.y
    }

    /// Returns the plate dimensions as a size vector.
    pub fn size(&self) -> BoxSize {
        BoxSize::new_3d(self.dimensions.x, self.dimensions.y, self.dimensions.z)
    }

    /// Validates the plate.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 {
            return Err(Error::InvalidBoundary(
                "plate width and height must be positive".into(),
            ));
        }
        if self.dimensions.z < 0.0 {
            return Err(Error::InvalidBoundary(
                "plate depth must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plate_area() {
        let plate = Plate::new(100.0, 80.0);
        assert_relative_eq!(plate.area(), 8000.0);
    }

    #[test]
    fn test_depth_is_carried() {
        let plate = Plate::new(100.0, 80.0).with_depth(50.0);
        assert_relative_eq!(plate.depth(), 50.0);
        assert_relative_eq!(plate.size().z(), 50.0);
    }

    #[test]
    fn test_validation() {
        assert!(Plate::new(100.0, 80.0).validate().is_ok());
        assert!(Plate::new(-100.0, 80.0).validate().is_err());
        assert!(Plate::new(100.0, 0.0).validate().is_err());
        assert!(Plate::new(100.0, 80.0).with_depth(-1.0).validate().is_err());
    }
}
