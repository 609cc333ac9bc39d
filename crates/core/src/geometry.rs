//! Size and position primitives for rectangle packing.

use crate::{Error, Result};
use nalgebra::Vector3;
use std::ops::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3-component size vector (width, height, depth).
///
/// Only x and y participate in packing logic; z is carried through
/// unmodified so that callers working with 3D parts can keep the full
/// extent attached. The same type doubles as a point, see [`Position`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxSize {
    components: Vector3<f64>,
}

impl Default for BoxSize {
    fn default() -> Self {
        Self::new_3d(0.0, 0.0, 0.0)
    }
}

/// A lower-left corner position.
///
/// Positions share the representation of [`BoxSize`]: the packing engine
/// rotates both with the same coordinate swap when it changes frames.
pub type Position = BoxSize;

impl BoxSize {
    /// Creates a footprint with the given width and height (z = 0).
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            components: Vector3::new(x, y, 0.0),
        }
    }

    /// Creates a size with all three components.
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self {
            components: Vector3::new(x, y, z),
        }
    }

    /// Returns the x component (width).
    pub fn x(&self) -> f64 {
        self.components.x
    }

    /// Returns the y component (height).
    pub fn y(&self) -> f64 {
        self.components.y
    }

    /// Returns the z component (depth, unused by packing logic).
    pub fn z(&self) -> f64 {
        self.components.z
    }

    /// Swaps the x and y components in place.
    pub fn rotate(&mut self) {
        self.components.swap_rows(0, 1);
    }

    /// Returns a copy with the x and y components swapped.
    pub fn rotated(mut self) -> Self {
        self.rotate();
        self
    }

    /// Returns the squared length of the 2D footprint diagonal.
    pub fn diagonal_sq(&self) -> f64 {
        self.components.x * self.components.x + self.components.y * self.components.y
    }

    /// Returns the footprint area.
    pub fn area(&self) -> f64 {
        self.components.x * self.components.y
    }

    /// Returns this footprint grown by `amount` in both x and y.
    ///
    /// The growth is symmetric around the footprint center once the
    /// placement position is later shifted by `amount / 2`.
    pub fn expanded(&self, amount: f64) -> Self {
        *self + BoxSize::new(amount, amount)
    }

    /// Validates the footprint for use in packing.
    pub fn validate(&self) -> Result<()> {
        if !(self.components.x > 0.0 && self.components.y > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "footprint dimensions must be positive, got {} x {}",
                self.components.x, self.components.y
            )));
        }
        if self.components.z < 0.0 {
            return Err(Error::InvalidGeometry(
                "footprint depth must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

impl Add for BoxSize {
    type Output = BoxSize;

    fn add(self, rhs: BoxSize) -> BoxSize {
        BoxSize {
            components: self.components + rhs.components,
        }
    }
}

impl AddAssign for BoxSize {
    fn add_assign(&mut self, rhs: BoxSize) {
        self.components += rhs.components;
    }
}

/// Whether a box is placed as given or rotated 90 degrees in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// The box keeps its original footprint.
    #[default]
    AsGiven,
    /// The box footprint is rotated 90 degrees (x and y swapped).
    Rotated,
}

impl Orientation {
    /// Returns true for the rotated orientation.
    pub fn is_rotated(&self) -> bool {
        matches!(self, Self::Rotated)
    }

    /// Applies this orientation to a footprint.
    pub fn apply(&self, size: BoxSize) -> BoxSize {
        match self {
            Self::AsGiven => size,
            Self::Rotated => size.rotated(),
        }
    }
}
