//! Solve result representation.

use crate::geometry::{BoxSize, Orientation, Position};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The placement of a single box within the plate.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Index of the box in the caller's original box list.
    pub index: usize,

    /// Lower-left corner of the box (true size, clearance excluded).
    pub position: Position,

    /// Whether the box was rotated 90 degrees in the plane.
    pub orientation: Orientation,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(index: usize, position: Position, orientation: Orientation) -> Self {
        Self {
            index,
            position,
            orientation,
        }
    }

    /// Returns the x coordinate of the lower-left corner.
    pub fn x(&self) -> f64 {
        self.position.x()
    }

    /// Returns the y coordinate of the lower-left corner.
    pub fn y(&self) -> f64 {
        self.position.y()
    }

    /// Returns true if the box was rotated 90 degrees.
    pub fn is_rotated(&self) -> bool {
        self.orientation.is_rotated()
    }

    /// Returns the footprint as placed, i.e. `size` in this placement's
    /// orientation.
    pub fn placed_size(&self, size: BoxSize) -> BoxSize {
        self.orientation.apply(size)
    }
}

/// Result of a packing solve operation.
///
/// On failure the placement list stays empty; partial arrangements explored
/// by the search are never leaked to the caller.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult {
    /// One placement per original box index, in original box order.
    pub placements: Vec<Placement>,

    /// Whether an arrangement placing every box was found.
    ///
    /// `false` covers both provably impossible inputs and searches that were
    /// cut short by the backtracking depth bound; the engine cannot tell
    /// these apart.
    pub solved: bool,

    /// Ratio of total box area to plate area (0.0 - 1.0).
    pub utilization: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl SolveResult {
    /// Creates a new empty (unsolved) result.
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            solved: false,
            utilization: 0.0,
            computation_time_ms: 0,
        }
    }

    /// Returns the number of placed boxes.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if an arrangement was found.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }
}

impl Default for SolveResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_new() {
        let result = SolveResult::new();
        assert!(result.placements.is_empty());
        assert!(!result.is_solved());
        assert_eq!(result.utilization, 0.0);
    }

    #[test]
    fn test_placement_accessors() {
        let p = Placement::new(3, Position::new(10.0, 20.0), Orientation::Rotated);
        assert_eq!(p.index, 3);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
        assert!(p.is_rotated());
        assert_eq!(p.placed_size(BoxSize::new(2.0, 6.0)), BoxSize::new(6.0, 2.0));
    }

    #[test]
    fn test_utilization_percent() {
        let mut result = SolveResult::new();
        result.utilization = 0.85;
        assert_eq!(result.utilization_percent(), "85.0%");
    }
}
