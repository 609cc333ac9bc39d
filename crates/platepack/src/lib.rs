//! # Platepack
//!
//! Deterministic 2D packing of part footprints on a fixed build plate.
//!
//! Parts are represented by their axis-aligned bounding boxes; the engine
//! arranges them without overlap, keeps a configurable clearance between
//! neighbors, and reports each box's position together with an optional
//! 90 degree rotation — or a failure when no arrangement is found.
//!
//! ## Quick Start
//!
//! ```rust
//! use platepack::{BoxSize, Config, Plate, PlatePacker};
//!
//! let plate = Plate::new(200.0, 200.0);
//! let boxes = vec![
//!     BoxSize::new(60.0, 40.0),
//!     BoxSize::new(80.0, 80.0),
//!     BoxSize::new(120.0, 20.0),
//! ];
//!
//! let packer = PlatePacker::new(plate, boxes).with_config(Config::new().with_min_gap(5.0));
//! let result = packer.pack().unwrap();
//! for placement in &result.placements {
//!     println!(
//!         "box {} at ({}, {}), rotated: {}",
//!         placement.index,
//!         placement.x(),
//!         placement.y(),
//!         placement.is_rotated()
//!     );
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `d2` (default): the 2D packing engine
//! - `serde`: serialization support

/// Core types.
pub use platepack_core as core;

/// 2D packing engine.
#[cfg(feature = "d2")]
pub use platepack_d2 as d2;

// Re-export commonly used types at root level
pub use platepack_core::{BoxSize, Config, Orientation, Placement, Position, SolveResult};

#[cfg(feature = "d2")]
pub use platepack_d2::{Plate, PlatePacker};
