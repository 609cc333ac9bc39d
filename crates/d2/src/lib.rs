//! # Platepack D2
//!
//! Skyline-driven 2D rectangle packing.
//!
//! The engine places a set of axis-aligned box footprints on a fixed build
//! plate without overlap, honoring a minimum clearance, and reports each
//! box's lower-left position and whether it was rotated 90 degrees. The
//! search is a bounded backtracking search over candidate arrangements,
//! each tracked by two incrementally maintained skylines.
//!
//! ```rust
//! use platepack_core::{BoxSize, Config};
//! use platepack_d2::{Plate, PlatePacker};
//!
//! let plate = Plate::new(100.0, 80.0);
//! let boxes = vec![BoxSize::new(20.0, 30.0), BoxSize::new(40.0, 10.0)];
//!
//! let packer = PlatePacker::new(plate, boxes).with_config(Config::new().with_min_gap(2.0));
//! let result = packer.pack().unwrap();
//! assert!(result.is_solved());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

mod boundary;
mod packer;
mod packing;
mod skyline;

pub use boundary::Plate;
pub use packer::PlatePacker;
