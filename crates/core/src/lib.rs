//! # Platepack Core
//!
//! Shared types for the platepack build-plate packing engine.
//!
//! This crate provides the primitives used by the 2D packing module:
//!
//! - **Geometry**: [`BoxSize`] / [`Position`] size-or-position vectors and
//!   the planar [`Orientation`] flag
//! - **Configuration**: [`Config`] for clearance and search tuning
//! - **Results**: [`Placement`] and [`SolveResult`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{BoxSize, Orientation, Position};
pub use result::{Placement, SolveResult};
pub use solver::Config;
