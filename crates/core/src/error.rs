//! Error types for platepack.

use thiserror::Error;

/// Result type alias for platepack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a packing problem.
///
/// "No arrangement found" is not an error: it is reported through
/// [`SolveResult::solved`](crate::result::SolveResult::solved). Errors are
/// reserved for inputs the engine cannot meaningfully process at all.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid box footprint provided.
    #[error("Invalid footprint: {0}")]
    InvalidGeometry(String),

    /// Invalid plate (working area) provided.
    #[error("Invalid plate: {0}")]
    InvalidBoundary(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
