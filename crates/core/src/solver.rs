//! Solver configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for the packing engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Minimum clearance to maintain between adjacent placed boxes.
    pub min_gap: f64,

    /// How far behind the best candidate the search may fall before a
    /// branch is abandoned. Smaller values finish faster and produce more
    /// false negatives; larger values explore more of the tree.
    pub max_back_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_gap: 0.0,
            max_back_depth: 8,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum gap between placed boxes.
    pub fn with_min_gap(mut self, gap: f64) -> Self {
        self.min_gap = gap;
        self
    }

    /// Sets the backtracking depth bound.
    pub fn with_max_back_depth(mut self, depth: usize) -> Self {
        self.max_back_depth = depth;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.min_gap < 0.0 {
            return Err(Error::ConfigError(format!(
                "minimum gap must be non-negative, got {}",
                self.min_gap
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.min_gap, 0.0);
        assert_eq!(config.max_back_depth, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::new().with_min_gap(1.5).with_max_back_depth(12);
        assert_eq!(config.min_gap, 1.5);
        assert_eq!(config.max_back_depth, 12);
    }

    #[test]
    fn test_negative_gap_rejected() {
        let config = Config::new().with_min_gap(-0.1);
        assert!(config.validate().is_err());
    }
}
