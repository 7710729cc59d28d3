//! Engine configuration and constructor-time validation

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

/// Board dimensions for a new engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub cols: u8,
    pub rows: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl BoardConfig {
    /// Create a validated configuration
    pub fn new(cols: u8, rows: u8) -> Result<Self, ConfigError> {
        let config = Self { cols, rows };
        config.validate()?;
        Ok(config)
    }

    /// Reject degenerate dimensions; this is the only fallible path in the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::ZeroDimension {
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Canonical spawn column: centers the 2-wide anchor box (x = 4 on the
    /// default 10-wide board)
    pub fn spawn_x(&self) -> i16 {
        (i16::from(self.cols) - 2).max(0) / 2
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("board dimensions must be positive, got {cols}x{rows}")]
    ZeroDimension { cols: u8, rows: u8 },
}
