//! Error types for level lookups and curve data.

use thiserror::Error;

/// Errors raised while building a curve or looking up a level
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    #[error("Invalid xp {xp}: experience must be a finite number above zero")]
    InvalidInput { xp: f64 },

    #[error("Invalid curve configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Level for xp {xp} does not fit the curve's numeric range")]
    OutOfRange { xp: f64 },
}

/// Errors raised while loading or exporting curve files
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Unknown game mode '{0}'")]
    UnknownMode(String),
}
