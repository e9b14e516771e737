//! xp-curve - exponential level curves
//!
//! Turn an experience total into a player level, look up what each level
//! costs, and load per-mode curves from data files.

pub mod error;
pub mod progression;
pub mod data;

// Re-export commonly used types
pub use error::{LevelError, DataError};
pub use progression::{LevelCurve, LevelProgress, SubLevelPolicy};
pub use data::CurveBook;
