//! Progression systems

pub mod curve;
pub mod xp;

pub use curve::{LevelCurve, SubLevelPolicy, DEFAULT_BASE_XP, DEFAULT_XP_MULTIPLIER};
pub use xp::{xp_for_level, xp_to_next_level, thresholds, LevelProgress};
