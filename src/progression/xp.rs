//! Experience thresholds and progress
//!
//! Forward direction of a [`LevelCurve`]: how much xp a level costs, how far
//! a player is into their current level, and threshold tables for display.

use std::ops::RangeInclusive;

use super::curve::LevelCurve;
use crate::error::LevelError;

/// Total xp needed to reach `level`: `base_xp * xp_multiplier^(level - 1)`
pub fn xp_for_level(curve: &LevelCurve, level: i64) -> f64 {
    curve.base_xp() * curve.xp_multiplier().powf((level - 1) as f64)
}

/// XP still missing before `xp` reaches the next level
pub fn xp_to_next_level(curve: &LevelCurve, xp: f64) -> Result<f64, LevelError> {
    let level = curve.level_from_xp(xp)?;
    Ok((xp_for_level(curve, level + 1) - xp).max(0.0))
}

/// `(level, xp required)` pairs for every level in `levels`
pub fn thresholds(
    curve: LevelCurve,
    levels: RangeInclusive<i64>,
) -> impl Iterator<Item = (i64, f64)> {
    levels.map(move |level| (level, xp_for_level(&curve, level)))
}

/// Where an xp total sits within its level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub level: i64,
    /// XP earned past the current level's threshold
    pub into_level: f64,
    /// XP between the current level's threshold and the next
    pub span: f64,
    /// `into_level / span`, clamped to 0.0..=1.0
    pub fraction: f64,
}

impl LevelProgress {
    pub fn from_xp(curve: &LevelCurve, xp: f64) -> Result<Self, LevelError> {
        let level = curve.level_from_xp(xp)?;
        let floor = xp_for_level(curve, level);
        let span = xp_for_level(curve, level + 1) - floor;
        // Clamped curves report level 1 below its threshold
        let into_level = (xp - floor).max(0.0);

        Ok(Self {
            level,
            into_level,
            span,
            fraction: (into_level / span).clamp(0.0, 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::SubLevelPolicy;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_xp_for_level() {
        let curve = LevelCurve::default();
        assert_eq!(xp_for_level(&curve, 1), 30.0);
        assert!(close(xp_for_level(&curve, 2), 36.0));
        assert!(close(xp_for_level(&curve, 3), 43.2));
        assert!(close(xp_for_level(&curve, 0), 25.0));
    }

    #[test]
    fn test_thresholds_invert_level_lookup() {
        let curve = LevelCurve::new(50.0, 1.15).unwrap();
        for level in -10..=60 {
            let threshold = xp_for_level(&curve, level);
            assert_eq!(curve.level_from_xp(threshold * (1.0 + 1e-9)), Ok(level));
            assert_eq!(curve.level_from_xp(threshold * (1.0 - 1e-9)), Ok(level - 1));
        }
    }

    #[test]
    fn test_xp_to_next_level() {
        let curve = LevelCurve::default();
        assert!(close(xp_to_next_level(&curve, 30.0).unwrap(), 6.0));
        assert!(close(xp_to_next_level(&curve, 33.0).unwrap(), 3.0));
        assert!(matches!(
            xp_to_next_level(&curve, -5.0),
            Err(LevelError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_thresholds_table() {
        let table: Vec<_> = thresholds(LevelCurve::default(), 1..=3).collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table[0], (1, 30.0));
        assert_eq!(table[1].0, 2);
        assert!(close(table[2].1, 43.2));
    }

    #[test]
    fn test_progress_midway() {
        let curve = LevelCurve::default();
        let progress = LevelProgress::from_xp(&curve, 33.0).unwrap();
        assert_eq!(progress.level, 1);
        assert!(close(progress.into_level, 3.0));
        assert!(close(progress.span, 6.0));
        assert!(close(progress.fraction, 0.5));
    }

    #[test]
    fn test_progress_clamped_curve_below_threshold() {
        let curve = LevelCurve::default().with_sub_level(SubLevelPolicy::ClampToOne);
        let progress = LevelProgress::from_xp(&curve, 10.0).unwrap();
        assert_eq!(progress.level, 1);
        assert_eq!(progress.into_level, 0.0);
        assert_eq!(progress.fraction, 0.0);
    }
}
