//! Exponential level curve
//!
//! Reaching level `n` costs `base_xp * xp_multiplier^(n - 1)` total experience.
//! `LevelCurve::level_from_xp` answers the inverse: the highest level whose
//! requirement does not exceed a given experience total.

use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// Experience needed to reach level 1 on the default curve
pub const DEFAULT_BASE_XP: f64 = 30.0;

/// Per-level growth factor of the default curve
pub const DEFAULT_XP_MULTIPLIER: f64 = 1.2;

/// What to report for experience totals below the level 1 threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubLevelPolicy {
    /// Keep following the curve downwards (level 0, -1, ...)
    #[default]
    Extrapolate,
    /// Never report anything below level 1
    ClampToOne,
}

/// An immutable, validated leveling curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveDef")]
pub struct LevelCurve {
    base_xp: f64,
    xp_multiplier: f64,
    sub_level: SubLevelPolicy,
}

/// Unchecked curve as written in data files
#[derive(Debug, Clone, Deserialize)]
struct CurveDef {
    base_xp: f64,
    xp_multiplier: f64,
    #[serde(default)]
    sub_level: SubLevelPolicy,
}

impl TryFrom<CurveDef> for LevelCurve {
    type Error = LevelError;

    fn try_from(def: CurveDef) -> Result<Self, Self::Error> {
        Ok(LevelCurve::new(def.base_xp, def.xp_multiplier)?.with_sub_level(def.sub_level))
    }
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            base_xp: DEFAULT_BASE_XP,
            xp_multiplier: DEFAULT_XP_MULTIPLIER,
            sub_level: SubLevelPolicy::Extrapolate,
        }
    }
}

impl LevelCurve {
    /// Build a curve, rejecting constants the formula cannot work with.
    ///
    /// `base_xp` must be finite and positive. `xp_multiplier` must be finite
    /// and strictly greater than 1: at 1 the denominator `ln(xp_multiplier)`
    /// is zero, at or below 0 it is undefined, and between 0 and 1 levels
    /// would fall as experience grows.
    pub fn new(base_xp: f64, xp_multiplier: f64) -> Result<Self, LevelError> {
        if !base_xp.is_finite() || base_xp <= 0.0 {
            return Err(LevelError::InvalidConfiguration(format!(
                "base_xp must be a finite number above zero, got {}",
                base_xp
            )));
        }
        if !xp_multiplier.is_finite() || xp_multiplier <= 1.0 {
            return Err(LevelError::InvalidConfiguration(format!(
                "xp_multiplier must be a finite number above 1, got {}",
                xp_multiplier
            )));
        }

        Ok(Self {
            base_xp,
            xp_multiplier,
            sub_level: SubLevelPolicy::Extrapolate,
        })
    }

    /// Same curve with a different sub-level policy
    pub fn with_sub_level(self, sub_level: SubLevelPolicy) -> Self {
        Self { sub_level, ..self }
    }

    pub fn base_xp(&self) -> f64 {
        self.base_xp
    }

    pub fn xp_multiplier(&self) -> f64 {
        self.xp_multiplier
    }

    pub fn sub_level(&self) -> SubLevelPolicy {
        self.sub_level
    }

    /// Level reached with `xp` total experience.
    ///
    /// Evaluates `floor(ln(xp / base_xp) / ln(xp_multiplier)) + 1` in exactly
    /// that order, so results match other implementations of the same curve
    /// on threshold values. `xp == base_xp` is level 1. Below that the result
    /// depends on the curve's [`SubLevelPolicy`].
    pub fn level_from_xp(&self, xp: f64) -> Result<i64, LevelError> {
        if !xp.is_finite() || xp <= 0.0 {
            log::debug!("Rejected xp {} for level lookup", xp);
            return Err(LevelError::InvalidInput { xp });
        }

        let steps = ((xp / self.base_xp).ln() / self.xp_multiplier.ln()).floor();

        // i64::MAX as f64 rounds up to 2^63, hence the exclusive bound
        if !steps.is_finite() || steps < i64::MIN as f64 || steps >= i64::MAX as f64 {
            log::debug!("Level for xp {} overflowed (steps = {})", xp, steps);
            return Err(LevelError::OutOfRange { xp });
        }

        let level = steps as i64 + 1;
        Ok(match self.sub_level {
            SubLevelPolicy::Extrapolate => level,
            SubLevelPolicy::ClampToOne => level.max(1),
        })
    }
}
