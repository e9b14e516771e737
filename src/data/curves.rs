//! Named level curves, one per game mode

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::progression::{LevelCurve, SubLevelPolicy};

/// A curve bound to a game mode name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeCurve {
    pub mode: String,
    pub curve: LevelCurve,
}

/// All curves known to the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveBook {
    /// Mode used when none is requested
    pub default_mode: String,
    pub curves: Vec<ModeCurve>,
}

impl CurveBook {
    /// Find the curve for a mode
    pub fn find(&self, mode: &str) -> Option<&LevelCurve> {
        self.curves.iter().find(|c| c.mode == mode).map(|c| &c.curve)
    }

    /// Like [`CurveBook::find`] but reports unknown modes as an error
    pub fn get(&self, mode: &str) -> Result<&LevelCurve, DataError> {
        self.find(mode).ok_or_else(|| DataError::UnknownMode(mode.to_string()))
    }

    pub fn default_curve(&self) -> Result<&LevelCurve, DataError> {
        self.get(&self.default_mode)
    }

    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(|c| c.mode.as_str())
    }
}

impl Default for CurveBook {
    fn default() -> Self {
        default_curves()
    }
}

/// Built-in curves used when no data file is present
pub fn default_curves() -> CurveBook {
    let curve = |base_xp, xp_multiplier| LevelCurve::new(base_xp, xp_multiplier).unwrap_or_default();

    CurveBook {
        default_mode: "normal".to_string(),
        curves: vec![
            ModeCurve {
                mode: "normal".to_string(),
                curve: LevelCurve::default(),
            },
            ModeCurve {
                mode: "casual".to_string(),
                curve: curve(20.0, 1.15),
            },
            ModeCurve {
                mode: "hardcore".to_string(),
                curve: curve(50.0, 1.3).with_sub_level(SubLevelPolicy::ClampToOne),
            },
        ],
    }
}
