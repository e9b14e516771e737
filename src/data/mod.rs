//! Curve data
//!
//! Leveling curves live in an external RON file so each game mode can tune
//! its own constants without a rebuild.

pub mod curves;
pub mod loader;

pub use curves::{CurveBook, ModeCurve, default_curves};
pub use loader::{load_curves, load_curves_from, export_default_curves, curve_search_paths};
