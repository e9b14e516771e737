//! RON curve loader
//!
//! Loads `curves.ron` from the user's config directory or `assets/data/`,
//! with fallback to the built-in curves.

use std::fs;
use std::path::{Path, PathBuf};

use super::curves::{default_curves, CurveBook};
use crate::error::DataError;

/// File name of the curve data
pub const CURVES_FILE: &str = "curves.ron";

/// Candidate locations for the curve file, highest priority first
pub fn curve_search_paths() -> Vec<PathBuf> {
    use directories::ProjectDirs;

    let mut paths = Vec::new();
    if let Some(proj_dirs) = ProjectDirs::from("com", "xp-curve", "XpCurve") {
        paths.push(proj_dirs.config_dir().join(CURVES_FILE));
    }
    paths.push(Path::new("assets/data").join(CURVES_FILE));
    paths
}

/// Load and validate a curve file.
///
/// Curves with unusable constants fail to parse, and the book's
/// `default_mode` must name one of its curves.
pub fn load_curves_from(path: &Path) -> Result<CurveBook, DataError> {
    let content = fs::read_to_string(path)?;
    let book: CurveBook = ron::from_str(&content)?;
    book.default_curve()?;
    Ok(book)
}

/// Load the first curve file found, falling back to the built-in curves
pub fn load_curves() -> CurveBook {
    if let Some(path) = curve_search_paths().into_iter().find(|p| p.exists()) {
        match load_curves_from(&path) {
            Ok(book) => {
                log::info!("Loaded {} curves from {:?}", book.curves.len(), path);
                return book;
            }
            Err(e) => log::warn!("Failed to load {:?}: {}. Using defaults.", path, e),
        }
    }

    log::info!("Using built-in curves");
    default_curves()
}

/// Write the built-in curves to `dir/curves.ron` for editing
pub fn export_default_curves(dir: &Path) -> Result<PathBuf, DataError> {
    fs::create_dir_all(dir)?;

    let ron = ron::ser::to_string_pretty(&default_curves(), ron::ser::PrettyConfig::default())?;
    let path = dir.join(CURVES_FILE);
    fs::write(&path, ron)?;

    log::info!("Default curves exported to {:?}", path);
    Ok(path)
}
