//! xp-curve - Entry Point
//!
//! Usage: `xp-curve [MODE] [XP...]`
//!
//! Prints the level for each xp total using the named mode's curve, or the
//! first levels' thresholds when no xp is given.

use anyhow::{Context, Result};

use xp_curve::data::load_curves;
use xp_curve::progression::{thresholds, LevelProgress};

/// Levels shown when no xp values are passed
const TABLE_LEVELS: i64 = 20;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting xp-curve v{}", env!("CARGO_PKG_VERSION"));

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let book = load_curves();

    // A leading non-number names the mode
    let mode = if args.first().is_some_and(|a| a.parse::<f64>().is_err()) {
        args.remove(0)
    } else {
        book.default_mode.clone()
    };
    let curve = *book.get(&mode)?;
    log::info!(
        "Mode '{}': base_xp = {}, xp_multiplier = {}, {:?}",
        mode,
        curve.base_xp(),
        curve.xp_multiplier(),
        curve.sub_level()
    );

    if args.is_empty() {
        println!("{:>6}  {:>14}", "level", "xp required");
        for (level, xp) in thresholds(curve, 1..=TABLE_LEVELS) {
            println!("{:>6}  {:>14.2}", level, xp);
        }
        return Ok(());
    }

    for arg in &args {
        let xp: f64 = arg
            .parse()
            .with_context(|| format!("'{}' is not a number", arg))?;
        let progress = LevelProgress::from_xp(&curve, xp)
            .with_context(|| format!("No level for xp {}", xp))?;
        println!(
            "xp {:>12}  level {:>4}  ({:.0}% to next)",
            arg,
            progress.level,
            progress.fraction * 100.0
        );
    }

    Ok(())
}
