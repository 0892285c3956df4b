//! TrendWeight command-line tool
//!
//! Computes the daily measurement series from provider source data.
//! Usage: trendweight <source-data.json> [profile.json]

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use trendweight::computations::{
    compute_active_slope, compute_data_points, compute_deltas, compute_weight_slope, WeightUnit,
};
use trendweight::input;
use trendweight::models::Mode;
use trendweight::TrendError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("trendweight=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let data_path = args
        .get(1)
        .map(PathBuf::from)
        .ok_or(TrendError::MissingArgument("source data path"))?;
    let profile_path = input::resolve_profile_path(args.get(2).map(|s| s.as_str()));

    let data = input::load_source_data(&data_path)?;
    let profile = input::load_profile_or_default(profile_path.as_deref())?;

    let measurements = trendweight::compute_measurements(&data, &profile);
    println!("{}", serde_json::to_string_pretty(&measurements)?);

    let (Some(first), Some(latest)) = (measurements.first(), measurements.last()) else {
        eprintln!("No measurements found.");
        return Ok(());
    };

    let unit = WeightUnit::for_profile(&profile);
    let points = compute_data_points(Mode::Weight, &measurements);
    let today = chrono::Local::now().date_naive();

    eprintln!(
        "Days: {} ({} to {})",
        measurements.len(),
        first.date,
        latest.date
    );
    eprintln!("Latest trend: {:.1} {}", latest.trend_weight, unit.label());
    eprintln!(
        "Weekly rate: {:+.2} {}/week",
        compute_weight_slope(&measurements) * 7.0,
        unit.label()
    );
    for delta in compute_deltas(Mode::Weight, &points, today) {
        eprintln!("  Since {}: {:+.1} {}", delta.description, delta.delta, unit.label());
    }

    if let Some(fat) = measurements
        .iter()
        .rev()
        .find(|m| m.has_fat())
        .and_then(|m| m.trend_fat_percent)
    {
        let fat_points = compute_data_points(Mode::FatPercent, &measurements);
        eprintln!(
            "Body fat trend: {:.1}% ({:+.2}%/week)",
            fat * 100.0,
            compute_active_slope(Mode::FatPercent, &fat_points) * 700.0
        );
    }

    Ok(())
}
