//! Chart data points
//!
//! Projects computed measurements onto the single series a chart shows.

use crate::models::{DataPoint, Measurement, Mode};

/// Build the data points for one mode, ascending by date
///
/// Days with no trend for the mode are skipped. Leading and trailing days
/// with no actual value are trimmed; gaps inside the span are kept.
pub fn compute_data_points(mode: Mode, measurements: &[Measurement]) -> Vec<DataPoint> {
    let mut points: Vec<DataPoint> = measurements
        .iter()
        .filter_map(|m| {
            let (actual, trend, is_interpolated) = match mode {
                Mode::Weight => (Some(m.actual_weight), Some(m.trend_weight), m.weight_is_interpolated),
                Mode::FatPercent => (m.actual_fat_percent, m.trend_fat_percent, m.fat_is_interpolated),
                Mode::FatMass => (m.actual_fat_mass, m.trend_fat_mass, m.fat_is_interpolated),
                Mode::LeanMass => (m.actual_lean_mass, m.trend_lean_mass, m.fat_is_interpolated),
            };
            Some(DataPoint {
                date: m.date,
                source: m.source.clone(),
                actual: actual.filter(|v| v.is_finite()),
                trend: trend.filter(|v| v.is_finite())?,
                is_interpolated,
            })
        })
        .collect();
    points.sort_by_key(|p| p.date);

    let Some(first) = points.iter().position(|p| p.actual.is_some()) else {
        return Vec::new();
    };
    let last = points.iter().rposition(|p| p.actual.is_some()).unwrap_or(first);

    points.truncate(last + 1);
    points.drain(..first);
    points
}
