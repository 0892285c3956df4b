//! Trend statistics
//!
//! Period-over-period trend changes and least-squares slopes used by the
//! dashboard summary.

use chrono::{Duration, NaiveDate};

use crate::models::{DataPoint, Delta, Measurement, Mode};

/// Days of weight trend used for the weekly rate
const WEIGHT_SLOPE_WINDOW: usize = 14;

/// Comparison periods: (days back, description, minimum readings in between)
const DELTA_PERIODS: [(i64, &str, usize); 3] = [
    (7, "last week", 4),
    (14, "two weeks ago", 9),
    (28, "a month ago", 19),
];

/// Round to the given number of decimal places
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Trend change from earlier dates to the most recent point
///
/// Returns nothing when the latest point is more than two days before
/// `today` or there is only one point. Trends are rounded to display
/// precision before subtracting so deltas match what is shown.
pub fn compute_deltas(mode: Mode, data_points: &[DataPoint], today: NaiveDate) -> Vec<Delta> {
    let mut deltas = Vec::new();

    // Newest first
    let points: Vec<&DataPoint> = data_points.iter().rev().collect();
    let Some(latest) = points.first() else {
        return deltas;
    };

    let days_since_latest = (today - latest.date).num_days();
    if days_since_latest > 2 || points.len() <= 1 {
        return deltas;
    }

    let precision = mode.display_precision();
    let latest_trend = round_to(latest.trend, precision);

    if days_since_latest <= 1 {
        let previous = points[1];
        if (latest.date - previous.date).num_days() == 1 {
            deltas.push(Delta {
                period: 1,
                description: "yesterday".to_string(),
                delta: latest_trend - round_to(previous.trend, precision),
            });
        }
    }

    for (period, description, min_index) in DELTA_PERIODS {
        let target = latest.date - Duration::days(period);
        let Some(index) = points.iter().position(|p| p.date == target) else {
            continue;
        };
        if index >= min_index {
            deltas.push(Delta {
                period,
                description: description.to_string(),
                delta: latest_trend - round_to(points[index].trend, precision),
            });
        }
    }

    deltas
}

/// Daily slope of the weight trend over the last two weeks
pub fn compute_weight_slope(measurements: &[Measurement]) -> f64 {
    let start = measurements.len().saturating_sub(WEIGHT_SLOPE_WINDOW);
    let values: Vec<f64> = measurements[start..]
        .iter()
        .map(|m| m.trend_weight)
        .filter(|v| v.is_finite())
        .collect();

    calculate_slope(&values)
}

/// Daily slope of the active series' trend
///
/// Weight uses the last 14 points, the fat modes the last 28.
pub fn compute_active_slope(mode: Mode, data_points: &[DataPoint]) -> f64 {
    let start = data_points.len().saturating_sub(mode.slope_window());
    let values: Vec<f64> = data_points[start..].iter().map(|p| p.trend).collect();

    calculate_slope(&values)
}

/// Least-squares slope of `values` against their index; 0 for fewer than 2
fn calculate_slope(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x)
}
