//! Trend calculations
//!
//! The trend is a single exponential moving average: each new day moves the
//! trend 10% of the way toward that day's actual value.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Measurement, SourceMeasurement};

/// Weight given to the newest observation
pub const TREND_SMOOTHING_FACTOR: f64 = 0.1;

/// Running exponential moving average seeded by its first value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialTrend {
    alpha: f64,
    current: Option<f64>,
}

impl ExponentialTrend {
    pub fn new(alpha: f64) -> Self {
        Self { alpha, current: None }
    }

    /// Feed the next actual value and return the updated trend
    pub fn update(&mut self, actual: f64) -> f64 {
        let next = match self.current {
            Some(trend) => trend + self.alpha * (actual - trend),
            None => actual,
        };
        self.current = Some(next);
        next
    }
}

impl Default for ExponentialTrend {
    fn default() -> Self {
        Self::new(TREND_SMOOTHING_FACTOR)
    }
}

/// Compute weight trends over a gap-free daily series
pub fn compute_weight_trends(source_measurements: &[SourceMeasurement]) -> Vec<Measurement> {
    let mut trend = ExponentialTrend::default();

    source_measurements
        .iter()
        .map(|m| {
            Measurement::weight_only(
                m.date,
                m.source.clone(),
                m.weight,
                trend.update(m.weight),
                m.weight_is_interpolated,
            )
        })
        .collect()
}

/// One day of body-composition values with their trends
struct FatValues {
    fat_ratio: f64,
    fat_mass: f64,
    lean_mass: f64,
    trend_fat_percent: f64,
    trend_fat_mass: f64,
    trend_lean_mass: f64,
    is_interpolated: bool,
}

impl FatValues {
    fn apply_to(&self, measurement: &mut Measurement) {
        measurement.actual_fat_percent = Some(self.fat_ratio);
        measurement.actual_fat_mass = Some(self.fat_mass);
        measurement.actual_lean_mass = Some(self.lean_mass);
        measurement.trend_fat_percent = Some(self.trend_fat_percent);
        measurement.trend_fat_mass = Some(self.trend_fat_mass);
        measurement.trend_lean_mass = Some(self.trend_lean_mass);
        measurement.fat_is_interpolated = self.is_interpolated;
    }
}

/// Compute fat trends and merge them into the weight measurements
///
/// Fat ratio, fat mass and lean mass each get their own trend. Days present
/// in the fat series but missing from the weight series are added using the
/// fat series' interpolated weight as both actual and trend weight.
pub fn compute_fat_trends(
    fat_source_measurements: &[SourceMeasurement],
    mut measurements: Vec<Measurement>,
) -> Vec<Measurement> {
    let by_date: HashMap<NaiveDate, usize> = measurements
        .iter()
        .enumerate()
        .map(|(index, m)| (m.date, index))
        .collect();

    let mut fat_trend = ExponentialTrend::default();
    let mut fat_mass_trend = ExponentialTrend::default();
    let mut lean_mass_trend = ExponentialTrend::default();
    let mut additional = Vec::new();

    for source in fat_source_measurements {
        // The fat reducer only passes readings that carry a ratio
        let Some(fat_ratio) = source.fat_ratio else {
            continue;
        };
        let fat_mass = source.weight * fat_ratio;
        let lean_mass = source.weight - fat_mass;

        let fat = FatValues {
            fat_ratio,
            fat_mass,
            lean_mass,
            trend_fat_percent: fat_trend.update(fat_ratio),
            trend_fat_mass: fat_mass_trend.update(fat_mass),
            trend_lean_mass: lean_mass_trend.update(lean_mass),
            is_interpolated: source.fat_ratio_is_interpolated,
        };

        match by_date.get(&source.date) {
            Some(&index) => fat.apply_to(&mut measurements[index]),
            None => {
                let mut added = Measurement::weight_only(
                    source.date,
                    source.source.clone(),
                    source.weight,
                    source.weight,
                    true,
                );
                fat.apply_to(&mut added);
                additional.push(added);
            }
        }
    }

    if !additional.is_empty() {
        tracing::debug!(
            "Added {} fat-only days outside the weight series",
            additional.len()
        );
    }

    measurements.extend(additional);
    measurements.sort_by_key(|m| m.date);
    measurements
}
