//! Measurement pipeline
//!
//! raw -> convert -> daily reduce -> interpolate -> weight trend, then the
//! same reduce/interpolate/trend pass over fat readings when any exist.

use super::conversion::convert_to_source_measurements;
use super::grouping::{filter_and_group_fat_measurements, group_and_select_first_by_day};
use super::interpolation::{interpolate_fat_measurements, interpolate_weight_measurements};
use super::trend::{compute_fat_trends, compute_weight_trends};
use crate::models::{Measurement, ProfileData, SourceData};

/// Compute the daily measurement series for a profile
///
/// Pure: the same inputs always produce the same output. The result has one
/// measurement per calendar date over the covered span, ascending by date,
/// and is empty when there are no readings.
pub fn compute_measurements(data: &[SourceData], profile: &ProfileData) -> Vec<Measurement> {
    let raw_data = convert_to_source_measurements(data, profile);
    if raw_data.is_empty() {
        return Vec::new();
    }

    let source_measurements = group_and_select_first_by_day(&raw_data);
    let source_measurements = interpolate_weight_measurements(&source_measurements);
    let mut measurements = compute_weight_trends(&source_measurements);

    let fat_source_measurements = filter_and_group_fat_measurements(&raw_data);
    if !fat_source_measurements.is_empty() {
        let fat_source_measurements = interpolate_fat_measurements(&fat_source_measurements);
        measurements = compute_fat_trends(&fat_source_measurements, measurements);
    }

    tracing::debug!(
        "Computed {} daily measurements from {} readings",
        measurements.len(),
        raw_data.len()
    );

    measurements
}
