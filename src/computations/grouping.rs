//! Daily reduction
//!
//! Collapses same-day readings from every source down to the first weigh-in
//! of the day.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::SourceMeasurement;

/// Keep the earliest reading of each date, sorted ascending by date
///
/// Readings with identical timestamps keep whichever came first in the input.
pub fn group_and_select_first_by_day(measurements: &[SourceMeasurement]) -> Vec<SourceMeasurement> {
    let mut by_date: BTreeMap<NaiveDate, &SourceMeasurement> = BTreeMap::new();

    for measurement in measurements {
        by_date
            .entry(measurement.date)
            .and_modify(|first| {
                if measurement.timestamp < first.timestamp {
                    *first = measurement;
                }
            })
            .or_insert(measurement);
    }

    by_date.into_values().cloned().collect()
}

/// Same reduction restricted to readings that carry a fat ratio
///
/// A fat ratio of 0 counts as present.
pub fn filter_and_group_fat_measurements(measurements: &[SourceMeasurement]) -> Vec<SourceMeasurement> {
    let mut with_fat: Vec<SourceMeasurement> = measurements
        .iter()
        .filter(|m| m.fat_ratio.is_some())
        .cloned()
        .collect();
    with_fat.sort_by_key(|m| m.timestamp);

    group_and_select_first_by_day(&with_fat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn reading(ts: &str, source: &str, weight: f64, fat_ratio: Option<f64>) -> SourceMeasurement {
        let timestamp = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap();
        SourceMeasurement {
            date: timestamp.date(),
            timestamp,
            source: source.to_string(),
            weight,
            fat_ratio,
            weight_is_interpolated: false,
            fat_ratio_is_interpolated: false,
        }
    }

    #[test]
    fn test_first_of_day_selected() {
        let input = vec![
            reading("2024-01-01 14:00:00", "fitbit", 181.0, None),
            reading("2024-01-01 08:00:00", "withings", 180.0, None),
        ];
        let result = group_and_select_first_by_day(&input);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].weight, 180.0);
        assert_eq!(result[0].source, "withings");
    }

    #[test]
    fn test_sorted_by_date() {
        let input = vec![
            reading("2024-01-03 07:00:00", "withings", 82.0, None),
            reading("2024-01-01 07:00:00", "withings", 80.0, None),
            reading("2024-01-02 09:00:00", "withings", 81.5, None),
            reading("2024-01-02 07:00:00", "withings", 81.0, None),
        ];
        let result = group_and_select_first_by_day(&input);

        let weights: Vec<f64> = result.iter().map(|m| m.weight).collect();
        assert_eq!(weights, vec![80.0, 81.0, 82.0]);
        assert!(result.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_identical_timestamps_keep_first_seen() {
        let input = vec![
            reading("2024-01-01 07:00:00", "withings", 80.0, None),
            reading("2024-01-01 07:00:00", "fitbit", 80.4, None),
        ];
        let result = group_and_select_first_by_day(&input);

        assert_eq!(result[0].source, "withings");
    }

    #[test]
    fn test_fat_reducer_skips_readings_without_fat() {
        let input = vec![
            reading("2024-01-01 06:00:00", "fitbit", 80.0, None),
            reading("2024-01-01 07:00:00", "withings", 80.2, Some(0.0)),
            reading("2024-01-02 06:00:00", "fitbit", 80.5, None),
        ];
        let result = filter_and_group_fat_measurements(&input);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].source, "withings");
        assert_eq!(result[0].fat_ratio, Some(0.0));
    }

    #[test]
    fn test_empty_input() {
        assert!(group_and_select_first_by_day(&[]).is_empty());
        assert!(filter_and_group_fat_measurements(&[]).is_empty());
    }
}
