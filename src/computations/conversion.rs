//! Raw reading conversion
//!
//! Flattens per-provider batches into source measurements: weight in profile
//! units, logical date shifted by the profile's day-start offset.

use chrono::Duration;

use super::units::WeightUnit;
use crate::models::{ProfileData, SourceData, SourceMeasurement};

/// Convert provider data into an unsorted list of source measurements
///
/// A reading taken before the day-start hour belongs to the previous day:
/// with an offset of 4, a 02:00 weigh-in on the 15th counts for the 14th.
/// Providers without a measurements array contribute nothing.
pub fn convert_to_source_measurements(
    data: &[SourceData],
    profile: &ProfileData,
) -> Vec<SourceMeasurement> {
    let offset = Duration::hours(profile.day_start_hours());
    let unit = WeightUnit::for_profile(profile);
    let visible_from = profile.visible_from();

    let converted: Vec<SourceMeasurement> = data
        .iter()
        .filter_map(|source| source.measurements.as_ref().map(|m| (source, m)))
        .flat_map(|(source, readings)| {
            readings.iter().map(move |raw| {
                let timestamp = raw.timestamp() - offset;
                SourceMeasurement {
                    date: timestamp.date(),
                    timestamp,
                    source: source.source.clone(),
                    weight: unit.from_kg(raw.weight),
                    fat_ratio: raw.fat_ratio,
                    weight_is_interpolated: false,
                    fat_ratio_is_interpolated: false,
                }
            })
        })
        .filter(|m| visible_from.map_or(true, |start| m.date >= start))
        .collect();

    tracing::debug!(
        "Converted {} readings from {} sources ({})",
        converted.len(),
        data.len(),
        unit.label()
    );

    converted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawMeasurement;
    use chrono::{NaiveDate, NaiveTime};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn raw(d: &str, t: &str, weight: f64, fat_ratio: Option<f64>) -> RawMeasurement {
        RawMeasurement {
            date: date(d),
            time: NaiveTime::parse_from_str(t, "%H:%M:%S").unwrap(),
            weight,
            fat_ratio,
        }
    }

    fn source(name: &str, readings: Vec<RawMeasurement>) -> SourceData {
        SourceData {
            source: name.to_string(),
            last_update: String::new(),
            measurements: Some(readings),
        }
    }

    fn metric() -> ProfileData {
        ProfileData {
            use_metric: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_imperial_conversion() {
        let data = vec![source("withings", vec![raw("2024-01-01", "07:00:00", 100.0, None)])];
        let result = convert_to_source_measurements(&data, &ProfileData::default());

        assert_eq!(result.len(), 1);
        assert!((result[0].weight - 220.462262).abs() < 1e-6);
    }

    #[test]
    fn test_metric_passthrough() {
        let data = vec![source("withings", vec![raw("2024-01-01", "07:00:00", 100.0, Some(0.2))])];
        let result = convert_to_source_measurements(&data, &metric());

        assert_eq!(result[0].weight, 100.0);
        assert_eq!(result[0].fat_ratio, Some(0.2));
        assert_eq!(result[0].source, "withings");
        assert!(!result[0].weight_is_interpolated);
    }

    #[test]
    fn test_day_start_offset_moves_early_reading_back() {
        let profile = ProfileData {
            use_metric: true,
            day_start_offset: Some(4),
            ..Default::default()
        };
        let data = vec![source(
            "fitbit",
            vec![
                raw("2024-01-15", "02:00:00", 80.0, None),
                raw("2024-01-15", "06:00:00", 81.0, None),
            ],
        )];
        let result = convert_to_source_measurements(&data, &profile);

        assert_eq!(result[0].date, date("2024-01-14"));
        assert_eq!(result[0].timestamp.time(), NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert_eq!(result[1].date, date("2024-01-15"));
    }

    #[test]
    fn test_missing_measurements_skipped() {
        let data = vec![
            SourceData {
                source: "fitbit".to_string(),
                last_update: String::new(),
                measurements: None,
            },
            source("withings", vec![raw("2024-01-01", "07:00:00", 80.0, None)]),
        ];
        let result = convert_to_source_measurements(&data, &metric());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].source, "withings");
    }

    #[test]
    fn test_hide_data_before_start() {
        let profile = ProfileData {
            use_metric: true,
            goal_start: Some(date("2024-01-02")),
            hide_data_before_start: true,
            ..Default::default()
        };
        let data = vec![source(
            "withings",
            vec![
                raw("2024-01-01", "07:00:00", 80.0, None),
                raw("2024-01-02", "07:00:00", 81.0, None),
            ],
        )];
        let result = convert_to_source_measurements(&data, &profile);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, date("2024-01-02"));
    }

    #[test]
    fn test_empty_input() {
        assert!(convert_to_source_measurements(&[], &metric()).is_empty());
    }
}
