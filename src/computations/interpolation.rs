//! Gap interpolation
//!
//! Fills calendar days with no reading by linear interpolation between the
//! readings on either side of the gap. Weight and fat series use the same
//! routine and differ only in the time of day given to synthetic rows.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{SourceMeasurement, INTERPOLATED_SOURCE};

/// Position of a synthetic day inside a gap
///
/// `step` runs from 1 to `span - 1`, where `span` is the number of days
/// between the two known readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapStep {
    pub step: i64,
    pub span: i64,
}

impl GapStep {
    /// Linear interpolation between the values at either end of the gap
    pub fn lerp(&self, start: f64, end: f64) -> f64 {
        start + self.step as f64 * (end - start) / self.span as f64
    }
}

/// Time of day stamped on synthetic rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticTime {
    /// 23:59:59, after any genuine reading that day
    EndOfDay,
    /// 00:00:00
    StartOfDay,
}

impl SyntheticTime {
    pub fn time(&self) -> NaiveTime {
        match self {
            // One second before midnight
            SyntheticTime::EndOfDay => NaiveTime::MIN + Duration::seconds(86_399),
            SyntheticTime::StartOfDay => NaiveTime::MIN,
        }
    }

    pub fn stamp(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.time())
    }
}

/// Insert one synthesized point for every missing date between sorted points
///
/// `points` must be ascending with distinct dates. `synthesize` receives the
/// points bounding the gap, the missing date and its position in the gap.
/// The output has exactly one point per date from the first to the last.
pub fn fill_calendar_gaps<T, D, S>(points: &[T], date_of: D, mut synthesize: S) -> Vec<T>
where
    T: Clone,
    D: Fn(&T) -> NaiveDate,
    S: FnMut(&T, &T, NaiveDate, GapStep) -> T,
{
    let Some(last) = points.last() else {
        return Vec::new();
    };

    let span_days = (date_of(last) - date_of(&points[0])).num_days().max(0) as usize;
    let mut result = Vec::with_capacity(points.len().max(span_days + 1));

    for pair in points.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        result.push(previous.clone());

        let start = date_of(previous);
        let span = (date_of(current) - start).num_days();
        for step in 1..span {
            let date = start + Duration::days(step);
            result.push(synthesize(previous, current, date, GapStep { step, span }));
        }
    }
    result.push(last.clone());

    result
}

/// Fill missing days in the daily weight series
///
/// Synthetic rows are stamped at the end of their day.
pub fn interpolate_weight_measurements(measurements: &[SourceMeasurement]) -> Vec<SourceMeasurement> {
    interpolate_measurements(measurements, SyntheticTime::EndOfDay)
}

/// Fill missing days in the daily fat series
///
/// Synthetic rows are stamped at the start of their day and carry an
/// interpolated weight alongside the interpolated fat ratio.
pub fn interpolate_fat_measurements(measurements: &[SourceMeasurement]) -> Vec<SourceMeasurement> {
    interpolate_measurements(measurements, SyntheticTime::StartOfDay)
}

fn interpolate_measurements(
    measurements: &[SourceMeasurement],
    time: SyntheticTime,
) -> Vec<SourceMeasurement> {
    let mut sorted = measurements.to_vec();
    sorted.sort_by_key(|m| m.date);

    let filled = fill_calendar_gaps(&sorted, |m| m.date, |previous, current, date, gap| {
        let fat_ratio = match (previous.fat_ratio, current.fat_ratio) {
            (Some(start), Some(end)) => Some(gap.lerp(start, end)),
            _ => None,
        };
        SourceMeasurement {
            date,
            timestamp: time.stamp(date),
            source: INTERPOLATED_SOURCE.to_string(),
            weight: gap.lerp(previous.weight, current.weight),
            fat_ratio,
            weight_is_interpolated: true,
            fat_ratio_is_interpolated: fat_ratio.is_some(),
        }
    });

    tracing::debug!(
        "Interpolated {} missing days ({:?})",
        filled.iter().filter(|m| m.is_interpolated()).count(),
        time
    );

    filled
}
