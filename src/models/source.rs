//! Source data models
//!
//! Raw scale readings as delivered by a provider, and the normalized
//! per-reading shape the computation pipeline works on.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Source name used for rows synthesized by gap interpolation
pub const INTERPOLATED_SOURCE: &str = "interpolated";

/// A single reading from a provider API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeasurement {
    pub date: NaiveDate, // "2024-01-15"
    pub time: NaiveTime, // "06:30:00"
    pub weight: f64,     // kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_ratio: Option<f64>, // 0-1
}

impl RawMeasurement {
    /// Local wall-clock timestamp of the reading
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// All readings from one connected provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceData {
    pub source: String,
    #[serde(default)]
    pub last_update: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Vec<RawMeasurement>>,
}

/// A reading normalized to profile units and logical day
///
/// Before daily reduction many of these may share a date; afterwards there is
/// exactly one per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMeasurement {
    pub date: NaiveDate,
    /// Offset-adjusted local timestamp, used for intra-day ordering
    pub timestamp: NaiveDateTime,
    pub source: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_ratio: Option<f64>,
    #[serde(default)]
    pub weight_is_interpolated: bool,
    #[serde(default)]
    pub fat_ratio_is_interpolated: bool,
}

impl SourceMeasurement {
    /// True when this row was synthesized rather than read from a scale
    pub fn is_interpolated(&self) -> bool {
        self.source == INTERPOLATED_SOURCE
    }
}
