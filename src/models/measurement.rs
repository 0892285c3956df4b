//! Measurement model
//!
//! The per-day output of the computation pipeline: actual and trend values
//! for weight and, where available, body composition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One computed day of weight and body-composition data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub date: NaiveDate,
    pub source: String,
    pub actual_weight: f64,
    pub trend_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_fat_percent: Option<f64>, // ratio 0-1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_fat_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_lean_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_fat_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_fat_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_lean_mass: Option<f64>,
    pub weight_is_interpolated: bool,
    pub fat_is_interpolated: bool,
}

impl Measurement {
    /// Weight-only measurement with no body-composition data
    pub fn weight_only(
        date: NaiveDate,
        source: impl Into<String>,
        actual_weight: f64,
        trend_weight: f64,
        weight_is_interpolated: bool,
    ) -> Self {
        Self {
            date,
            source: source.into(),
            actual_weight,
            trend_weight,
            actual_fat_percent: None,
            actual_fat_mass: None,
            actual_lean_mass: None,
            trend_fat_percent: None,
            trend_fat_mass: None,
            trend_lean_mass: None,
            weight_is_interpolated,
            fat_is_interpolated: false,
        }
    }

    /// Whether fat percentage/mass data was merged into this day
    pub fn has_fat(&self) -> bool {
        self.actual_fat_percent.is_some()
    }
}
