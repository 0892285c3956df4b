//! Chart series models
//!
//! A dashboard shows one series at a time. `Mode` selects which, `DataPoint`
//! is a single day of that series and `Delta` a trend change over a period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which series is being charted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Weight,
    FatPercent,
    FatMass,
    LeanMass,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Weight => "weight",
            Mode::FatPercent => "fatpercent",
            Mode::FatMass => "fatmass",
            Mode::LeanMass => "leanmass",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "weight" => Some(Mode::Weight),
            "fatpercent" | "fat%" | "bodyfat" => Some(Mode::FatPercent),
            "fatmass" => Some(Mode::FatMass),
            "leanmass" => Some(Mode::LeanMass),
            _ => None,
        }
    }

    /// Decimal places a value is shown with (fat percent is a 0-1 ratio)
    pub fn display_precision(&self) -> i32 {
        match self {
            Mode::FatPercent => 3,
            _ => 1,
        }
    }

    /// Number of trailing points used for the slope of this series
    pub fn slope_window(&self) -> usize {
        match self {
            Mode::Weight => 14,
            _ => 28,
        }
    }
}

/// One day of the selected series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub date: NaiveDate,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    pub trend: f64,
    pub is_interpolated: bool,
}

/// Trend change between the latest point and an earlier one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub period: i64, // days
    pub description: String,
    pub delta: f64,
}
