//! Profile model
//!
//! The subset of a user's profile that affects measurement computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User profile settings read by the pipeline
///
/// Display-only fields (first name, goal weight, sharing) may be present in
/// the JSON and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub use_metric: bool,
    /// Hours after midnight at which the user's day begins (0-23)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_start_offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_start: Option<NaiveDate>,
    #[serde(default)]
    pub hide_data_before_start: bool,
}

impl ProfileData {
    /// Day-start offset in hours, clamped into 0-23
    pub fn day_start_hours(&self) -> i64 {
        let offset = self.day_start_offset.unwrap_or(0);
        if !(0..=23).contains(&offset) {
            tracing::warn!(
                "Day start offset {} is outside 0-23, clamping",
                offset
            );
        }
        offset.clamp(0, 23)
    }

    /// First date to keep, if the profile hides data before its goal start
    pub fn visible_from(&self) -> Option<NaiveDate> {
        if self.hide_data_before_start {
            self.goal_start
        } else {
            None
        }
    }
}
