//! Measurement computation module
//!
//! Turns raw multi-source scale readings into one daily series of actual and
//! trend values, plus the chart projections and statistics derived from it.

pub mod conversion;
pub mod data_points;
pub mod grouping;
pub mod interpolation;
pub mod measurements;
pub mod stats;
pub mod trend;
pub mod units;

pub use conversion::convert_to_source_measurements;
pub use data_points::compute_data_points;
pub use grouping::{filter_and_group_fat_measurements, group_and_select_first_by_day};
pub use interpolation::{
    fill_calendar_gaps, interpolate_fat_measurements, interpolate_weight_measurements, GapStep,
    SyntheticTime,
};
pub use measurements::compute_measurements;
pub use stats::{compute_active_slope, compute_deltas, compute_weight_slope};
pub use trend::{compute_fat_trends, compute_weight_trends, ExponentialTrend, TREND_SMOOTHING_FACTOR};
pub use units::{WeightUnit, LB_PER_KG};
