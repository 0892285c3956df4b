//! Data models
//!
//! Serializable types exchanged with the computation pipeline.

mod chart;
mod measurement;
mod profile;
mod source;

pub use chart::{DataPoint, Delta, Mode};
pub use measurement::Measurement;
pub use profile::ProfileData;
pub use source::{RawMeasurement, SourceData, SourceMeasurement, INTERPOLATED_SOURCE};
