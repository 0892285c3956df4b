//! TrendWeight Library
//!
//! Core computation of daily weight and body-composition trends from
//! connected scale data.

pub mod computations;
pub mod error;
pub mod input;
pub mod models;

pub use computations::compute_measurements;
pub use error::{TrendError, TrendResult};
