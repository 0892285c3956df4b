//! Weight units and conversion constants
//!
//! Providers report weight in kilograms. Profiles choose whether values are
//! presented in kilograms or pounds.

use serde::{Deserialize, Serialize};

use crate::models::ProfileData;

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462262;

/// Unit that computed weights are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

impl WeightUnit {
    /// Unit requested by a profile
    pub fn for_profile(profile: &ProfileData) -> Self {
        if profile.use_metric {
            WeightUnit::Kilograms
        } else {
            WeightUnit::Pounds
        }
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lb",
        }
    }

    /// Multiplier applied to a kilogram reading
    pub fn factor_from_kg(&self) -> f64 {
        match self {
            WeightUnit::Kilograms => 1.0,
            WeightUnit::Pounds => LB_PER_KG,
        }
    }

    /// Convert a kilogram reading into this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        kg * self.factor_from_kg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_to_pounds() {
        let lb = WeightUnit::Pounds.from_kg(100.0);
        assert!((lb - 220.462262).abs() < 1e-6);
    }

    #[test]
    fn test_kg_stays_kg() {
        assert_eq!(WeightUnit::Kilograms.from_kg(100.0), 100.0);
    }

    #[test]
    fn test_unit_for_profile() {
        let metric = ProfileData {
            use_metric: true,
            ..Default::default()
        };
        assert_eq!(WeightUnit::for_profile(&metric), WeightUnit::Kilograms);
        assert_eq!(
            WeightUnit::for_profile(&ProfileData::default()),
            WeightUnit::Pounds
        );
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(WeightUnit::Kilograms.label(), "kg");
        assert_eq!(WeightUnit::Pounds.label(), "lb");
    }
}
