//! Body-measurement types and unit handling.

use serde::{Deserialize, Serialize};

/// Pounds to kilograms.
pub const KG_PER_POUND: f64 = 0.453592;
/// Inches to meters.
pub const METERS_PER_INCH: f64 = 0.0254;
/// Whole feet to inches.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Plausible human height after normalization, in meters.
pub const MIN_HEIGHT_M: f64 = 0.3;
pub const MAX_HEIGHT_M: f64 = 3.0;

/// Unit system governing every numeric measurement token in one utterance.
/// Inferred at utterance level, never per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

/// Unit token attached to a captured measurement value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    Kg,
    Lb,
    M,
    Cm,
    Ft,
    In,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementRole {
    Weight,
    Height,
}

/// Raw value captured from the utterance, before unit-system resolution.
///
/// Transient: produced and consumed inside the extractor, never persisted.
/// The unit is absent when the labeled height form matched without an
/// explicit unit token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementCandidate {
    pub value: f64,
    pub unit: Option<MeasurementUnit>,
    pub role: MeasurementRole,
}

/// Weight and height normalized to metric, plus the unit system they were
/// expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMeasurement {
    pub weight_kg: f64,
    pub height_m: f64,
    pub unit_system: UnitSystem,
}

impl NormalizedMeasurement {
    /// Sanity bound from the data model: positive values, height within the
    /// plausible human range.
    pub fn is_plausible(&self) -> bool {
        self.weight_kg > 0.0 && (MIN_HEIGHT_M..=MAX_HEIGHT_M).contains(&self.height_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plausibility_bounds() {
        let ok = NormalizedMeasurement {
            weight_kg: 70.0,
            height_m: 1.75,
            unit_system: UnitSystem::Metric,
        };
        assert!(ok.is_plausible());

        let too_tall = NormalizedMeasurement {
            height_m: 3.5,
            ..ok
        };
        assert!(!too_tall.is_plausible());

        let negative_weight = NormalizedMeasurement {
            weight_kg: -1.0,
            ..ok
        };
        assert!(!negative_weight.is_plausible());

        let zero_height = NormalizedMeasurement {
            height_m: 0.0,
            ..ok
        };
        assert!(!zero_height.is_plausible());
    }
}
