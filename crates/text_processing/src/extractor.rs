//! Measurement extraction from free text.
//!
//! Parses a raw utterance for a weight and a height expression, infers the
//! unit system, and normalizes to metric (kg, meters). Never fails on
//! malformed text: anything that cannot be read confidently comes back as
//! `None` and the dialogue layer re-prompts.

use once_cell::sync::Lazy;
use regex::Regex;

use fitness_agent_core::measurement::{
    MeasurementCandidate, MeasurementRole, MeasurementUnit, NormalizedMeasurement, UnitSystem,
    INCHES_PER_FOOT, KG_PER_POUND, METERS_PER_INCH,
};

/// Weight patterns, in priority order: the labeled form (preceded by a
/// "weight"/"weigh" word) wins over a bare number+unit anywhere else in the
/// utterance.
static WEIGHT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(?:weight|weigh)\s*(\d+(?:\.\d+)?)\s*(kg|kilograms?|lbs?|pounds?)")
            .unwrap(),
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(kg|kilograms?|lbs?|pounds?)").unwrap(),
    ]
});

/// Height patterns, labeled form first. The labeled form tolerates a missing
/// unit token ("I'm 1.75"); the bare form requires one.
static HEIGHT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r#"(?i)(?:height|tall|i'?m)\s*(\d+\.?\d*)\s*(m|meters?|cm|centimeters?|ft|feet|in|inches?|'|")?"#)
            .unwrap(),
        Regex::new(r#"(?i)(\d+\.?\d*)\s*(m|meters?|cm|centimeters?|ft|feet|in|inches?|'|")"#)
            .unwrap(),
    ]
});

/// Imperial markers, matched at word boundaries. One hit anywhere in the
/// utterance switches both fields to imperial.
static IMPERIAL_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:lbs|pounds|feet|ft|inches|inch|in)\b").unwrap());

/// Parses weight/height expressions out of a single utterance.
#[derive(Debug, Default)]
pub struct MeasurementExtractor;

impl MeasurementExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract a normalized measurement, or `None` when either field is
    /// missing or the result fails the plausibility bound. Absence is a
    /// normal outcome, not an error.
    pub fn extract(&self, utterance: &str) -> Option<NormalizedMeasurement> {
        let weight = capture(&WEIGHT_PATTERNS, utterance, MeasurementRole::Weight)?;
        let height = capture(&HEIGHT_PATTERNS, utterance, MeasurementRole::Height)?;

        let unit_system = infer_unit_system(utterance);
        let normalized = normalize(weight.value, height.value, unit_system);

        if !normalized.is_plausible() {
            tracing::debug!(
                weight_kg = normalized.weight_kg,
                height_m = normalized.height_m,
                "extracted measurement rejected by sanity bound"
            );
            return None;
        }

        Some(normalized)
    }
}

/// Try each pattern in order; the first one that captures wins. Overlapping
/// numeric tokens are disambiguated purely by which group captured them.
fn capture(patterns: &[Regex], utterance: &str, role: MeasurementRole) -> Option<MeasurementCandidate> {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(utterance) {
            if let Some(value) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) {
                let unit = caps.get(2).and_then(|m| parse_unit(m.as_str()));
                return Some(MeasurementCandidate { value, unit, role });
            }
        }
    }
    None
}

fn parse_unit(token: &str) -> Option<MeasurementUnit> {
    match token.to_lowercase().as_str() {
        "kg" | "kilogram" | "kilograms" => Some(MeasurementUnit::Kg),
        "lb" | "lbs" | "pound" | "pounds" => Some(MeasurementUnit::Lb),
        "m" | "meter" | "meters" => Some(MeasurementUnit::M),
        "cm" | "centimeter" | "centimeters" => Some(MeasurementUnit::Cm),
        "ft" | "feet" | "'" => Some(MeasurementUnit::Ft),
        "in" | "inch" | "inches" | "\"" => Some(MeasurementUnit::In),
        _ => None,
    }
}

/// Utterance-level unit inference: any pound or foot/inch token makes the
/// whole turn imperial. One unit system governs both fields.
fn infer_unit_system(utterance: &str) -> UnitSystem {
    if IMPERIAL_MARKERS.is_match(utterance) {
        UnitSystem::Imperial
    } else {
        UnitSystem::Metric
    }
}

/// Normalization heuristics; the order of the checks is load-bearing.
///
/// Metric heights above 10 are read as centimeters, below 3 as meters
/// already. Imperial heights below 10 are read as whole feet and multiplied
/// out to inches; this deliberately does not combine with a separate inches
/// term, so "5 feet 9 inches" keeps only the feet (see the extractor tests).
fn normalize(weight: f64, height: f64, unit_system: UnitSystem) -> NormalizedMeasurement {
    match unit_system {
        UnitSystem::Metric => {
            let height_m = if height > 10.0 { height / 100.0 } else { height };
            NormalizedMeasurement {
                weight_kg: weight,
                height_m,
                unit_system,
            }
        }
        UnitSystem::Imperial => {
            let height_in = if height < 10.0 {
                height * INCHES_PER_FOOT
            } else {
                height
            };
            NormalizedMeasurement {
                weight_kg: weight * KG_PER_POUND,
                height_m: height_in * METERS_PER_INCH,
                unit_system,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<NormalizedMeasurement> {
        MeasurementExtractor::new().extract(text)
    }

    #[test]
    fn metric_labeled_forms() {
        let m = extract("I weigh 70 kg and I'm 1.75 meters tall").unwrap();
        assert_eq!(m.unit_system, UnitSystem::Metric);
        assert_eq!(m.weight_kg, 70.0);
        assert_eq!(m.height_m, 1.75);
    }

    #[test]
    fn metric_centimeters_are_scaled_down() {
        let m = extract("weight 82kg, height 178 cm").unwrap();
        assert_eq!(m.unit_system, UnitSystem::Metric);
        assert_eq!(m.weight_kg, 82.0);
        assert!((m.height_m - 1.78).abs() < 1e-9);
    }

    #[test]
    fn bare_number_plus_unit_fallback() {
        let m = extract("70 kg and 175 cm please").unwrap();
        assert_eq!(m.weight_kg, 70.0);
        assert!((m.height_m - 1.75).abs() < 1e-9);
    }

    #[test]
    fn imperial_round_trip() {
        let m = extract("I weigh 154 lbs and I'm 69 inches tall").unwrap();
        assert_eq!(m.unit_system, UnitSystem::Imperial);
        assert!((m.weight_kg - 69.85).abs() < 0.01);
        assert!((m.height_m - 1.75).abs() < 0.01);
    }

    #[test]
    fn whole_feet_are_expanded_to_inches() {
        let m = extract("I weigh 154 lbs and I'm 6 feet tall").unwrap();
        assert!((m.height_m - 72.0 * 0.0254).abs() < 1e-9);
    }

    // Known limitation, preserved on purpose: only the first height numeral
    // is captured, so a combined feet-and-inches phrase loses the inches.
    #[test]
    fn feet_and_inches_phrasing_keeps_feet_only() {
        let m = extract("I weigh 154 lbs and I'm 5 feet 9 inches tall").unwrap();
        assert!((m.height_m - 60.0 * 0.0254).abs() < 1e-9);
    }

    #[test]
    fn missing_height_yields_none() {
        assert!(extract("I weigh 70 kg").is_none());
    }

    #[test]
    fn missing_weight_yields_none() {
        assert!(extract("I'm 1.75 meters tall").is_none());
    }

    #[test]
    fn plain_chatter_yields_none() {
        assert!(extract("Calculate my BMI").is_none());
        assert!(extract("").is_none());
    }

    #[test]
    fn implausible_height_is_rejected() {
        // "i'm 25" captures an unlabeled height of 25, read as centimeters;
        // 0.25 m falls below the plausibility floor.
        assert!(extract("I weigh 70 kg and i'm 25").is_none());
    }

    #[test]
    fn unit_inference_is_word_bounded() {
        // "in" must match as a token, not inside other words.
        let m = extract("bring my weight 70 kg and height 175 cm into range").unwrap();
        assert_eq!(m.unit_system, UnitSystem::Metric);
    }
}
