//! Pure BMI engine.
//!
//! No I/O, no state. Inputs are already-normalized metric values (or
//! imperial via the convenience wrapper); the output record is derived once
//! and never mutated.

use serde::Serialize;

use fitness_agent_core::measurement::{KG_PER_POUND, METERS_PER_INCH};
use fitness_agent_core::{Error, Result};

/// BMI bands, half-open on the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Band lookup: `[lo, hi)` on every boundary, so 18.5 is normal and
    /// 25.0 is overweight.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    /// Display name for responses.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Underweight => "Below normal weight",
            Self::Normal => "Normal weight range",
            Self::Overweight => "Above normal weight",
            Self::Obese => "Significantly above normal weight",
        }
    }

    fn risks(&self) -> &'static str {
        match self {
            Self::Underweight => {
                "May indicate malnutrition, eating disorders, or other health issues"
            }
            Self::Normal => "Lowest risk of weight-related health problems",
            Self::Overweight => {
                "Increased risk of heart disease, diabetes, and high blood pressure"
            }
            Self::Obese => "High risk of heart disease, diabetes, stroke, and other health issues",
        }
    }

    fn recommendation(&self) -> &'static str {
        match self {
            Self::Underweight => {
                "Consider consulting a healthcare provider. Focus on healthy weight gain \
                 through balanced nutrition and strength training."
            }
            Self::Normal => {
                "Maintain your current weight through regular exercise and balanced nutrition."
            }
            Self::Overweight => {
                "Consider gradual weight loss through increased physical activity and \
                 calorie reduction."
            }
            Self::Obese => {
                "Consult a healthcare provider. Focus on sustainable weight loss through \
                 diet and exercise."
            }
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived BMI result with its advice fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiRecord {
    /// Rounded to two decimals.
    pub bmi: f64,
    pub category: BmiCategory,
    pub description: &'static str,
    pub risks: &'static str,
    pub recommendation: &'static str,
}

/// Compute a BMI record from metric inputs.
///
/// Non-positive inputs are a validation error, never clamped.
pub fn compute(weight_kg: f64, height_m: f64) -> Result<BmiRecord> {
    if weight_kg <= 0.0 || height_m <= 0.0 {
        return Err(Error::InvalidMeasurement(
            "weight and height must be positive numbers".to_string(),
        ));
    }

    let bmi = round2(weight_kg / (height_m * height_m));
    let category = BmiCategory::from_bmi(bmi);

    Ok(BmiRecord {
        bmi,
        category,
        description: category.description(),
        risks: category.risks(),
        recommendation: category.recommendation(),
    })
}

/// Imperial convenience wrapper: pounds and inches, converted then delegated.
pub fn compute_imperial(weight_lbs: f64, height_inches: f64) -> Result<BmiRecord> {
    if weight_lbs <= 0.0 || height_inches <= 0.0 {
        return Err(Error::InvalidMeasurement(
            "weight and height must be positive numbers".to_string(),
        ));
    }
    compute(weight_lbs * KG_PER_POUND, height_inches * METERS_PER_INCH)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_reference_case() {
        let record = compute(70.0, 1.75).unwrap();
        assert_eq!(record.bmi, 22.86);
        assert_eq!(record.category, BmiCategory::Normal);
    }

    #[test]
    fn imperial_matches_metric_equivalent() {
        let record = compute_imperial(154.0, 69.0).unwrap();
        assert_eq!(record.category, BmiCategory::Normal);
        let metric = compute(154.0 * 0.453592, 69.0 * 0.0254).unwrap();
        assert_eq!(record.bmi, metric.bmi);
    }

    #[test]
    fn category_boundaries_are_half_open() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn non_positive_inputs_are_rejected() {
        assert!(matches!(
            compute(0.0, 1.75),
            Err(Error::InvalidMeasurement(_))
        ));
        assert!(matches!(
            compute(70.0, 0.0),
            Err(Error::InvalidMeasurement(_))
        ));
        assert!(matches!(
            compute(-70.0, 1.75),
            Err(Error::InvalidMeasurement(_))
        ));
        assert!(matches!(
            compute_imperial(154.0, -69.0),
            Err(Error::InvalidMeasurement(_))
        ));
    }

    #[test]
    fn bmi_is_rounded_to_two_decimals() {
        let record = compute(68.0, 1.73).unwrap();
        let raw = 68.0 / (1.73 * 1.73);
        assert!((record.bmi - raw).abs() < 0.005);
        assert_eq!(record.bmi, (raw * 100.0).round() / 100.0);
    }

    #[test]
    fn advice_fields_follow_the_category() {
        let record = compute(45.0, 1.75).unwrap();
        assert_eq!(record.category, BmiCategory::Underweight);
        assert!(record.risks.contains("malnutrition"));
        assert!(record.recommendation.contains("healthy weight gain"));
    }
}
