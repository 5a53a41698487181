//! Data shapes returned by external collaborators.
//!
//! These structs mirror the provider wire formats; the engine only formats
//! them, it never branches on their contents.

use serde::{Deserialize, Deserializer, Serialize};

/// Nutrition facts for one food item, per serving.
///
/// The remote provider substitutes a placeholder string for fields reserved
/// to paid tiers; those deserialize to `None` instead of failing the whole
/// payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub serving_size_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbohydrates_total_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat_total_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat_saturated_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium_mg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub potassium_mg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cholesterol_mg: Option<f64>,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// One exercise entry, either from the remote provider or the local
/// fallback table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: String,
    pub muscle: String,
    pub equipment: String,
    pub difficulty: String,
    pub instructions: String,
}

/// Quote/encouragement/tip triple from the motivational content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motivation {
    pub message: String,
    pub encouragement: String,
    pub tip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutrition_facts_accept_numeric_fields() {
        let json = r#"{
            "name": "chicken breast",
            "calories": 165.0,
            "protein_g": 31.0,
            "serving_size_g": 100.0
        }"#;
        let facts: NutritionFacts = serde_json::from_str(json).unwrap();
        assert_eq!(facts.name, "chicken breast");
        assert_eq!(facts.calories, Some(165.0));
        assert_eq!(facts.protein_g, Some(31.0));
        assert_eq!(facts.sugar_g, None);
    }

    #[test]
    fn premium_placeholder_strings_become_none() {
        let json = r#"{
            "name": "apple",
            "calories": "Only available for premium subscribers.",
            "sugar_g": 10.3
        }"#;
        let facts: NutritionFacts = serde_json::from_str(json).unwrap();
        assert_eq!(facts.calories, None);
        assert_eq!(facts.sugar_g, Some(10.3));
    }

    #[test]
    fn exercise_wire_field_is_type() {
        let json = r#"{
            "name": "Push-ups",
            "type": "strength",
            "muscle": "chest",
            "equipment": "body_only",
            "difficulty": "beginner",
            "instructions": "Lower and push back up."
        }"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.exercise_type, "strength");
    }
}
