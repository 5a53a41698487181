//! Stateless response templates.
//!
//! Every function maps one structured result onto text; no branching beyond
//! what the result shape dictates. Provider failures all render through the
//! same `unavailable` line regardless of cause.

use fitness_agent_core::{
    Exercise, Motivation, NormalizedMeasurement, NutritionFacts, ProviderError, UnitSystem,
};
use fitness_agent_tools::BmiRecord;

pub fn empty_input() -> String {
    "Please enter a message!".to_string()
}

pub fn greeting(agent_name: &str) -> String {
    format!(
        "👋 **Hello! Welcome to your {agent_name}!** 🏋️‍♀️\n\n\
         I'm here to help you with:\n\
         • 💪 **Workout advice** - Get exercise recommendations\n\
         • 🍎 **Nutrition info** - Learn about food calories and nutrients\n\
         • 📊 **BMI calculation** - Check your body mass index\n\
         • 🌟 **Motivation** - Get inspiring fitness quotes and tips\n\n\
         What would you like to know about today? Just ask me anything fitness-related!"
    )
}

pub fn unknown() -> String {
    "🤔 **I'm not sure how to help with that.**\n\n\
     I can assist you with:\n\
     • **Workouts**: \"Show me chest exercises\" or \"I want to build muscle\"\n\
     • **Nutrition**: \"Calories in chicken breast\" or \"nutrition facts for apple\"\n\
     • **BMI**: \"Calculate my BMI\" or \"I weigh 70kg and I'm 1.75m tall\"\n\
     • **Motivation**: \"I need motivation\" or \"inspire me\"\n\n\
     Please try rephrasing your question, and I'll do my best to help! 💪"
        .to_string()
}

pub fn bmi_prompt() -> String {
    "📊 **BMI Calculator**\n\n\
     I'd be happy to calculate your BMI! Please provide your:\n\
     • Weight (in kg or lbs)\n\
     • Height (in meters, cm, feet, or inches)\n\n\
     Example: \"I weigh 70 kg and I'm 1.75 meters tall\"\n\
     or \"I weigh 154 lbs and I'm 5 feet 9 inches tall\""
        .to_string()
}

pub fn bmi_reprompt() -> String {
    "❌ I couldn't understand your weight and height. Please try again with a format like:\n\
     \"I weigh 70 kg and I'm 1.75 meters tall\" or\n\
     \"I weigh 154 lbs and I'm 5 feet 9 inches tall\""
        .to_string()
}

pub fn bmi_failed() -> String {
    "❌ I couldn't calculate your BMI from those values. \
     Weight and height must be positive numbers - please try again!"
        .to_string()
}

pub fn bmi_result(measurement: &NormalizedMeasurement, record: &BmiRecord) -> String {
    let unit_note = match measurement.unit_system {
        UnitSystem::Metric => "",
        UnitSystem::Imperial => " (converted from imperial)",
    };

    format!(
        "📊 **BMI Calculation Results**\n\n\
         • **Weight:** {weight:.1} kg{unit_note}\n\
         • **Height:** {height:.2} m{unit_note}\n\
         • **BMI:** {bmi}\n\
         • **Category:** {category}\n\
         • **Description:** {description}\n\n\
         **Health Information:**\n\
         • **Risks:** {risks}\n\n\
         **Recommendations:**\n\
         • {recommendation}\n\n\
         *Note: BMI is a general indicator and may not account for muscle mass, \
         bone density, and other factors. Consult a healthcare provider for \
         personalized advice.*",
        weight = measurement.weight_kg,
        height = measurement.height_m,
        bmi = record.bmi,
        category = record.category.title(),
        description = record.description,
        risks = record.risks,
        recommendation = record.recommendation,
    )
}

fn nutrient(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v}{unit}"),
        None => "N/A".to_string(),
    }
}

pub fn nutrition(facts: &NutritionFacts) -> String {
    let mut response = format!(
        "🍎 **Nutrition Information for {}**\n\n",
        title_case(&facts.name)
    );

    match facts.serving_size_g {
        Some(serving) => response.push_str(&format!("📊 **Per {serving}g serving:**\n")),
        None => response.push_str("📊 **Nutritional Information:**\n"),
    }

    response.push_str(&format!(
        "• **Calories:** {}\n",
        nutrient(facts.calories, " kcal")
    ));
    response.push_str(&format!(
        "• **Protein:** {}\n",
        nutrient(facts.protein_g, "g")
    ));
    response.push_str(&format!(
        "• **Carbohydrates:** {}\n",
        nutrient(facts.carbohydrates_total_g, "g")
    ));
    if let Some(fiber) = facts.fiber_g {
        response.push_str(&format!("  - Fiber: {fiber}g\n"));
    }
    if let Some(sugar) = facts.sugar_g {
        response.push_str(&format!("  - Sugar: {sugar}g\n"));
    }
    response.push_str(&format!(
        "• **Fat:** {}\n",
        nutrient(facts.fat_total_g, "g")
    ));
    if let Some(saturated) = facts.fat_saturated_g {
        response.push_str(&format!("  - Saturated: {saturated}g\n"));
    }
    response.push_str(&format!(
        "• **Sodium:** {}\n",
        nutrient(facts.sodium_mg, "mg")
    ));
    response.push_str(&format!(
        "• **Potassium:** {}\n",
        nutrient(facts.potassium_mg, "mg")
    ));
    response.push_str(&format!(
        "• **Cholesterol:** {}\n",
        nutrient(facts.cholesterol_mg, "mg")
    ));

    response.push_str(
        "\n💡 **Nutrition Tips:**\n\
         • Choose lean protein sources for muscle building\n\
         • Include variety in your diet for balanced nutrition\n\
         • Stay hydrated and eat whole foods when possible\n",
    );

    response
}

pub fn exercises(exercises: &[Exercise]) -> String {
    if exercises.is_empty() {
        return "❌ No exercises found.".to_string();
    }

    let mut response = "💪 **Recommended Exercises:**\n\n".to_string();
    for (i, exercise) in exercises.iter().enumerate() {
        response.push_str(&format!("**{}. {}**\n", i + 1, title_case(&exercise.name)));
        response.push_str(&format!(
            "• **Type:** {}\n",
            title_case(&exercise.exercise_type)
        ));
        response.push_str(&format!(
            "• **Target Muscle:** {}\n",
            title_case(&exercise.muscle)
        ));
        response.push_str(&format!(
            "• **Equipment:** {}\n",
            title_case(&exercise.equipment)
        ));
        response.push_str(&format!(
            "• **Difficulty:** {}\n",
            title_case(&exercise.difficulty)
        ));
        response.push_str(&format!(
            "• **Instructions:** {}\n\n",
            exercise.instructions
        ));
    }

    response
}

pub fn motivation(motivation: &Motivation) -> String {
    format!(
        "🌟 **Motivation Boost** 🌟\n\n\
         {message}\n\n\
         **Quick Encouragement:**\n{encouragement}\n\n\
         **Success Tip:**\n{tip}\n\n\
         💪 **You're doing great! Keep up the amazing work!** 💪",
        message = motivation.message,
        encouragement = motivation.encouragement,
        tip = motivation.tip,
    )
}

/// Uniform fallback line for any collaborator failure; the cause is logged,
/// never rendered beyond the reason text.
pub fn unavailable(error: &ProviderError) -> String {
    format!("❌ {}", error.reason())
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_interpolates_the_agent_name() {
        let text = greeting("AI Fitness Assistant");
        assert!(text.contains("Welcome to your AI Fitness Assistant!"));
        assert!(text.contains("BMI calculation"));
    }

    #[test]
    fn bmi_result_renders_all_record_fields() {
        let measurement = NormalizedMeasurement {
            weight_kg: 70.0,
            height_m: 1.75,
            unit_system: UnitSystem::Metric,
        };
        let record = fitness_agent_tools::bmi::compute(70.0, 1.75).unwrap();
        let text = bmi_result(&measurement, &record);
        assert!(text.contains("22.86"));
        assert!(text.contains("**Category:** Normal"));
        assert!(text.contains("Maintain your current weight"));
    }

    #[test]
    fn nutrition_renders_missing_fields_as_na() {
        let facts = NutritionFacts {
            name: "apple".to_string(),
            sugar_g: Some(10.3),
            ..Default::default()
        };
        let text = nutrition(&facts);
        assert!(text.contains("Nutrition Information for Apple"));
        assert!(text.contains("**Calories:** N/A"));
        assert!(text.contains("Sugar: 10.3g"));
        assert!(text.contains("Nutrition Tips"));
    }

    #[test]
    fn exercise_list_is_numbered_and_titled() {
        let list = vec![Exercise {
            name: "push-ups".to_string(),
            exercise_type: "strength".to_string(),
            muscle: "chest".to_string(),
            equipment: "body_only".to_string(),
            difficulty: "beginner".to_string(),
            instructions: "Lower and push back up.".to_string(),
        }];
        let text = exercises(&list);
        assert!(text.contains("**1. Push-ups**"));
        assert!(text.contains("**Type:** Strength"));
    }

    #[test]
    fn empty_exercise_list_has_its_own_message() {
        assert_eq!(exercises(&[]), "❌ No exercises found.");
    }

    #[test]
    fn unavailable_renders_the_reason_uniformly() {
        let network = ProviderError::new("request failed: timeout");
        let missing_key = ProviderError::new("API key not configured");
        assert!(unavailable(&network).starts_with("❌ "));
        assert!(unavailable(&missing_key).starts_with("❌ "));
    }
}
