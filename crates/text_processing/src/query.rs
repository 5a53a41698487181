//! Query-detail extraction for nutrition and workout turns.
//!
//! Once the classifier has decided the intent, these helpers pull the
//! payload out of the utterance: the food item for nutrition lookups, and
//! the muscle/type filter for exercise lookups.

use fitness_agent_core::ExerciseFilter;

/// Filler words removed from nutrition queries before the remainder is
/// treated as the food item.
const NUTRITION_STOPWORDS: &[&str] = &[
    "calories",
    "nutrition",
    "nutrients",
    "protein",
    "carbs",
    "fat",
    "in",
    "for",
    "of",
    "how",
    "much",
    "many",
    "what",
    "about",
];

/// Muscle-group synonyms, scanned in order; the first hit wins.
const MUSCLE_SYNONYMS: &[(&str, &str)] = &[
    ("chest", "chest"),
    ("pecs", "chest"),
    ("biceps", "biceps"),
    ("bicep", "biceps"),
    ("arms", "biceps"),
    ("triceps", "triceps"),
    ("tricep", "triceps"),
    ("shoulders", "shoulders"),
    ("shoulder", "shoulders"),
    ("back", "lats"),
    ("lats", "lats"),
    ("legs", "quadriceps"),
    ("leg", "quadriceps"),
    ("quads", "quadriceps"),
    ("thighs", "quadriceps"),
    ("glutes", "glutes"),
    ("butt", "glutes"),
    ("calves", "calves"),
    ("calf", "calves"),
    ("abs", "abdominals"),
    ("core", "abdominals"),
    ("abdominals", "abdominals"),
];

/// Exercise-type synonyms, same first-hit rule.
const TYPE_SYNONYMS: &[(&str, &str)] = &[
    ("cardio", "cardio"),
    ("running", "cardio"),
    ("cycling", "cardio"),
    ("strength", "strength"),
    ("weights", "strength"),
    ("lifting", "strength"),
    ("stretching", "stretching"),
    ("flexibility", "stretching"),
    ("plyometrics", "plyometrics"),
    ("hiit", "plyometrics"),
];

/// Strip nutrition filler words and short tokens; what remains is the food
/// item. Falls back to the whole utterance when stripping removes
/// everything, so the provider still gets a query to try.
pub fn extract_food_item(utterance: &str) -> String {
    let lowered = utterance.to_lowercase();
    let food_words: Vec<&str> = lowered
        .split_whitespace()
        .filter(|word| !NUTRITION_STOPWORDS.contains(word) && word.len() > 2)
        .collect();

    if food_words.is_empty() {
        utterance.to_string()
    } else {
        food_words.join(" ")
    }
}

/// Scan the utterance for muscle-group and exercise-type mentions. Both
/// fields are optional; an empty filter means "no preference expressed".
pub fn extract_exercise_filter(utterance: &str) -> ExerciseFilter {
    let lowered = utterance.to_lowercase();

    let muscle = MUSCLE_SYNONYMS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, group)| group.to_string());

    let exercise_type = TYPE_SYNONYMS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, ty)| ty.to_string());

    ExerciseFilter {
        muscle,
        exercise_type,
        difficulty: None,
    }
}
