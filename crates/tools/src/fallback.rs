//! Static exercise table used when the remote provider is unavailable.
//!
//! Bodyweight-first selections per muscle bucket. The bucket keys are
//! coarser than the remote API's muscle taxonomy, so lookups go through a
//! synonym mapping first.

use once_cell::sync::Lazy;

use fitness_agent_core::{Exercise, ExerciseFilter};

/// How many entries a single response may carry.
const MAX_RESULTS: usize = 5;

fn exercise(
    name: &str,
    exercise_type: &str,
    muscle: &str,
    equipment: &str,
    difficulty: &str,
    instructions: &str,
) -> Exercise {
    Exercise {
        name: name.to_string(),
        exercise_type: exercise_type.to_string(),
        muscle: muscle.to_string(),
        equipment: equipment.to_string(),
        difficulty: difficulty.to_string(),
        instructions: instructions.to_string(),
    }
}

static EXERCISE_TABLE: Lazy<Vec<(&'static str, Vec<Exercise>)>> = Lazy::new(|| {
    vec![
        (
            "chest",
            vec![
                exercise(
                    "Push-ups",
                    "strength",
                    "chest",
                    "body_only",
                    "beginner",
                    "Start in a plank position with hands slightly wider than shoulders. Lower your body until chest nearly touches the floor, then push back up. Keep core tight throughout the movement.",
                ),
                exercise(
                    "Incline Push-ups",
                    "strength",
                    "chest",
                    "body_only",
                    "beginner",
                    "Place hands on an elevated surface like a bench or step. Perform push-up motion, lowering chest toward the elevated surface. This variation is easier than standard push-ups.",
                ),
                exercise(
                    "Chest Dips",
                    "strength",
                    "chest",
                    "body_only",
                    "intermediate",
                    "Using parallel bars or sturdy chairs, support your body weight on straight arms. Lower your body by bending arms until shoulders are below elbows, then push back up.",
                ),
                exercise(
                    "Wide-Grip Push-ups",
                    "strength",
                    "chest",
                    "body_only",
                    "beginner",
                    "Similar to regular push-ups but with hands placed wider than shoulder-width. This targets the outer chest muscles more effectively.",
                ),
                exercise(
                    "Diamond Push-ups",
                    "strength",
                    "chest",
                    "body_only",
                    "advanced",
                    "Form a diamond shape with your hands by touching thumbs and index fingers together. Perform push-ups in this position to target triceps and inner chest.",
                ),
            ],
        ),
        (
            "biceps",
            vec![
                exercise(
                    "Bicep Curls",
                    "strength",
                    "biceps",
                    "dumbbells",
                    "beginner",
                    "Stand with dumbbells at your sides, palms facing forward. Curl weights up toward shoulders, squeezing biceps at the top, then slowly lower back down.",
                ),
                exercise(
                    "Hammer Curls",
                    "strength",
                    "biceps",
                    "dumbbells",
                    "beginner",
                    "Hold dumbbells with neutral grip (palms facing each other). Curl weights up toward shoulders while maintaining neutral grip throughout the movement.",
                ),
                exercise(
                    "Chin-ups",
                    "strength",
                    "biceps",
                    "pull_up_bar",
                    "intermediate",
                    "Hang from pull-up bar with underhand grip, hands shoulder-width apart. Pull your body up until chin clears the bar, then lower with control.",
                ),
                exercise(
                    "Resistance Band Curls",
                    "strength",
                    "biceps",
                    "resistance_bands",
                    "beginner",
                    "Stand on resistance band with feet hip-width apart. Hold handles and curl up toward shoulders, maintaining tension throughout the movement.",
                ),
            ],
        ),
        (
            "legs",
            vec![
                exercise(
                    "Squats",
                    "strength",
                    "quadriceps",
                    "body_only",
                    "beginner",
                    "Stand with feet shoulder-width apart. Lower your body by bending knees and hips as if sitting back into a chair. Keep chest up and knees behind toes.",
                ),
                exercise(
                    "Lunges",
                    "strength",
                    "quadriceps",
                    "body_only",
                    "beginner",
                    "Step forward with one leg, lowering hips until both knees are bent at 90 degrees. Push back to starting position and repeat with other leg.",
                ),
                exercise(
                    "Wall Sit",
                    "strength",
                    "quadriceps",
                    "body_only",
                    "beginner",
                    "Lean back against wall with feet shoulder-width apart and about 2 feet from wall. Slide down until thighs are parallel to floor. Hold position.",
                ),
                exercise(
                    "Calf Raises",
                    "strength",
                    "calves",
                    "body_only",
                    "beginner",
                    "Stand with balls of feet on elevated surface, heels hanging off. Rise up on toes as high as possible, then slowly lower heels below the starting position.",
                ),
            ],
        ),
        (
            "back",
            vec![
                exercise(
                    "Pull-ups",
                    "strength",
                    "lats",
                    "pull_up_bar",
                    "intermediate",
                    "Hang from pull-up bar with overhand grip, hands wider than shoulders. Pull body up until chin clears bar, then lower with control.",
                ),
                exercise(
                    "Superman",
                    "strength",
                    "lats",
                    "body_only",
                    "beginner",
                    "Lie face down with arms extended overhead. Simultaneously lift chest, arms, and legs off the ground, holding briefly before lowering back down.",
                ),
                exercise(
                    "Bird Dog",
                    "strength",
                    "lats",
                    "body_only",
                    "beginner",
                    "Start on hands and knees. Extend opposite arm and leg simultaneously, hold briefly, then return to start. Repeat with other arm and leg.",
                ),
            ],
        ),
        (
            "abs",
            vec![
                exercise(
                    "Plank",
                    "strength",
                    "abdominals",
                    "body_only",
                    "beginner",
                    "Hold a push-up position with forearms on the ground. Keep body in straight line from head to heels, engaging core muscles throughout.",
                ),
                exercise(
                    "Crunches",
                    "strength",
                    "abdominals",
                    "body_only",
                    "beginner",
                    "Lie on back with knees bent, hands behind head. Lift shoulders off ground by contracting abs, then slowly lower back down.",
                ),
                exercise(
                    "Mountain Climbers",
                    "cardio",
                    "abdominals",
                    "body_only",
                    "intermediate",
                    "Start in plank position. Quickly alternate bringing knees toward chest in a running motion while maintaining plank position.",
                ),
                exercise(
                    "Russian Twists",
                    "strength",
                    "abdominals",
                    "body_only",
                    "intermediate",
                    "Sit with knees bent, lean back slightly. Rotate torso left and right, touching ground beside hips with hands. Keep feet off ground for added difficulty.",
                ),
            ],
        ),
        (
            "shoulders",
            vec![
                exercise(
                    "Pike Push-ups",
                    "strength",
                    "shoulders",
                    "body_only",
                    "intermediate",
                    "Start in downward dog position. Lower head toward ground by bending arms, then push back up. This targets shoulder muscles effectively.",
                ),
                exercise(
                    "Arm Circles",
                    "strength",
                    "shoulders",
                    "body_only",
                    "beginner",
                    "Extend arms out to sides parallel to ground. Make small circles forward for 30 seconds, then backward for 30 seconds. Gradually increase circle size.",
                ),
            ],
        ),
        (
            "cardio",
            vec![
                exercise(
                    "Jumping Jacks",
                    "cardio",
                    "full_body",
                    "body_only",
                    "beginner",
                    "Stand with feet together, arms at sides. Jump while spreading legs shoulder-width apart and raising arms overhead. Jump back to starting position.",
                ),
                exercise(
                    "High Knees",
                    "cardio",
                    "full_body",
                    "body_only",
                    "beginner",
                    "Run in place, bringing knees up toward chest as high as possible. Pump arms naturally and maintain quick tempo.",
                ),
                exercise(
                    "Burpees",
                    "cardio",
                    "full_body",
                    "body_only",
                    "advanced",
                    "Start standing, drop into squat, kick feet back to plank, do push-up, jump feet back to squat, then jump up with arms overhead.",
                ),
            ],
        ),
    ]
});

/// Map remote-API muscle names and common synonyms onto table bucket keys.
/// Arm exercises are grouped under one bucket.
fn bucket_for(muscle: &str) -> &str {
    match muscle {
        "chest" => "chest",
        "arms" | "bicep" | "biceps" | "triceps" => "biceps",
        "legs" | "quads" | "quadriceps" | "glutes" => "legs",
        "back" | "lats" => "back",
        "abs" | "core" | "abdominals" => "abs",
        "shoulders" => "shoulders",
        "cardio" => "cardio",
        other => other,
    }
}

/// Look up exercises matching the filter. An unknown muscle bucket or an
/// over-constrained filter yields an empty list; the caller decides what
/// that means.
pub fn fallback_exercises(filter: &ExerciseFilter) -> Vec<Exercise> {
    let mut selected: Vec<Exercise> = match &filter.muscle {
        Some(muscle) => {
            let bucket = bucket_for(&muscle.to_lowercase()).to_string();
            EXERCISE_TABLE
                .iter()
                .find(|(key, _)| *key == bucket)
                .map(|(_, entries)| entries.clone())
                .unwrap_or_default()
        }
        None => EXERCISE_TABLE
            .iter()
            .flat_map(|(_, entries)| entries.clone())
            .collect(),
    };

    if let Some(exercise_type) = &filter.exercise_type {
        let wanted = exercise_type.to_lowercase();
        selected.retain(|ex| ex.exercise_type.to_lowercase() == wanted);
    }

    if let Some(difficulty) = &filter.difficulty {
        let wanted = difficulty.to_lowercase();
        selected.retain(|ex| ex.difficulty.to_lowercase() == wanted);
    }

    selected.truncate(MAX_RESULTS);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(muscle: Option<&str>, exercise_type: Option<&str>) -> ExerciseFilter {
        ExerciseFilter {
            muscle: muscle.map(str::to_string),
            exercise_type: exercise_type.map(str::to_string),
            difficulty: None,
        }
    }

    #[test]
    fn muscle_lookup_returns_the_bucket() {
        let exercises = fallback_exercises(&filter(Some("chest"), None));
        assert_eq!(exercises.len(), 5);
        assert!(exercises.iter().all(|ex| ex.muscle == "chest"));
    }

    #[test]
    fn synonyms_reach_the_same_bucket() {
        let canonical = fallback_exercises(&filter(Some("lats"), None));
        let synonym = fallback_exercises(&filter(Some("back"), None));
        assert_eq!(canonical, synonym);
        assert!(!canonical.is_empty());
    }

    #[test]
    fn empty_filter_samples_across_buckets_capped_at_five() {
        let exercises = fallback_exercises(&ExerciseFilter::default());
        assert_eq!(exercises.len(), 5);
    }

    #[test]
    fn type_filter_narrows_results() {
        let exercises = fallback_exercises(&filter(Some("abs"), Some("cardio")));
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Mountain Climbers");
    }

    #[test]
    fn difficulty_filter_narrows_results() {
        let exercises = fallback_exercises(&ExerciseFilter {
            muscle: Some("chest".to_string()),
            exercise_type: None,
            difficulty: Some("advanced".to_string()),
        });
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Diamond Push-ups");
    }

    #[test]
    fn unknown_muscle_yields_empty() {
        assert!(fallback_exercises(&filter(Some("forearms"), None)).is_empty());
    }
}
