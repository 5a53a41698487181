//! Traits for pluggable collaborators.
//!
//! The engine composes against these seams so deployments can swap the
//! statistical predictor or the data providers without touching the core.

use crate::error::ProviderError;
use crate::records::{Exercise, NutritionFacts};

/// Output of the optional offline-trained intent predictor.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: String,
    /// Probability in [0, 1].
    pub probability: f32,
}

/// Optional statistical intent predictor, treated as a black box.
///
/// The engine must run correctly with this collaborator absent (pure
/// keyword mode).
pub trait IntentPredictor: Send + Sync {
    fn predict(&self, text: &str) -> Result<Prediction, ProviderError>;
}

/// Remote nutrition data provider.
pub trait NutritionProvider: Send + Sync {
    fn nutrition(&self, food_item: &str) -> Result<NutritionFacts, ProviderError>;
}

/// Filter for exercise lookups, extracted from the utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub muscle: Option<String>,
    pub exercise_type: Option<String>,
    pub difficulty: Option<String>,
}

impl ExerciseFilter {
    pub fn is_empty(&self) -> bool {
        self.muscle.is_none() && self.exercise_type.is_none() && self.difficulty.is_none()
    }
}

/// Exercise data provider. Implementations degrade to a static local table
/// before surfacing the uniform error marker.
pub trait ExerciseProvider: Send + Sync {
    fn exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, ProviderError>;
}
