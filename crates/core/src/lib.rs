//! Core types and traits for the fitness conversational agent
//!
//! This crate provides foundational types used across all other crates:
//! - The closed `Intent` taxonomy
//! - Measurement and unit-system types
//! - Per-session conversation state
//! - Data shapes returned by external collaborators
//! - Traits for pluggable collaborators (intent predictor, data providers)
//! - Error types

pub mod conversation;
pub mod error;
pub mod intent;
pub mod measurement;
pub mod records;
pub mod traits;

pub use conversation::{ConversationState, DialoguePhase, Turn, TurnRole};
pub use error::{Error, ProviderError, Result};
pub use intent::{Classification, Intent};
pub use measurement::{
    MeasurementCandidate, MeasurementRole, MeasurementUnit, NormalizedMeasurement, UnitSystem,
};
pub use records::{Exercise, Motivation, NutritionFacts};
pub use traits::{ExerciseFilter, ExerciseProvider, IntentPredictor, NutritionProvider, Prediction};
