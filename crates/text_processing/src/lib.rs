//! Measurement extraction and intent classification
//!
//! The pattern-matching half of the engine:
//! - `extractor` parses heterogeneous weight/height expressions (metric and
//!   imperial, ambiguous units) into normalized metric values
//! - `classifier` maps free text onto the closed intent set, by keywords or
//!   by deferring to an external statistical predictor
//! - `query` pulls food items and muscle/type filters out of nutrition and
//!   workout utterances

pub mod classifier;
pub mod extractor;
pub mod query;

pub use classifier::{
    IntentClassifier, KeywordClassifier, KeywordLexicon, PredictorClassifier, ScoredClassifier,
};
pub use extractor::MeasurementExtractor;
pub use query::{extract_exercise_filter, extract_food_item};

use unicode_segmentation::UnicodeSegmentation;

/// Lowercase, strip punctuation, and re-join on single spaces.
///
/// Both the classifier and the external predictor consume this form.
pub(crate) fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    stripped.unicode_words().collect::<Vec<_>>().join(" ")
}
