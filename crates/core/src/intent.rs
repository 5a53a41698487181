//! Intent taxonomy for user utterances.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical purpose of an utterance.
///
/// A closed set: the response synthesizer matches exhaustively on this enum,
/// so adding an intent is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Workout,
    Nutrition,
    Bmi,
    Motivation,
    Unknown,
}

impl Intent {
    /// Fixed scan order for keyword matching.
    ///
    /// The position doubles as the tie-break: "I need motivation to
    /// calculate my BMI" resolves to `Bmi` because `Bmi` is scanned before
    /// `Motivation`.
    pub const PRIORITY: [Intent; 5] = [
        Intent::Greeting,
        Intent::Bmi,
        Intent::Nutrition,
        Intent::Workout,
        Intent::Motivation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Workout => "workout",
            Intent::Nutrition => "nutrition",
            Intent::Bmi => "bmi",
            Intent::Motivation => "motivation",
            Intent::Unknown => "unknown",
        }
    }

    /// Parse a label produced by an external predictor.
    ///
    /// Unrecognized labels map to `Unknown` rather than failing.
    pub fn from_label(label: &str) -> Intent {
        match label {
            "greeting" => Intent::Greeting,
            "workout" => Intent::Workout,
            "nutrition" => Intent::Nutrition,
            "bmi" => Intent::Bmi,
            "motivation" => Intent::Motivation,
            _ => Intent::Unknown,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of intent classification for one utterance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub intent: Intent,
    /// Confidence in [0, 1].
    pub confidence: f32,
}

impl Classification {
    pub fn new(intent: Intent, confidence: f32) -> Self {
        Self { intent, confidence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for intent in Intent::PRIORITY {
            assert_eq!(Intent::from_label(intent.as_str()), intent);
        }
    }

    #[test]
    fn unknown_label_maps_to_unknown() {
        assert_eq!(Intent::from_label("smalltalk"), Intent::Unknown);
        assert_eq!(Intent::from_label(""), Intent::Unknown);
    }

    #[test]
    fn bmi_scanned_before_motivation() {
        let bmi_pos = Intent::PRIORITY
            .iter()
            .position(|i| *i == Intent::Bmi)
            .unwrap();
        let motivation_pos = Intent::PRIORITY
            .iter()
            .position(|i| *i == Intent::Motivation)
            .unwrap();
        assert!(bmi_pos < motivation_pos);
    }
}
