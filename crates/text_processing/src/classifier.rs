//! Intent classification strategies.
//!
//! Two interchangeable families behind one trait, selected at construction:
//! keyword scanning (first-match or scored) and an external statistical
//! predictor with keyword fallback. The dialogue layer never knows which
//! one is active; `strategy_name` exists so deployments can report it.

use std::collections::HashMap;

use fitness_agent_core::{Classification, Intent, IntentPredictor};

use crate::normalize;

/// Confidence assigned when the keyword strategy overrides a low-confidence
/// predictor result.
const KEYWORD_OVERRIDE_CONFIDENCE: f32 = 0.6;

/// Confidence for a plain keyword hit, and for keyword results taken
/// because the predictor itself failed.
const KEYWORD_MATCH_CONFIDENCE: f32 = 0.5;

/// Intent classification capability.
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, utterance: &str) -> Classification;

    /// Which strategy is active, for logs and diagnostics.
    fn strategy_name(&self) -> &'static str;
}

/// Keyword sets per intent, scanned in `Intent::PRIORITY` order.
#[derive(Debug, Clone)]
pub struct KeywordLexicon {
    entries: Vec<(Intent, Vec<String>)>,
}

impl Default for KeywordLexicon {
    fn default() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        Self {
            entries: vec![
                (
                    Intent::Greeting,
                    owned(&[
                        "hello",
                        "hi",
                        "hey",
                        "good morning",
                        "good evening",
                        "howdy",
                        "greetings",
                    ]),
                ),
                (
                    Intent::Bmi,
                    owned(&[
                        "bmi",
                        "body mass index",
                        "weigh",
                        "weight",
                        "height",
                        "tall",
                        "kg",
                        "lbs",
                        "pounds",
                        "meters",
                        "feet",
                        "inches",
                    ]),
                ),
                (
                    Intent::Nutrition,
                    owned(&[
                        "calories",
                        "nutrition",
                        "protein",
                        "carbs",
                        "fat",
                        "nutrients",
                        "vitamin",
                    ]),
                ),
                (
                    Intent::Workout,
                    owned(&[
                        "exercise",
                        "exercises",
                        "workout",
                        "training",
                        "fitness",
                        "muscle",
                        "strength",
                        "cardio",
                        "gym",
                    ]),
                ),
                (
                    Intent::Motivation,
                    owned(&[
                        "motivation",
                        "inspire",
                        "encourage",
                        "lazy",
                        "tired",
                        "give up",
                        "help me",
                    ]),
                ),
            ],
        }
    }
}

impl KeywordLexicon {
    /// Apply per-intent overrides from configuration; intents without an
    /// override keep the built-in set.
    pub fn with_overrides(mut self, overrides: &HashMap<String, Vec<String>>) -> Self {
        for (intent, words) in &mut self.entries {
            if let Some(replacement) = overrides.get(intent.as_str()) {
                *words = replacement
                    .iter()
                    .map(|w| w.to_lowercase())
                    .collect();
            }
        }
        self
    }

    /// Entries in fixed priority order.
    fn entries(&self) -> &[(Intent, Vec<String>)] {
        &self.entries
    }
}

/// Does `keyword` occur in the token stream? Single-word keywords must match
/// a whole token, or the unit suffix of a number-glued token like "70kg";
/// multi-word keywords match as a phrase over the normalized text.
fn keyword_hits(tokens: &[&str], normalized: &str, keyword: &str) -> bool {
    if keyword.contains(' ') {
        return normalized.contains(keyword);
    }
    tokens.iter().any(|t| {
        *t == keyword
            || t.strip_suffix(keyword)
                .is_some_and(|prefix| !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()))
    })
}

/// Keyword-only mode: first intent with at least one hit wins, scanned in
/// fixed priority order.
pub struct KeywordClassifier {
    lexicon: KeywordLexicon,
    unknown_confidence: f32,
}

impl KeywordClassifier {
    pub fn new(lexicon: KeywordLexicon, unknown_confidence: f32) -> Self {
        Self {
            lexicon,
            unknown_confidence,
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(KeywordLexicon::default(), 0.4)
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, utterance: &str) -> Classification {
        let normalized = normalize(utterance);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        for (intent, keywords) in self.lexicon.entries() {
            if keywords
                .iter()
                .any(|k| keyword_hits(&tokens, &normalized, k))
            {
                return Classification::new(*intent, KEYWORD_MATCH_CONFIDENCE);
            }
        }

        Classification::new(Intent::Unknown, self.unknown_confidence)
    }

    fn strategy_name(&self) -> &'static str {
        "keyword"
    }
}

/// Scored variant: every intent gets `matches / token_count`, the maximum
/// wins, ties break toward the first intent in declaration order. Used when
/// richer differentiation between close intents is required.
pub struct ScoredClassifier {
    lexicon: KeywordLexicon,
    unknown_confidence: f32,
}

impl ScoredClassifier {
    pub fn new(lexicon: KeywordLexicon, unknown_confidence: f32) -> Self {
        Self {
            lexicon,
            unknown_confidence,
        }
    }

    /// All positive per-intent scores, in declaration order.
    pub fn scores(&self, utterance: &str) -> Vec<(Intent, f32)> {
        let normalized = normalize(utterance);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        self.lexicon
            .entries()
            .iter()
            .filter_map(|(intent, keywords)| {
                let matches = keywords
                    .iter()
                    .filter(|k| keyword_hits(&tokens, &normalized, k))
                    .count();
                if matches > 0 {
                    Some((*intent, matches as f32 / tokens.len() as f32))
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Default for ScoredClassifier {
    fn default() -> Self {
        Self::new(KeywordLexicon::default(), 0.4)
    }
}

impl IntentClassifier for ScoredClassifier {
    fn classify(&self, utterance: &str) -> Classification {
        let scores = self.scores(utterance);

        let mut best: Option<(Intent, f32)> = None;
        for (intent, score) in scores {
            // Strictly-greater keeps the first intent on ties.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((intent, score));
            }
        }

        match best {
            Some((intent, score)) => Classification::new(intent, score.min(1.0)),
            None => Classification::new(Intent::Unknown, self.unknown_confidence),
        }
    }

    fn strategy_name(&self) -> &'static str {
        "scored"
    }
}

/// External-predictor mode: defer to the statistical predictor, re-score
/// with keywords when its confidence is low, and survive predictor failure
/// entirely on keywords.
pub struct PredictorClassifier {
    predictor: Box<dyn IntentPredictor>,
    keywords: KeywordClassifier,
    low_confidence_threshold: f32,
}

impl PredictorClassifier {
    pub fn new(
        predictor: Box<dyn IntentPredictor>,
        keywords: KeywordClassifier,
        low_confidence_threshold: f32,
    ) -> Self {
        Self {
            predictor,
            keywords,
            low_confidence_threshold,
        }
    }
}

impl IntentClassifier for PredictorClassifier {
    fn classify(&self, utterance: &str) -> Classification {
        let processed = normalize(utterance);

        match self.predictor.predict(&processed) {
            Ok(prediction) => {
                let intent = Intent::from_label(&prediction.label);
                if prediction.probability < self.low_confidence_threshold {
                    let keyword = self.keywords.classify(utterance);
                    if keyword.intent != Intent::Unknown {
                        tracing::debug!(
                            predicted = %intent,
                            fallback = %keyword.intent,
                            probability = prediction.probability,
                            "low-confidence prediction overridden by keywords"
                        );
                        return Classification::new(keyword.intent, KEYWORD_OVERRIDE_CONFIDENCE);
                    }
                }
                Classification::new(intent, prediction.probability)
            }
            Err(err) => {
                tracing::warn!("intent predictor failed, using keywords: {err}");
                let keyword = self.keywords.classify(utterance);
                Classification::new(keyword.intent, KEYWORD_MATCH_CONFIDENCE)
            }
        }
    }

    fn strategy_name(&self) -> &'static str {
        "predictor"
    }
}
