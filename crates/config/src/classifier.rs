//! Intent classifier configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which classification strategy a deployment runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierMode {
    /// First keyword hit in fixed priority order wins.
    #[default]
    Keyword,
    /// Per-intent `matches / token_count`, maximum wins. Used when richer
    /// differentiation between close intents is required.
    Scored,
    /// Delegate to the external predictor, fall back to keywords on low
    /// confidence. Requires a predictor to be installed at construction.
    Predictor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub mode: ClassifierMode,

    /// Confidence reported when no keyword matches.
    #[serde(default = "default_unknown_confidence")]
    pub unknown_confidence: f32,

    /// Predictor results below this probability are re-scored with the
    /// keyword strategy.
    #[serde(default = "default_low_confidence_threshold")]
    pub low_confidence_threshold: f32,

    /// Per-intent keyword overrides, keyed by intent label. Intents not
    /// listed keep the built-in lexicon.
    #[serde(default)]
    pub keywords: HashMap<String, Vec<String>>,
}

fn default_unknown_confidence() -> f32 {
    0.4
}

fn default_low_confidence_threshold() -> f32 {
    0.4
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mode: ClassifierMode::default(),
            unknown_confidence: default_unknown_confidence(),
            low_confidence_threshold: default_low_confidence_threshold(),
            keywords: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_keyword() {
        let cfg = ClassifierConfig::default();
        assert_eq!(cfg.mode, ClassifierMode::Keyword);
        assert!(cfg.keywords.is_empty());
    }

    #[test]
    fn unknown_confidence_default_is_low() {
        let cfg = ClassifierConfig::default();
        assert!((0.3..=0.5).contains(&cfg.unknown_confidence));
    }

    #[test]
    fn mode_parses_from_toml() {
        let cfg: ClassifierConfig = toml::from_str("mode = \"scored\"").unwrap();
        assert_eq!(cfg.mode, ClassifierMode::Scored);
    }
}
