//! Unified settings loader.

use serde::{Deserialize, Serialize};

use crate::agent::{AgentConfig, ApiConfig};
use crate::classifier::ClassifierConfig;
use crate::ConfigError;

/// All deployment settings for the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub agent: AgentConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

/// Load settings from an optional TOML file plus `FITNESS_AGENT_`-prefixed
/// environment variables (double underscore separates nesting levels, e.g.
/// `FITNESS_AGENT_API__TIMEOUT_SECONDS=5`).
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = config::Config::builder();

    match path {
        Some(path) => builder = builder.add_source(config::File::with_name(path)),
        None => {
            builder = builder.add_source(config::File::with_name("config/default").required(false))
        }
    }

    let raw = builder
        .add_source(config::Environment::with_prefix("FITNESS_AGENT").separator("__"))
        .build()?;

    let settings: Settings = raw.try_deserialize()?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    let thresholds = [
        (
            "classifier.unknown_confidence",
            settings.classifier.unknown_confidence,
        ),
        (
            "classifier.low_confidence_threshold",
            settings.classifier.low_confidence_threshold,
        ),
    ];
    for (field, value) in thresholds {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!("must be within 0.0..=1.0, got {value}"),
            });
        }
    }

    if settings.api.timeout_seconds == 0 {
        return Err(ConfigError::InvalidValue {
            field: "api.timeout_seconds".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_file_yields_defaults() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings.api.timeout_seconds, 10);
        assert_eq!(settings.agent.name, AgentConfig::default().name);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let mut settings = Settings::default();
        settings.classifier.unknown_confidence = 1.4;
        let err = validate(&settings).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "classifier.unknown_confidence"
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert!(matches!(
            validate(&settings),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn settings_parse_from_toml() {
        let raw = r#"
            [agent]
            name = "Coach"

            [api]
            api_key = "test-key"
            timeout_seconds = 5

            [classifier]
            mode = "scored"
        "#;
        let settings: Settings = toml::from_str(raw).unwrap();
        assert_eq!(settings.agent.name, "Coach");
        assert_eq!(settings.api.api_key.as_deref(), Some("test-key"));
        assert_eq!(settings.api.timeout_seconds, 5);
    }
}
