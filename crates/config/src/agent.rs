//! Agent and provider configuration.

use serde::{Deserialize, Serialize};

/// Top-level agent configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Display name used in the greeting template.
    #[serde(default = "default_agent_name")]
    pub name: String,
}

fn default_agent_name() -> String {
    "AI Fitness Assistant".to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
        }
    }
}

/// Remote nutrition/exercise provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Provider base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; requests without one degrade to the local fallback data.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds. Provider calls are blocking and bounded.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Maximum exercises returned per query.
    #[serde(default = "default_exercise_limit")]
    pub exercise_limit: usize,
}

fn default_base_url() -> String {
    "https://api.api-ninjas.com/v1".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_exercise_limit() -> usize {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
            exercise_limit: default_exercise_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let api = ApiConfig::default();
        assert_eq!(api.timeout_seconds, 10);
        assert_eq!(api.exercise_limit, 5);
        assert!(api.api_key.is_none());
        assert!(api.base_url.starts_with("https://"));
    }

    #[test]
    fn empty_toml_deserializes_with_defaults() {
        let api: ApiConfig = toml::from_str("").unwrap();
        assert_eq!(api.base_url, ApiConfig::default().base_url);
    }
}
