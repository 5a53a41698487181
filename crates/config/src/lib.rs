//! Configuration management for the fitness agent
//!
//! Supports loading configuration from:
//! - TOML files
//! - Environment variables (`FITNESS_AGENT_` prefix)
//! - Serde defaults when neither source sets a field

pub mod agent;
pub mod classifier;
pub mod settings;

pub use agent::{AgentConfig, ApiConfig};
pub use classifier::{ClassifierConfig, ClassifierMode};
pub use settings::{load_settings, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
