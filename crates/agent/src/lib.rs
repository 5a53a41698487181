//! Turn engine for the fitness agent
//!
//! Composes the extractor, classifier, BMI engine, data providers, and
//! motivational store into the per-turn request/response loop:
//! - `dialogue`: the two-state slot-filling machine for the BMI flow
//! - `response`: stateless templates over structured results
//! - `agent`: the engine itself, one call per conversational turn

pub mod agent;
pub mod dialogue;
pub mod response;

pub use agent::FitnessAgent;
pub use dialogue::{DialogueOutcome, DialogueStateMachine};

use thiserror::Error;

use fitness_agent_config::ConfigError;
use fitness_agent_core::ProviderError;

/// Construction-time failures. Turn processing itself never fails; every
/// runtime problem becomes a user-facing message instead.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("provider setup failed: {0}")]
    Provider(#[from] ProviderError),
}
