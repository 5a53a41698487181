//! Error types shared across the engine.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Core engine errors.
#[derive(Error, Debug)]
pub enum Error {
    /// BMI inputs must be strictly positive; never clamped.
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Uniform marker for any external data-provider failure.
///
/// Network errors, timeouts, missing credentials and empty payloads all
/// collapse into this one value; callers never branch on the cause. The
/// reason string exists for logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("provider unavailable: {reason}")]
pub struct ProviderError {
    reason: String,
}

impl ProviderError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
