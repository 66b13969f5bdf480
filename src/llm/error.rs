//! Error types for language-model collaborator faults.
//!
//! Provider faults are never masked by the orchestration core; they
//! propagate to the caller unchanged.

use thiserror::Error;

/// Errors surfaced by a language-model collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    /// The provider reported a request failure.
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider did not respond within the allowed time.
    #[error("provider timed out after {seconds}s")]
    Timeout {
        /// Seconds waited before giving up.
        seconds: u64,
    },

    /// The provider rejected the request due to rate limiting.
    #[error("provider rate limit exceeded")]
    RateLimited,
}

impl LlmError {
    /// Creates a provider error from any displayable cause.
    #[must_use]
    pub fn provider(cause: impl Into<String>) -> Self {
        Self::Provider(cause.into())
    }
}
