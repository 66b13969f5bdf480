//! Port contracts for operator input.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced while reading operator input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserInputError {
    /// The underlying input source failed.
    #[error("input error: {0}")]
    Io(String),
}

impl UserInputError {
    /// Creates an error from any displayable I/O cause.
    #[must_use]
    pub fn io(cause: impl Into<String>) -> Self {
        Self::Io(cause.into())
    }
}

/// Result type for operator input operations.
pub type UserInputResult<T> = Result<T, UserInputError>;

/// Contract for the human-input responder.
///
/// `read_line` blocks until the operator answers; there is no timeout.
/// `Ok(None)` means the input source is closed and the responder declines
/// from then on.
#[async_trait]
pub trait UserInput: Send + Sync {
    /// Reads one line of operator input, showing the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`UserInputError`] when the input source fails.
    async fn read_line(&self, prompt: &str) -> UserInputResult<Option<String>>;
}
