//! Port contracts for language-model collaborators.

use crate::chat::domain::ChatMessage;
use crate::llm::domain::LlmResponse;
use crate::llm::error::LlmError;
use async_trait::async_trait;

/// Result type for language-model operations.
pub type LlmResult<T> = Result<T, LlmError>;

/// Contract for an automated-model responder.
///
/// Implementations receive the full message sequence (system instructions,
/// recorded history, and the pending message last) and return exactly one
/// response. Retries, streaming, and token-cost accounting against a real
/// provider live behind this boundary and are not part of the core.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Requests one completion for the given message sequence.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] when the provider fails; the orchestration core
    /// propagates this to the caller without masking it.
    async fn chat(&self, messages: &[ChatMessage], max_output_tokens: u32)
    -> LlmResult<LlmResponse>;
}
