//! Value objects describing a single model completion.

use serde::{Deserialize, Serialize};

/// Token accounting for one model call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the submitted context.
    pub prompt_tokens: u64,
    /// Tokens produced in the completion.
    pub completion_tokens: u64,
}

impl TokenUsage {
    /// Creates a usage record.
    #[must_use]
    pub const fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
        }
    }

    /// Returns the combined token count.
    #[must_use]
    pub const fn total(self) -> u64 {
        self.prompt_tokens.saturating_add(self.completion_tokens)
    }
}

/// A single response from a language model.
///
/// An empty (or whitespace-only) message is the model-side way of declining
/// to make progress; the agent maps it to the no-answer sentinel rather than
/// recording it in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmResponse {
    message: String,
    usage: Option<TokenUsage>,
}

impl LlmResponse {
    /// Creates a response carrying the given completion text.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            usage: None,
        }
    }

    /// Attaches token accounting.
    #[must_use]
    #[expect(
        clippy::missing_const_for_fn,
        reason = "Option::Some with Copy type should be const but isn't stable"
    )]
    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Returns the completion text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the token accounting, when reported.
    #[must_use]
    pub const fn usage(&self) -> Option<TokenUsage> {
        self.usage
    }

    /// Returns `true` when the completion is empty or whitespace-only.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}
