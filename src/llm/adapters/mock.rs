//! Deterministic mock implementation of the `LanguageModel` port.
//!
//! The mock resolves a response from the content of the last submitted
//! message: a response function takes priority, then an exact-match response
//! map, then the configured default. Returning `None` from the response
//! function yields an empty completion, which the agent treats as a decline.
//! Suitable for unit tests and scripted orchestration scenarios.

use crate::chat::domain::ChatMessage;
use crate::llm::domain::{LlmResponse, TokenUsage};
use crate::llm::error::LlmError;
use crate::llm::ports::{LanguageModel, LlmResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Response function mapping the pending content to an optional reply.
pub type ResponseFn = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Configuration for [`MockLm`].
///
/// # Examples
///
/// ```
/// use ensemble::llm::adapters::MockLmConfig;
///
/// let config = MockLmConfig::new()
///     .with_default_response("echo")
///     .with_mapping("3", "10");
/// ```
#[derive(Clone, Default)]
pub struct MockLmConfig {
    default_response: Option<String>,
    response_map: HashMap<String, String>,
    response_fn: Option<Arc<ResponseFn>>,
    failure: Option<LlmError>,
}

impl MockLmConfig {
    /// Creates an empty configuration; the mock declines every request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fixed reply used when nothing else resolves.
    #[must_use]
    pub fn with_default_response(mut self, response: impl Into<String>) -> Self {
        self.default_response = Some(response.into());
        self
    }

    /// Adds an exact-match mapping from pending content to reply.
    #[must_use]
    pub fn with_mapping(mut self, input: impl Into<String>, response: impl Into<String>) -> Self {
        self.response_map.insert(input.into(), response.into());
        self
    }

    /// Sets a response function; takes priority over the map and default.
    #[must_use]
    pub fn with_response_fn(
        mut self,
        response_fn: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.response_fn = Some(Arc::new(response_fn));
        self
    }

    /// Makes every call fail with the given error, for fault-path tests.
    #[must_use]
    pub fn with_failure(mut self, error: LlmError) -> Self {
        self.failure = Some(error);
        self
    }
}

impl fmt::Debug for MockLmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockLmConfig")
            .field("default_response", &self.default_response)
            .field("response_map", &self.response_map)
            .field("response_fn", &self.response_fn.as_ref().map(|_| "<fn>"))
            .field("failure", &self.failure)
            .finish()
    }
}

/// Mock language model resolving replies from configuration.
#[derive(Debug, Clone)]
pub struct MockLm {
    config: MockLmConfig,
}

impl MockLm {
    /// Creates a mock from configuration.
    #[must_use]
    pub const fn new(config: MockLmConfig) -> Self {
        Self { config }
    }

    /// Convenience constructor for a mock with one fixed reply.
    #[must_use]
    pub fn fixed(response: impl Into<String>) -> Self {
        Self::new(MockLmConfig::new().with_default_response(response))
    }

    fn resolve(&self, input: &str) -> Option<String> {
        if let Some(response_fn) = &self.config.response_fn {
            return response_fn(input);
        }
        if let Some(mapped) = self.config.response_map.get(input) {
            return Some(mapped.clone());
        }
        self.config.default_response.clone()
    }
}

#[async_trait]
impl LanguageModel for MockLm {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        _max_output_tokens: u32,
    ) -> LlmResult<LlmResponse> {
        if let Some(error) = &self.config.failure {
            return Err(error.clone());
        }

        let input = messages.last().map(ChatMessage::content).unwrap_or_default();
        let reply = self.resolve(input).unwrap_or_default();
        let completion_tokens =
            u64::try_from(reply.split_whitespace().count()).unwrap_or(u64::MAX);

        Ok(LlmResponse::new(reply).with_usage(TokenUsage::new(0, completion_tokens)))
    }
}
