//! Agent configuration value object.

use serde::{Deserialize, Serialize};

/// Default upper bound on completion size requested from the model.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

/// Configuration for a chat agent.
///
/// # Examples
///
/// ```
/// use ensemble::agent::domain::AgentConfig;
///
/// let config = AgentConfig::new("planner")
///     .with_system_message("You are a calculator assistant.");
/// assert_eq!(config.name(), "planner");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    name: String,
    system_message: Option<String>,
    max_output_tokens: u32,
}

impl AgentConfig {
    /// Creates a configuration for a named agent.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system_message: None,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// Sets the standing instructions sent at the head of the model context.
    #[must_use]
    pub fn with_system_message(mut self, message: impl Into<String>) -> Self {
        self.system_message = Some(message.into());
        self
    }

    /// Sets the maximum completion size requested from the model.
    #[must_use]
    pub const fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = tokens;
        self
    }

    /// Returns the agent name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the standing instructions, if configured.
    #[must_use]
    pub fn system_message(&self) -> Option<&str> {
        self.system_message.as_deref()
    }

    /// Returns the maximum completion size requested from the model.
    #[must_use]
    pub const fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }
}
