//! The responder-bearing entity: one conversation history plus up to three
//! capability roles.
//!
//! The agent exposes one method per capability. The turn-taking loop decides
//! the order in which they are consulted; each method independently reports
//! either a usable reply or the no-answer sentinel.

use crate::agent::domain::{AgentConfig, StepOutcome};
use crate::agent::error::AgentResult;
use crate::agent::ports::UserInput;
use crate::chat::domain::{ChatMessage, ConversationHistory, Role, TaskControl};
use crate::llm::ports::LanguageModel;
use crate::tool::domain::ToolInvocation;
use crate::tool::services::{
    ToolDispatchError, ToolRegistry, ToolRegistryError, done_tool_handler, done_tool_schema,
};
use crate::tool::ports::ToolHandler;
use mockable::Clock;
use std::fmt;
use std::sync::Arc;

/// Operator inputs recognised as a cancellation request.
pub const QUIT_TOKENS: &[&str] = &["q", "x"];

/// A conversational agent owning its history, model, operator input, and
/// enabled tools.
///
/// # Examples
///
/// ```
/// use ensemble::agent::domain::AgentConfig;
/// use ensemble::agent::services::ChatAgent;
/// use ensemble::llm::adapters::MockLm;
/// use mockable::DefaultClock;
/// use std::sync::Arc;
///
/// let agent = ChatAgent::new(AgentConfig::new("solver"), Arc::new(DefaultClock))
///     .with_llm(Arc::new(MockLm::fixed("42")));
/// assert_eq!(agent.name(), "solver");
/// ```
pub struct ChatAgent<C: Clock + Send + Sync> {
    config: AgentConfig,
    llm: Option<Arc<dyn LanguageModel>>,
    user_input: Option<Arc<dyn UserInput>>,
    tools: ToolRegistry,
    history: ConversationHistory,
    clock: Arc<C>,
}

impl<C: Clock + Send + Sync> ChatAgent<C> {
    /// Creates an agent with no model, no operator input, and no tools.
    ///
    /// Such an agent declines every step; capabilities are attached with the
    /// `with_*` and `enable_*` methods.
    #[must_use]
    pub fn new(config: AgentConfig, clock: Arc<C>) -> Self {
        Self {
            config,
            llm: None,
            user_input: None,
            tools: ToolRegistry::new(),
            history: ConversationHistory::new(),
            clock,
        }
    }

    /// Attaches an automated-model responder.
    #[must_use]
    pub fn with_llm(mut self, llm: Arc<dyn LanguageModel>) -> Self {
        self.llm = Some(llm);
        self
    }

    /// Attaches a human-input responder.
    #[must_use]
    pub fn with_user_input(mut self, user_input: Arc<dyn UserInput>) -> Self {
        self.user_input = Some(user_input);
        self
    }

    /// Enables a tool: registers its schema and handler for dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`ToolRegistryError`] when the invocation name is already
    /// taken or the schema's parameter list is malformed.
    pub fn enable_tool(
        &mut self,
        schema: crate::tool::domain::ToolSchema,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<(), ToolRegistryError> {
        self.tools.register(schema, handler)
    }

    /// Enables the built-in done tool as the completion signal.
    ///
    /// # Errors
    ///
    /// Returns [`ToolRegistryError`] when the done tool is already enabled.
    pub fn enable_done_tool(&mut self) -> Result<(), ToolRegistryError> {
        self.tools.register(done_tool_schema()?, done_tool_handler())
    }

    /// Returns the agent name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Returns the agent configuration.
    #[must_use]
    pub const fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Returns the enabled tools.
    #[must_use]
    pub const fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Returns the conversation history.
    #[must_use]
    pub const fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Clears the owned conversation history.
    ///
    /// Only the agent clears its own history; collaborators never do.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Returns a handle to the injected clock.
    #[must_use]
    pub fn clock(&self) -> Arc<C> {
        Arc::clone(&self.clock)
    }

    /// The self-handling responder: intercepts structured tool invocations.
    ///
    /// A pending message whose content decodes as an invocation of an
    /// enabled tool is routed to the registered handler; the handler's reply
    /// becomes the step result. Validation and handler failures are fed back
    /// into the conversation as corrective feedback, not raised as errors.
    /// Tool-result messages are never re-dispatched.
    #[must_use]
    pub fn handler_response(&self, pending: Option<&ChatMessage>) -> StepOutcome {
        let Some(message) = pending else {
            return StepOutcome::NoAnswer;
        };
        if message.role() == Role::Tool {
            return StepOutcome::NoAnswer;
        }
        let Some(invocation) = ToolInvocation::parse(message.content()) else {
            return StepOutcome::NoAnswer;
        };
        if !self.tools.contains(invocation.name()) {
            // Possibly a capability of a sub-task; decline so the loop can
            // delegate instead of rejecting the invocation outright.
            return StepOutcome::NoAnswer;
        }

        match self.tools.dispatch(&invocation) {
            Ok(reply) => {
                let mut result =
                    ChatMessage::tool(reply.content(), &*self.clock).with_sender(self.name());
                if let Some(control) = reply.control() {
                    result = result.with_control(control);
                }
                StepOutcome::Answer(result)
            }
            Err(ToolDispatchError::UnknownTool(_)) => StepOutcome::NoAnswer,
            Err(error @ (ToolDispatchError::Validation(_) | ToolDispatchError::Handler(_))) => {
                tracing::debug!(
                    agent = self.name(),
                    tool = invocation.name(),
                    %error,
                    "tool invocation failed; feeding back"
                );
                let feedback = format!(
                    "There was an error invoking tool '{}': {error}. \
                     Please correct the invocation and retry.",
                    invocation.name()
                );
                StepOutcome::Answer(
                    ChatMessage::user(feedback, &*self.clock).with_sender(self.name()),
                )
            }
        }
    }

    /// The automated-model responder.
    ///
    /// Submits the standing instructions, the recorded history, and the
    /// pending message, and records the exchange in history when the model
    /// answers. An empty completion is a decline. The model never responds
    /// to its own immediately preceding output.
    ///
    /// # Errors
    ///
    /// Returns [`crate::agent::error::AgentError::Llm`] when the provider
    /// fails; provider faults are propagated unmasked.
    pub async fn llm_response(
        &mut self,
        pending: Option<&ChatMessage>,
    ) -> AgentResult<StepOutcome> {
        let Some(llm) = self.llm.clone() else {
            return Ok(StepOutcome::NoAnswer);
        };
        if let Some(message) = pending {
            if message.role() == Role::Assistant && message.is_from(self.name()) {
                return Ok(StepOutcome::NoAnswer);
            }
        }

        let mut context = Vec::with_capacity(self.history.len() + 2);
        if let Some(system_message) = self.config.system_message() {
            context.push(ChatMessage::system(system_message, &*self.clock));
        }
        context.extend_from_slice(self.history.messages());
        if let Some(message) = pending {
            context.push(message.clone());
        }

        let response = llm
            .chat(&context, self.config.max_output_tokens())
            .await?;
        if response.is_empty() {
            tracing::debug!(agent = self.name(), "model declined (empty completion)");
            return Ok(StepOutcome::NoAnswer);
        }

        let reply =
            ChatMessage::assistant(response.message(), &*self.clock).with_sender(self.name());
        if let Some(message) = pending {
            self.history.push(message.clone());
        }
        self.history.push(reply.clone());
        Ok(StepOutcome::Answer(reply))
    }

    /// The human-input responder.
    ///
    /// Blocks awaiting operator input; an empty line or a closed source is a
    /// decline, and a quit token produces a reply tagged
    /// [`TaskControl::Quit`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::agent::error::AgentError::Input`] when the input
    /// source fails.
    pub async fn user_response(
        &self,
        pending: Option<&ChatMessage>,
    ) -> AgentResult<StepOutcome> {
        let Some(user_input) = &self.user_input else {
            return Ok(StepOutcome::NoAnswer);
        };
        if let Some(message) = pending {
            if message.role() == Role::User && message.is_from(self.name()) {
                return Ok(StepOutcome::NoAnswer);
            }
        }

        let prompt = pending.map_or_else(
            || "> ".to_owned(),
            |message| format!("{}\n> ", message.content()),
        );
        let Some(line) = user_input.read_line(&prompt).await? else {
            return Ok(StepOutcome::NoAnswer);
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(StepOutcome::NoAnswer);
        }
        if QUIT_TOKENS
            .iter()
            .any(|token| token.eq_ignore_ascii_case(trimmed))
        {
            return Ok(StepOutcome::Answer(
                ChatMessage::user(trimmed, &*self.clock)
                    .with_sender(self.name())
                    .with_control(TaskControl::Quit),
            ));
        }

        Ok(StepOutcome::Answer(
            ChatMessage::user(trimmed, &*self.clock).with_sender(self.name()),
        ))
    }
}

impl<C: Clock + Send + Sync> fmt::Debug for ChatAgent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatAgent")
            .field("config", &self.config)
            .field("has_llm", &self.llm.is_some())
            .field("has_user_input", &self.user_input.is_some())
            .field("tools", &self.tools)
            .field("history_len", &self.history.len())
            .finish()
    }
}
