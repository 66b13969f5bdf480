//! The `ChatMessage` value object representing a single conversational message.
//!
//! Messages are immutable after creation; sequences of messages form a
//! conversation history.

use super::{MessageId, Role, TaskControl};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single message exchanged between responders.
///
/// # Invariants
///
/// - `id` is always a valid, non-nil UUID
/// - `created_at` is always populated from the injected clock
/// - Messages cannot be modified after creation; the `with_*` methods
///   consume and return a new value
///
/// # Examples
///
/// ```
/// use ensemble::chat::domain::{ChatMessage, Role};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let message = ChatMessage::user("Compute Nebrowski(3, 2)", &clock);
/// assert_eq!(message.role(), Role::User);
/// assert!(message.control().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier for this message.
    id: MessageId,

    /// The role of the message source.
    role: Role,

    /// The textual content of the message.
    content: String,

    /// The name of the agent that produced this message, when known.
    sender: Option<String>,

    /// Optional orchestration control marker.
    control: Option<TaskControl>,

    /// When the message was created.
    created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a message with an explicit role.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: content.into(),
            sender: None,
            control: None,
            created_at: clock.utc(),
        }
    }

    /// Creates a system-instruction message.
    #[must_use]
    pub fn system(content: impl Into<String>, clock: &impl Clock) -> Self {
        Self::new(Role::System, content, clock)
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>, clock: &impl Clock) -> Self {
        Self::new(Role::User, content, clock)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>, clock: &impl Clock) -> Self {
        Self::new(Role::Assistant, content, clock)
    }

    /// Creates a tool-result message.
    #[must_use]
    pub fn tool(content: impl Into<String>, clock: &impl Clock) -> Self {
        Self::new(Role::Tool, content, clock)
    }

    /// Sets the sender name.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Sets a control marker.
    #[must_use]
    #[expect(
        clippy::missing_const_for_fn,
        reason = "Option::Some with Copy type should be const but isn't stable"
    )]
    pub fn with_control(mut self, control: TaskControl) -> Self {
        self.control = Some(control);
        self
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the message role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the textual content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the sender name, when known.
    #[must_use]
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Returns the control marker, if any.
    #[must_use]
    pub const fn control(&self) -> Option<TaskControl> {
        self.control
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` if the content is empty or whitespace-only.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Returns `true` if this message was produced by the named sender.
    #[must_use]
    pub fn is_from(&self, name: &str) -> bool {
        self.sender.as_deref() == Some(name)
    }
}
