//! Append-only conversation history owned by a single agent.

use super::{ChatMessage, ConversationId};
use serde::{Deserialize, Serialize};

/// An ordered, append-only sequence of messages.
///
/// Each responder-bearing entity owns exactly one history. Collaborators may
/// read it, but only the owner appends to it or clears it.
///
/// # Examples
///
/// ```
/// use ensemble::chat::domain::{ChatMessage, ConversationHistory};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let mut history = ConversationHistory::new();
/// history.push(ChatMessage::user("hello", &clock));
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationHistory {
    conversation_id: ConversationId,
    messages: Vec<ChatMessage>,
}

impl ConversationHistory {
    /// Creates an empty history with a fresh conversation identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the conversation identifier.
    #[must_use]
    pub const fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    /// Appends a message.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Returns the recorded messages in append order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the most recently appended message, if any.
    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Returns the number of recorded messages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no messages are recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Removes all recorded messages.
    ///
    /// Only the owning agent clears its history; the conversation identifier
    /// is retained.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
