//! Handler reply value object.

use crate::chat::domain::TaskControl;
use serde::{Deserialize, Serialize};

/// The effective response produced by a tool handler.
///
/// A reply carries conversational content and, optionally, a control marker
/// steering the turn-taking loop (the built-in done tool uses this to end a
/// multi-turn task).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolReply {
    content: String,
    control: Option<TaskControl>,
}

impl ToolReply {
    /// Creates an ordinary text reply.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            control: None,
        }
    }

    /// Creates a reply that signals task completion.
    #[must_use]
    pub fn done(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            control: Some(TaskControl::Done),
        }
    }

    /// Returns the reply content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the control marker, if any.
    #[must_use]
    pub const fn control(&self) -> Option<TaskControl> {
        self.control
    }
}
