//! The overall result of driving a task to termination.

use crate::chat::domain::ChatMessage;

/// Result of a complete task run.
///
/// Only collaborator faults are reported through `Err`; every way the loop
/// itself can stop is a variant here, including running out of budget.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The task reached its goal; carries the final response.
    Completed(ChatMessage),

    /// Neither the task's own responders nor any sub-task could answer.
    NoAnswer,

    /// The turn budget ran out before a completion signal; carries the last
    /// pending message, if any. An incomplete result, not an error.
    Exhausted(Option<ChatMessage>),

    /// The operator asked to stop.
    Cancelled,
}

impl RunOutcome {
    /// Returns `true` when the task reached its goal.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Returns the final response, consuming the outcome.
    #[must_use]
    pub fn into_completed(self) -> Option<ChatMessage> {
        match self {
            Self::Completed(message) => Some(message),
            Self::NoAnswer | Self::Exhausted(_) | Self::Cancelled => None,
        }
    }

    /// Returns the content of the final response, when completed.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Completed(message) => Some(message.content()),
            Self::NoAnswer | Self::Exhausted(_) | Self::Cancelled => None,
        }
    }
}
