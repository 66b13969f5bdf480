//! The step outcome produced by each responder attempt.

use crate::chat::domain::ChatMessage;

/// Result of asking one responder for a contribution.
///
/// The no-answer sentinel is a distinguished variant rather than a magic
/// value: the turn-taking loop treats it as "this responder declines" and
/// moves to the next option in its fixed priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The responder produced a usable reply.
    Answer(ChatMessage),
    /// The responder cannot make progress this step.
    NoAnswer,
}

impl StepOutcome {
    /// Returns `true` when the responder produced a reply.
    #[must_use]
    pub const fn is_answer(&self) -> bool {
        matches!(self, Self::Answer(_))
    }

    /// Returns the reply, consuming the outcome.
    #[must_use]
    pub fn into_answer(self) -> Option<ChatMessage> {
        match self {
            Self::Answer(message) => Some(message),
            Self::NoAnswer => None,
        }
    }
}
