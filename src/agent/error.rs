//! Error types for agent responder operations.
//!
//! Only collaborator faults become errors; a responder that declines
//! produces the no-answer step outcome instead.

use crate::agent::ports::UserInputError;
use crate::llm::error::LlmError;
use thiserror::Error;

/// Errors surfaced while asking an agent's responders for a contribution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// The language-model collaborator failed; propagated unmasked.
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// The operator-input collaborator failed.
    #[error(transparent)]
    Input(#[from] UserInputError),
}

/// Result type for agent responder operations.
pub type AgentResult<T> = Result<T, AgentError>;
