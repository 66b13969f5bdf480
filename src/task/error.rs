//! Error types for task orchestration.

use crate::agent::error::AgentError;
use crate::task::domain::TaskId;
use thiserror::Error;

/// Errors surfaced while building or running a task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// A responder collaborator failed; propagated unmasked.
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// A task was offered as its own sub-task.
    #[error("task '{0}' cannot be registered as its own sub-task")]
    SelfDelegation(TaskId),
}

/// Result type for task operations.
pub type TaskResult<T> = Result<T, TaskError>;
