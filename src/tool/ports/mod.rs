//! Handler contract for tool invocations.

use crate::tool::domain::ToolReply;
use serde_json::{Map, Value};
use thiserror::Error;

/// Error raised by a handler while executing a validated invocation.
///
/// Handler failures are recoverable: the agent surfaces them back into the
/// conversation as corrective feedback rather than failing the task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tool handler failed: {0}")]
pub struct ToolHandlerError(String);

impl ToolHandlerError {
    /// Creates a handler error from any displayable cause.
    #[must_use]
    pub fn new(cause: impl Into<String>) -> Self {
        Self(cause.into())
    }
}

/// Result type for tool handler execution.
pub type ToolHandlerResult = Result<ToolReply, ToolHandlerError>;

/// Contract for the callable behind a registered tool schema.
///
/// Handlers receive arguments that already passed schema validation. They
/// run synchronously within the single-threaded turn loop; long-running
/// capabilities belong behind a sub-task, not a handler.
pub trait ToolHandler: Send + Sync {
    /// Executes the capability with validated arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ToolHandlerError`] when the capability itself fails; the
    /// error is fed back into the conversation as feedback.
    fn handle(&self, arguments: &Map<String, Value>) -> ToolHandlerResult;
}

impl<F> ToolHandler for F
where
    F: Fn(&Map<String, Value>) -> ToolHandlerResult + Send + Sync,
{
    fn handle(&self, arguments: &Map<String, Value>) -> ToolHandlerResult {
        self(arguments)
    }
}
