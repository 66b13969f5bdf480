//! Built-in orchestration tools.
//!
//! The done tool is the completion signal for multi-turn tasks: invoking it
//! produces a reply tagged with [`TaskControl::Done`] carrying the optional
//! result payload.
//!
//! [`TaskControl::Done`]: crate::chat::domain::TaskControl::Done

use crate::tool::domain::{
    ParameterKind, ToolDomainError, ToolParameter, ToolReply, ToolSchema,
};
use crate::tool::ports::{ToolHandler, ToolHandlerResult};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Invocation name of the built-in done tool.
pub const DONE_TOOL_NAME: &str = "task_done";

/// Content used when the done tool is invoked without a result payload.
const DONE_DEFAULT_CONTENT: &str = "done";

/// Builds the schema for the built-in done tool.
///
/// # Errors
///
/// Returns [`ToolDomainError`] when schema construction fails; with the
/// constant name and purpose used here this does not happen in practice.
pub fn done_tool_schema() -> Result<ToolSchema, ToolDomainError> {
    Ok(
        ToolSchema::new(DONE_TOOL_NAME, "Signal that the task goal is reached")?
            .with_parameter(ToolParameter::optional("result", ParameterKind::String)),
    )
}

fn handle_done(arguments: &Map<String, Value>) -> ToolHandlerResult {
    let content = arguments
        .get("result")
        .and_then(Value::as_str)
        .unwrap_or(DONE_DEFAULT_CONTENT);
    Ok(ToolReply::done(content))
}

/// Returns the handler for the built-in done tool.
#[must_use]
pub fn done_tool_handler() -> Arc<dyn ToolHandler> {
    Arc::new(handle_done)
}
