//! Domain types for the tool subsystem.

mod error;
mod invocation;
mod reply;
mod schema;

pub use error::{ToolDomainError, ToolValidationError};
pub use invocation::{REQUEST_FIELD, ToolInvocation};
pub use reply::ToolReply;
pub use schema::{ParameterKind, ToolParameter, ToolSchema};
