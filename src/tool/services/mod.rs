//! Dispatch services for the tool subsystem.

pub mod orchestration;
pub mod registry;

pub use orchestration::{DONE_TOOL_NAME, done_tool_handler, done_tool_schema};
pub use registry::{ToolDispatchError, ToolRegistry, ToolRegistryError};
