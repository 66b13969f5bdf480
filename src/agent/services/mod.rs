//! The chat agent service.

pub mod chat_agent;

pub use chat_agent::{ChatAgent, QUIT_TOKENS};
