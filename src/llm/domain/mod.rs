//! Domain types for language-model responses.

mod response;

pub use response::{LlmResponse, TokenUsage};
