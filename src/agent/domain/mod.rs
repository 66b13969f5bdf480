//! Domain types for the agent subsystem.

mod config;
mod outcome;

pub use config::{AgentConfig, DEFAULT_MAX_OUTPUT_TOKENS};
pub use outcome::StepOutcome;
