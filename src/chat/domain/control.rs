//! Orchestration control markers carried on messages.

use serde::{Deserialize, Serialize};

/// A control marker attached to a message that steers the turn-taking loop.
///
/// Control markers are produced by orchestration tools (the built-in done
/// tool) or by the operator input step (quit tokens). A message without a
/// marker is ordinary conversational content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskControl {
    /// The task goal is reached; the carrying message is the final result.
    Done,
    /// The operator requested cancellation of the running task.
    Quit,
}
