//! Scripted implementation of the `UserInput` port.
//!
//! Replays a fixed sequence of operator replies, then reports the source as
//! closed. Suitable for unit tests and non-interactive reproductions of
//! operator sessions.

use crate::agent::ports::{UserInput, UserInputError, UserInputResult};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Operator input replayed from a pre-recorded script.
#[derive(Debug, Default)]
pub struct ScriptedUserInput {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedUserInput {
    /// Creates a script from the given replies, served in order.
    #[must_use]
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    /// Returns the number of unserved replies.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an exhausted script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

#[async_trait]
impl UserInput for ScriptedUserInput {
    async fn read_line(&self, _prompt: &str) -> UserInputResult<Option<String>> {
        let mut guard = self
            .lines
            .lock()
            .map_err(|e| UserInputError::io(format!("lock poisoned: {e}")))?;
        Ok(guard.pop_front())
    }
}
