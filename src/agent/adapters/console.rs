//! Console implementation of the `UserInput` port.
//!
//! Blocks the turn loop until the operator answers on standard input.
//! Cancellation is out-of-band: the loop recognises the quit tokens, not
//! this adapter.

use crate::agent::ports::{UserInput, UserInputError, UserInputResult};
use async_trait::async_trait;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Operator input read from the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleUserInput;

impl ConsoleUserInput {
    /// Creates a console input adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserInput for ConsoleUserInput {
    async fn read_line(&self, prompt: &str) -> UserInputResult<Option<String>> {
        let mut stdout = io::stdout();
        stdout
            .write_all(prompt.as_bytes())
            .await
            .map_err(|e| UserInputError::io(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| UserInputError::io(e.to_string()))?;

        let mut line = String::new();
        let read = BufReader::new(io::stdin())
            .read_line(&mut line)
            .await
            .map_err(|e| UserInputError::io(e.to_string()))?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}
