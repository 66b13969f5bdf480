//! Task orchestration: the turn-taking loop and sub-task delegation.
//!
//! A [`Task`](services::Task) wraps one agent and an ordered list of shared
//! sub-task handles. Its `run` methods drive the conversation until a
//! completion signal, a cancellation, a universal decline, or an exhausted
//! turn budget.

pub mod domain;
pub mod error;
pub mod services;

#[cfg(test)]
mod tests;
