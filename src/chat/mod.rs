//! Conversation message domain for Ensemble.
//!
//! Messages are the atomic unit of conversation state: every responder
//! consumes a pending message and may produce a new one. This module holds
//! the pure domain types only; no ports or adapters are required because
//! messages never cross an infrastructure boundary on their own.
//!
//! - Domain types in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
