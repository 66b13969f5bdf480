//! The responder-bearing entity for Ensemble.
//!
//! A [`services::ChatAgent`] owns one conversation history and up to three
//! capability roles: a self-handling responder for tool dispatch, an
//! automated-model responder behind the [`crate::llm::ports::LanguageModel`]
//! port, and a human-input responder behind the [`ports::UserInput`] port.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The agent service in [`services`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
