//! Language-model integration for Ensemble.
//!
//! The hosted model is an opaque collaborator: the orchestration core only
//! needs to submit a message sequence plus a maximum-output-size parameter
//! and receive one response back. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;
