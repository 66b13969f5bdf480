//! Typed tool invocation for Ensemble.
//!
//! A tool is a named, strongly-typed description of a callable capability.
//! Model output that parses as an invocation of a registered tool is
//! intercepted before it is treated as conversational content and routed to
//! the registered handler. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Handler contract in [`ports`]
//! - Dispatch services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
