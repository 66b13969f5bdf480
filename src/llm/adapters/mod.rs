//! Adapter implementations of the language-model port.

pub mod mock;

pub use mock::{MockLm, MockLmConfig};
