//! The task runner service.

pub mod runner;

pub use runner::{SharedTask, Task};
