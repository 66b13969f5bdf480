//! Domain types for the task orchestration subsystem.

mod ids;
mod outcome;
mod settings;

pub use ids::TaskId;
pub use outcome::RunOutcome;
pub use settings::{DEFAULT_MAX_TURNS, TaskSettings};
