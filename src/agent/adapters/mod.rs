//! Adapter implementations of the operator-input port.

pub mod console;
pub mod scripted;

pub use console::ConsoleUserInput;
pub use scripted::ScriptedUserInput;
