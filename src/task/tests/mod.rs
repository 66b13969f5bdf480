//! Unit tests for the task subsystem.

mod delegation_tests;
mod loop_tests;
