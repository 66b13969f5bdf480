//! Unit tests for the agent subsystem.
