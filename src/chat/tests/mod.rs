//! Unit tests for the chat subsystem.
