//! Unit tests for the tool subsystem.

mod schema_tests;
