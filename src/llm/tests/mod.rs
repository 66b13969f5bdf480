//! Unit tests for the language-model subsystem.

mod mock_tests;
