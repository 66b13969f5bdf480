//! Error types for tool schema construction and invocation validation.

use thiserror::Error;

/// Errors returned while constructing tool domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolDomainError {
    /// The tool name is empty after trimming.
    #[error("tool name must not be empty")]
    EmptyToolName,

    /// The tool purpose is empty after trimming.
    #[error("tool purpose must not be empty")]
    EmptyToolPurpose,

    /// A parameter name is empty after trimming.
    #[error("tool parameter name must not be empty")]
    EmptyParameterName,

    /// Two declared parameters share the same name.
    #[error("duplicate tool parameter: '{0}'")]
    DuplicateParameter(String),
}

/// Errors produced when invocation arguments fail schema validation.
///
/// These are recoverable: the orchestration loop feeds them back into the
/// conversation as corrective feedback rather than failing the task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolValidationError {
    /// A required parameter is absent.
    #[error("missing required parameter '{name}'")]
    MissingParameter {
        /// The declared parameter name.
        name: String,
    },

    /// A supplied value does not satisfy the declared type.
    #[error("parameter '{name}' expects {expected}, got {actual}")]
    WrongParameterType {
        /// The declared parameter name.
        name: String,
        /// The declared type.
        expected: String,
        /// The type of the supplied value.
        actual: String,
    },

    /// A supplied argument is not declared by the schema.
    #[error("unknown parameter '{name}'")]
    UnknownParameter {
        /// The undeclared argument name.
        name: String,
    },
}
