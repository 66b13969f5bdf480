//! Tool invocation schema value objects.
//!
//! A schema is a named, strongly-typed structural description of a callable
//! capability: a unique invocation name, a purpose string for the model, and
//! declared parameters with types.

use super::{ToolDomainError, ToolValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Declared type of a single tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// A JSON string.
    String,
    /// A JSON integer (no fractional part).
    Integer,
    /// Any JSON number.
    Number,
    /// A JSON boolean.
    Boolean,
}

impl ParameterKind {
    /// Returns the canonical name used in validation feedback.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// Returns `true` when the supplied JSON value satisfies this kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// Describes the JSON type of a supplied value, for feedback messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single declared tool parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParameter {
    name: String,
    kind: ParameterKind,
    required: bool,
}

impl ToolParameter {
    /// Declares a required parameter.
    #[must_use]
    pub fn required(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
        }
    }

    /// Declares an optional parameter.
    #[must_use]
    pub fn optional(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Returns `true` when the parameter must be supplied.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }
}

/// Canonical description of a callable capability.
///
/// Names are unique within one registry; registration enforces uniqueness.
///
/// # Examples
///
/// ```
/// use ensemble::tool::domain::{ParameterKind, ToolParameter, ToolSchema};
///
/// let schema = ToolSchema::new("multiplier_tool", "Calculate the product of two numbers")
///     .expect("valid schema")
///     .with_parameter(ToolParameter::required("a", ParameterKind::Integer))
///     .with_parameter(ToolParameter::required("b", ParameterKind::Integer));
/// assert_eq!(schema.name(), "multiplier_tool");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSchema {
    name: String,
    purpose: String,
    parameters: Vec<ToolParameter>,
}

impl ToolSchema {
    /// Creates a schema with required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ToolDomainError`] when the name or purpose is empty.
    pub fn new(
        name: impl Into<String>,
        purpose: impl Into<String>,
    ) -> Result<Self, ToolDomainError> {
        let normalized_name = name.into().trim().to_owned();
        if normalized_name.is_empty() {
            return Err(ToolDomainError::EmptyToolName);
        }

        let normalized_purpose = purpose.into().trim().to_owned();
        if normalized_purpose.is_empty() {
            return Err(ToolDomainError::EmptyToolPurpose);
        }

        Ok(Self {
            name: normalized_name,
            purpose: normalized_purpose,
            parameters: Vec::new(),
        })
    }

    /// Appends a declared parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ToolParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Returns the unique invocation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the purpose string.
    #[must_use]
    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    /// Returns the declared parameters.
    #[must_use]
    pub fn parameters(&self) -> &[ToolParameter] {
        &self.parameters
    }

    /// Checks supplied arguments against the declared parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ToolValidationError`] for the first missing required
    /// parameter, type mismatch, or undeclared argument found.
    pub fn validate(&self, arguments: &Map<String, Value>) -> Result<(), ToolValidationError> {
        for parameter in &self.parameters {
            match arguments.get(parameter.name()) {
                None if parameter.is_required() => {
                    return Err(ToolValidationError::MissingParameter {
                        name: parameter.name().to_owned(),
                    });
                }
                None => {}
                Some(value) => {
                    if !parameter.kind().matches(value) {
                        return Err(ToolValidationError::WrongParameterType {
                            name: parameter.name().to_owned(),
                            expected: parameter.kind().as_str().to_owned(),
                            actual: value_kind(value).to_owned(),
                        });
                    }
                }
            }
        }

        for supplied in arguments.keys() {
            if !self.parameters.iter().any(|p| p.name() == supplied) {
                return Err(ToolValidationError::UnknownParameter {
                    name: supplied.clone(),
                });
            }
        }

        Ok(())
    }
}
