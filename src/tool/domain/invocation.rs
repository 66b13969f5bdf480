//! Parsing structured tool invocations out of message content.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON field naming the capability an invocation requests.
pub const REQUEST_FIELD: &str = "request";

/// A decoded request to invoke a named capability.
///
/// Model output is free-form text; an invocation is recognised when the
/// whole content parses as a JSON object carrying a string-valued
/// [`REQUEST_FIELD`]. Every other field is an argument.
///
/// # Examples
///
/// ```
/// use ensemble::tool::domain::ToolInvocation;
///
/// let invocation =
///     ToolInvocation::parse(r#"{"request": "multiplier_tool", "a": 5, "b": 7}"#)
///         .expect("invocation");
/// assert_eq!(invocation.name(), "multiplier_tool");
/// assert_eq!(invocation.arguments().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    name: String,
    arguments: Map<String, Value>,
}

impl ToolInvocation {
    /// Builds an invocation from a name and argument map.
    #[must_use]
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Attempts to decode an invocation from message content.
    ///
    /// Returns `None` when the content is not a JSON object or does not
    /// carry a string-valued request field; such content is ordinary
    /// conversation, not an invocation.
    #[must_use]
    pub fn parse(content: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(content.trim()).ok()?;
        let Value::Object(mut fields) = value else {
            return None;
        };
        let Value::String(name) = fields.remove(REQUEST_FIELD)? else {
            return None;
        };

        Some(Self {
            name,
            arguments: fields,
        })
    }

    /// Returns the requested capability name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the supplied arguments.
    #[must_use]
    pub const fn arguments(&self) -> &Map<String, Value> {
        &self.arguments
    }

    /// Renders the invocation back to its canonical JSON content form.
    #[must_use]
    pub fn to_content(&self) -> String {
        let mut fields = self.arguments.clone();
        fields.insert(
            REQUEST_FIELD.to_owned(),
            Value::String(self.name.clone()),
        );
        Value::Object(fields).to_string()
    }
}
