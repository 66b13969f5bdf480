//! Registry mapping invocation names to typed decoder + handler pairs.
//!
//! Dispatch keys on the declared invocation name, resolved at call time.
//! Names are unique within one registry; duplicate registration is an error.

use crate::tool::domain::{
    ToolDomainError, ToolInvocation, ToolReply, ToolSchema, ToolValidationError,
};
use crate::tool::ports::{ToolHandler, ToolHandlerError};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while registering a tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolRegistryError {
    /// A tool with this invocation name is already registered.
    #[error("tool '{0}' is already registered")]
    DuplicateName(String),

    /// The schema failed domain validation.
    #[error(transparent)]
    Domain(#[from] ToolDomainError),
}

/// Errors raised while dispatching an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolDispatchError {
    /// No tool is registered under the requested name.
    #[error("no tool registered under '{0}'")]
    UnknownTool(String),

    /// The supplied arguments failed schema validation.
    #[error(transparent)]
    Validation(#[from] ToolValidationError),

    /// The handler itself failed.
    #[error(transparent)]
    Handler(#[from] ToolHandlerError),
}

struct ToolEntry {
    schema: ToolSchema,
    handler: Arc<dyn ToolHandler>,
}

/// In-memory registry of enabled tools for one agent.
///
/// # Examples
///
/// ```
/// use ensemble::tool::domain::{ToolReply, ToolSchema};
/// use ensemble::tool::ports::ToolHandlerResult;
/// use ensemble::tool::services::ToolRegistry;
/// use serde_json::{Map, Value};
/// use std::sync::Arc;
///
/// fn echo(_args: &Map<String, Value>) -> ToolHandlerResult {
///     Ok(ToolReply::text("echoed"))
/// }
///
/// let mut registry = ToolRegistry::new();
/// let schema = ToolSchema::new("echo_tool", "Echo the arguments back").expect("schema");
/// registry.register(schema, Arc::new(echo)).expect("register");
/// assert!(registry.contains("echo_tool"));
/// ```
#[derive(Default)]
pub struct ToolRegistry {
    entries: HashMap<String, ToolEntry>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema with its handler.
    ///
    /// # Errors
    ///
    /// Returns [`ToolRegistryError::DuplicateName`] when the invocation name
    /// is taken, or [`ToolRegistryError::Domain`] when a declared parameter
    /// name is empty or duplicated.
    pub fn register(
        &mut self,
        schema: ToolSchema,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<(), ToolRegistryError> {
        validate_parameters(&schema)?;

        if self.entries.contains_key(schema.name()) {
            return Err(ToolRegistryError::DuplicateName(schema.name().to_owned()));
        }

        self.entries
            .insert(schema.name().to_owned(), ToolEntry { schema, handler });
        Ok(())
    }

    /// Returns `true` when a tool is registered under the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the schema registered under the given name, if any.
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&ToolSchema> {
        self.entries.get(name).map(|entry| &entry.schema)
    }

    /// Returns the number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no tools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves and executes the handler for a decoded invocation.
    ///
    /// Arguments are validated against the registered schema before the
    /// handler runs.
    ///
    /// # Errors
    ///
    /// Returns [`ToolDispatchError::UnknownTool`] when the name is not
    /// registered, [`ToolDispatchError::Validation`] when the arguments do
    /// not satisfy the schema, or [`ToolDispatchError::Handler`] when the
    /// handler fails.
    pub fn dispatch(&self, invocation: &ToolInvocation) -> Result<ToolReply, ToolDispatchError> {
        let entry = self
            .entries
            .get(invocation.name())
            .ok_or_else(|| ToolDispatchError::UnknownTool(invocation.name().to_owned()))?;

        entry.schema.validate(invocation.arguments())?;
        tracing::debug!(tool = invocation.name(), "dispatching tool invocation");
        Ok(entry.handler.handle(invocation.arguments())?)
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ToolRegistry").field("tools", &names).finish()
    }
}

/// Rejects schemas with empty or duplicated parameter names.
fn validate_parameters(schema: &ToolSchema) -> Result<(), ToolDomainError> {
    let mut seen: Vec<&str> = Vec::new();
    for parameter in schema.parameters() {
        let name = parameter.name().trim();
        if name.is_empty() {
            return Err(ToolDomainError::EmptyParameterName);
        }
        if seen.contains(&name) {
            return Err(ToolDomainError::DuplicateParameter(name.to_owned()));
        }
        seen.push(name);
    }
    Ok(())
}
