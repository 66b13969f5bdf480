//! Domain types for the chat subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are immutable after construction and serialisable via serde.

mod control;
mod history;
mod ids;
mod message;
mod role;

pub use control::TaskControl;
pub use history::ConversationHistory;
pub use ids::{ConversationId, MessageId};
pub use message::ChatMessage;
pub use role::{ParseRoleError, Role};
