//! Ensemble: multi-agent task orchestration library.
//!
//! This crate provides the core contract for composing conversational agents
//! into parent/sub-task hierarchies: a turn-taking loop over a fixed responder
//! priority, typed tool-invocation dispatch, and depth-first delegation to an
//! ordered list of sub-tasks.
//!
//! # Architecture
//!
//! Ensemble follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports (mock models, operator input)
//!
//! # Modules
//!
//! - [`chat`]: Conversation message domain and append-only history
//! - [`llm`]: Language-model port and mock adapter
//! - [`tool`]: Typed tool-invocation schemas, validation, and dispatch
//! - [`agent`]: Responder-bearing entity combining model, operator, and tools
//! - [`task`]: Turn-taking loop and sub-task delegation

pub mod agent;
pub mod chat;
pub mod llm;
pub mod task;
pub mod tool;
