//! zapview-api: collaborator API access for the zapview conversation viewer.
//!
//! This crate holds everything that touches the wire:
//! - Typed data model for conversations and messages
//! - HTTP client for the two collaborator endpoints
//! - Error types shared by the TUI and the headless CLI

mod client;
mod error;
pub mod model;

pub use client::{ApiClient, AUTH_CREDENTIAL, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use model::{Conversation, ConversationState, Direction, Message};
