//! Data model for conversations and messages.
//!
//! These types mirror the collaborator API's JSON shapes exactly. The wire
//! format is validated at deserialization time: an unknown `state` or
//! `direction` value, or a timestamp that is not a serialized instant, is a
//! parse error rather than a silently propagated field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a conversation. Server-assigned; the client only ever
/// reads a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConversationState {
    Open,
    Closed,
}

impl ConversationState {
    /// Lowercase token used purely for visual styling classification.
    pub fn token(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Direction of a message, relative to the conversation owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Sent,
    Received,
}

/// A single directional text record belonging to exactly one conversation.
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque server-assigned identifier.
    pub id: String,
    pub direction: Direction,
    /// Unconstrained message text.
    pub content: String,
    /// Serialized instant (ISO-8601 with offset on the wire).
    pub timestamp: DateTime<Utc>,
}

/// A grouping of messages with an open/closed lifecycle state.
///
/// The list endpoint may omit `messages`; the detail endpoint always carries
/// the full ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Opaque server-assigned identifier.
    pub id: String,
    pub state: ConversationState,
    #[serde(default)]
    pub messages: Vec<Message>,
}
