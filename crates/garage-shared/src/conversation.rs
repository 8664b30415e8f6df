//! Conversation log.
//!
//! Append-only, ordered list of user and bot messages for one chat session.
//! Messages are never edited or removed; the whole log is only cleared when
//! the session restarts, which also restarts the id sequence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Bot => write!(f, "bot"),
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Sequence number within the session, starting at 1
    pub id: u64,
    pub role: Role,
    /// Display text, may contain `**bold**` markup
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only message log
#[derive(Debug, Clone, Serialize)]
pub struct ConversationLog {
    session_id: Uuid,
    messages: Vec<ConversationMessage>,
    #[serde(skip)]
    next_id: u64,
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationLog {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Identifier of the current session, renewed on restart
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Append a message and return it
    pub fn push(&mut self, role: Role, content: impl Into<String>) -> &ConversationMessage {
        let message = ConversationMessage {
            id: self.next_id,
            role,
            content: content.into(),
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> &ConversationMessage {
        self.push(Role::User, content)
    }

    pub fn push_bot(&mut self, content: impl Into<String>) -> &ConversationMessage {
        self.push(Role::Bot, content)
    }

    /// All messages in append order
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Start over: drop every message, reset ids, new session id
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

// Tests are in tests/conversation_tests.rs
