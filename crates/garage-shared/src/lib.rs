//! Shared engine for the Garagiste vehicle diagnostic assistant.
//!
//! Knowledge base, matcher, responder, text formatter and conversation log.
//! Everything here is synchronous and free of I/O apart from loading a
//! knowledge file at startup.

pub mod conversation;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod matcher;
pub mod presets;
pub mod render;
pub mod responder;

pub use conversation::{ConversationLog, ConversationMessage, Role};
pub use engine::{DiagnosticEngine, Diagnosis};
pub use error::KnowledgeError;
pub use knowledge::{Category, KnowledgeBase, ProblemDefinition, Severity};
pub use matcher::{match_utterance, Match, Relevance, MAX_MATCHES};
pub use render::{render_text, RenderStyle};
pub use responder::{compose, Advice, ResponsePayload};

/// Config directory name under the XDG config home and /etc
pub const APP_DIR: &str = "garagiste";
