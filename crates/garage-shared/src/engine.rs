//! Diagnostic engine: matcher, responder and formatter behind one handle.
//!
//! The engine holds an immutable knowledge base and a render style. It has
//! no interior mutability, so one instance can serve any number of
//! concurrent sessions.

use crate::conversation::{ConversationLog, ConversationMessage};
use crate::error::KnowledgeError;
use crate::knowledge::KnowledgeBase;
use crate::matcher::{match_utterance, Match};
use crate::render::{render_text, RenderStyle};
use crate::responder::{compose, ResponsePayload};
use serde::Serialize;
use tracing::debug;

/// Result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    pub matches: Vec<Match>,
    pub payload: ResponsePayload,
}

#[derive(Debug, Clone)]
pub struct DiagnosticEngine {
    kb: KnowledgeBase,
    style: RenderStyle,
}

impl DiagnosticEngine {
    pub fn new(kb: KnowledgeBase, style: RenderStyle) -> Self {
        Self { kb, style }
    }

    /// Engine over the built-in knowledge base, emoji markers
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Ok(Self::new(KnowledgeBase::builtin()?, RenderStyle::default()))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Match and compose for one utterance
    pub fn diagnose(&self, utterance: &str) -> Diagnosis {
        let matches = match_utterance(utterance, &self.kb);
        let payload = compose(&matches, &self.kb);
        debug!(
            matches = matches.len(),
            clarify = payload.is_clarify(),
            "utterance diagnosed"
        );
        Diagnosis { matches, payload }
    }

    pub fn render(&self, payload: &ResponsePayload) -> String {
        render_text(payload, &self.style)
    }

    /// Rendered reply text for one utterance
    pub fn reply_text(&self, utterance: &str) -> String {
        self.render(&self.diagnose(utterance).payload)
    }

    /// Append the reply to the log as exactly one bot message
    pub fn respond<'a>(
        &self,
        log: &'a mut ConversationLog,
        utterance: &str,
    ) -> &'a ConversationMessage {
        log.push_bot(self.reply_text(utterance))
    }
}

// Tests are in tests/engine_tests.rs
