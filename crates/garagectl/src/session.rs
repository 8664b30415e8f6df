//! Chat session: a conversation log plus the deferred bot reply.
//!
//! A submitted utterance is answered right away but the bot message only
//! lands in the log after the thinking delay. One reply may be pending at a
//! time, so replies always appear in submission order.

use garage_shared::presets::WELCOME_TEXT;
use garage_shared::{ConversationLog, ConversationMessage, DiagnosticEngine};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("A reply is still pending, wait for it before sending another message")]
    ReplyPending,
}

pub struct ChatSession {
    engine: Arc<DiagnosticEngine>,
    log: Arc<Mutex<ConversationLog>>,
    thinking_delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl ChatSession {
    /// New session whose log opens with the welcome message
    pub fn start(engine: Arc<DiagnosticEngine>, thinking_delay: Duration) -> Self {
        let mut log = ConversationLog::new();
        log.push_bot(WELCOME_TEXT);
        info!(session = %log.session_id(), "chat session started");

        Self {
            engine,
            log: Arc::new(Mutex::new(log)),
            thinking_delay,
            pending: None,
        }
    }

    /// True while a deferred reply has not been appended yet
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Append the user message and schedule the bot reply
    pub async fn submit(&mut self, utterance: &str) -> Result<(), SessionError> {
        if self.is_pending() {
            return Err(SessionError::ReplyPending);
        }

        let user_id = self.log.lock().await.push_user(utterance).id;
        let reply = self.engine.reply_text(utterance);
        debug!(message = user_id, "user message appended, reply scheduled");

        let log = Arc::clone(&self.log);
        let delay = self.thinking_delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut log = log.lock().await;
            let id = log.push_bot(reply).id;
            debug!(message = id, "bot reply appended");
        }));

        Ok(())
    }

    /// Wait for the pending reply; None when nothing was pending
    pub async fn wait_reply(&mut self) -> Option<ConversationMessage> {
        let handle = self.pending.take()?;
        if handle.await.is_err() {
            return None;
        }
        self.log.lock().await.last().cloned()
    }

    /// Snapshot of the conversation so far
    pub async fn history(&self) -> Vec<ConversationMessage> {
        self.log.lock().await.messages().to_vec()
    }

    pub async fn session_id(&self) -> Uuid {
        self.log.lock().await.session_id()
    }

    /// Drop any pending reply and begin a fresh conversation
    pub async fn restart(&mut self) {
        let cancelled = self.cancel_pending();
        let mut log = self.log.lock().await;
        log.restart();
        log.push_bot(WELCOME_TEXT);
        info!(session = %log.session_id(), cancelled, "chat session restarted");
    }

    /// Shared handle on the log, for surfaces that render it live
    pub fn log_handle(&self) -> Arc<Mutex<ConversationLog>> {
        Arc::clone(&self.log)
    }

    /// End the session; a pending reply is never appended
    pub fn close(mut self) {
        if self.cancel_pending() {
            debug!("pending reply cancelled on close");
        }
    }

    fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
