//! # Chat Controller
//!
//! An append-only chat log with a canned assistant. Every accepted message
//! schedules its own reply; overlapping sends each get one, appended in the
//! order their delays elapse.

use crate::model::ChatMessage;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

/// The published chat state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
    /// Replies scheduled but not yet appended.
    pub pending_replies: usize,
}

pub struct ChatController {
    log: Arc<watch::Sender<ChatLog>>,
    reply: String,
    delay: Duration,
}

impl ChatController {
    /// Starts with an empty log.
    pub fn new(reply: impl Into<String>, delay: Duration) -> Self {
        let (log, _) = watch::channel(ChatLog::default());
        Self {
            log: Arc::new(log),
            reply: reply.into(),
            delay,
        }
    }

    /// Opens the log with an assistant greeting.
    pub fn with_greeting(self, greeting: impl Into<String>) -> Self {
        let greeting = ChatMessage::assistant(greeting);
        self.log.send_modify(|log| log.messages.push(greeting));
        self
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.log.borrow().messages.clone()
    }

    pub fn pending_replies(&self) -> usize {
        self.log.borrow().pending_replies
    }

    pub fn subscribe(&self) -> watch::Receiver<ChatLog> {
        self.log.subscribe()
    }

    /// Appends `text` as a user message and schedules the reply.
    ///
    /// Blank input is ignored and returns `false`. Must be called within a
    /// Tokio runtime.
    pub fn send(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank chat message");
            return false;
        }

        self.log.send_modify(|log| {
            log.messages.push(ChatMessage::user(text));
            log.pending_replies += 1;
        });
        info!(pending = self.pending_replies(), "Chat message sent");

        let log = Arc::clone(&self.log);
        let reply = self.reply.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            log.send_modify(|log| {
                log.messages.push(ChatMessage::assistant(reply));
                log.pending_replies = log.pending_replies.saturating_sub(1);
            });
            debug!("Assistant replied");
        });
        true
    }

    /// Waits until every scheduled reply has been appended.
    pub async fn settled(&self) -> ChatLog {
        let mut receiver = self.log.subscribe();
        loop {
            {
                let log = receiver.borrow_and_update();
                if log.pending_replies == 0 {
                    return log.clone();
                }
            }
            if receiver.changed().await.is_err() {
                return self.log.borrow().clone();
            }
        }
    }
}
