//! Symptom chat session: in-memory log of user and assistant messages.
//!
//! The user's message is logged immediately; the assistant reply follows
//! after a fixed display delay. Nothing here is persisted.

use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::CHAT_REPLY_DELAY;
use crate::intelligence::classify;
use crate::models::ChatMessage;

/// The pair of bubbles appended for one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub user: ChatMessage,
    pub bot: ChatMessage,
}

pub struct ChatSession {
    log: Mutex<Vec<ChatMessage>>,
    reply_delay: Duration,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_delay(CHAT_REPLY_DELAY)
    }

    pub fn with_delay(reply_delay: Duration) -> Self {
        Self {
            log: Mutex::new(Vec::new()),
            reply_delay,
        }
    }

    /// Log `text`, wait the reply delay, then log the assistant's answer.
    /// Blank input is ignored.
    pub async fn send(&self, text: &str) -> Option<ChatExchange> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let user = ChatMessage::user(text);
        self.push(user.clone());

        tokio::time::sleep(self.reply_delay).await;

        let bot = ChatMessage::bot(classify(text));
        self.push(bot.clone());

        Some(ChatExchange { user, bot })
    }

    /// Messages so far, oldest first.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn push(&self, message: ChatMessage) {
        if let Ok(mut log) = self.log.lock() {
            log.push(message);
        }
    }
}
