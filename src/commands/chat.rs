//! Symptom chat commands.

use crate::chat::ChatExchange;
use crate::core_state::CoreState;
use crate::db::KeyValueStore;
use crate::models::ChatMessage;

/// Sends a chat message and resolves once the assistant has replied.
/// Returns `None` for blank input.
pub async fn send_chat_message<S: KeyValueStore>(
    state: &CoreState<S>,
    text: &str,
) -> Option<ChatExchange> {
    state.chat.send(text).await
}

/// Full chat log, oldest first.
pub fn get_chat_log<S: KeyValueStore>(state: &CoreState<S>) -> Vec<ChatMessage> {
    state.chat.history()
}
