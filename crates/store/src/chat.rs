use std::time::Duration;

use chrono::Utc;
use shared_types::{AppError, ChatMessage, Sender, SIMULATED_CLIENT_REPLY};

use crate::busy::BusyGuard;

/// A single consultation conversation with a simulated client.
pub struct ChatThread {
    messages: Vec<ChatMessage>,
    typing: bool,
    reply_delay: Duration,
}

impl ChatThread {
    pub fn new(messages: Vec<ChatMessage>, reply_delay: Duration) -> Self {
        Self {
            messages,
            typing: false,
            reply_delay,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while the simulated client reply is pending.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    fn push(&mut self, sender: Sender, text: String) -> ChatMessage {
        let id = self.messages.last().map_or(1, |m| m.id + 1);
        let message = ChatMessage {
            id,
            sender,
            text,
            timestamp: Utc::now(),
        };
        self.messages.push(message.clone());
        message
    }

    /// Append a message from the lawyer. Blank input is refused.
    pub fn send(&mut self, text: &str) -> Result<ChatMessage, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::bad_request("Message is empty"));
        }
        let message = self.push(Sender::Lawyer, text.to_string());
        tracing::debug!(message_id = message.id, "Chat message sent");
        Ok(message)
    }

    /// Mark the client as typing. Returns how long the reply takes.
    pub fn begin_reply(&mut self) -> Duration {
        self.typing = true;
        self.reply_delay
    }

    /// Append the canned client answer and clear the typing flag.
    pub fn finish_reply(&mut self) -> ChatMessage {
        self.typing = false;
        self.push(Sender::Client, SIMULATED_CLIENT_REPLY.to_string())
    }

    /// Wait the fixed reply delay, then append the canned client answer.
    ///
    /// Dropping the future before it completes clears the typing flag.
    pub async fn simulate_reply(&mut self) -> ChatMessage {
        let delay = self.begin_reply();
        let typing = BusyGuard::new(&mut self.typing);
        tokio::time::sleep(delay).await;
        drop(typing);
        self.finish_reply()
    }

    /// `send` followed by `simulate_reply`.
    pub async fn send_and_await_reply(
        &mut self,
        text: &str,
    ) -> Result<(ChatMessage, ChatMessage), AppError> {
        let sent = self.send(text)?;
        let reply = self.simulate_reply().await;
        Ok((sent, reply))
    }
}
