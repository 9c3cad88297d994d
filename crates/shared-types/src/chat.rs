use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Lawyer,
    Client,
}

/// One line in the consultation chat. Ids are sequential per thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Messages from the signed-in lawyer render on the right.
    pub fn is_own(&self) -> bool {
        self.sender == Sender::Lawyer
    }
}

/// Canned client reply used by the simulated chat.
pub const SIMULATED_CLIENT_REPLY: &str =
    "Thank you for the guidance! When should we schedule the next meeting?";
