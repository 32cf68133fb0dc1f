//! Wire envelope for the realtime chat protocol.
//!
//! Events travel over the WebSocket as JSON text frames shaped as
//! `{ "event": string, "data": json }`. Payloads stay flexible
//! (`serde_json::Value`) so unknown events pass through the codec without
//! erroring and can be ignored at dispatch.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single message on the realtime wire protocol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event name, e.g. `"chat_token"`.
    pub event: String,
    /// Arbitrary JSON payload. Missing on the wire decodes as `null`.
    #[serde(default)]
    pub data: Value,
}

impl Event {
    /// Build the outbound `chat_message` event carrying one user utterance.
    #[must_use]
    pub fn chat_message(question: &str) -> Self {
        Self {
            event: "chat_message".to_owned(),
            data: serde_json::json!({ "question": question }),
        }
    }
}
