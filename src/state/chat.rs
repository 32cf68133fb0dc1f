//! Chat conversation state: the message list and the streaming cursor.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who authored a message. Drives the CSS class on the rendered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// CSS class for a message element of this role.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "chat-user",
            Self::Assistant => "chat-bot",
        }
    }
}

/// A single chat message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
}

/// State for the chat panel.
///
/// `streaming` holds the index of the in-progress assistant message while a
/// response is being streamed, and is `None` otherwise. Tokens always append
/// to the message at that index, so a user message sent mid-stream does not
/// split the assistant reply.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub streaming: Option<usize>,
}

impl ChatState {
    /// Append one streamed token to the in-progress assistant message,
    /// creating it first if no stream is open. Tokens accumulate in arrival
    /// order into the same message until [`complete_stream`] is called.
    ///
    /// [`complete_stream`]: ChatState::complete_stream
    pub fn apply_token(&mut self, token: &str) {
        let index = match self.streaming {
            Some(index) if index < self.messages.len() => index,
            _ => {
                self.messages.push(ChatMessage {
                    id: uuid::Uuid::new_v4().to_string(),
                    role: Role::Assistant,
                    content: String::new(),
                });
                let index = self.messages.len() - 1;
                self.streaming = Some(index);
                index
            }
        };

        self.messages[index].content.push_str(token);
    }

    /// Close the current stream. The next token starts a new message.
    /// Always valid, including when no stream is in progress.
    pub fn complete_stream(&mut self) {
        self.streaming = None;
    }

    /// Record a user message. Blank input (empty or whitespace-only) is a
    /// no-op returning `false`; otherwise the literal text is appended and
    /// `true` is returned so the caller knows to emit exactly one
    /// `chat_message` event.
    pub fn push_user(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: text.to_owned(),
        });
        true
    }
}
