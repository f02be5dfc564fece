//! Completion - One chat-completion exchange
//!
//! Transient values built per dispatch and never persisted.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ChatModel;

/// Returned when no API key is configured.
pub const NO_API_KEY_REPLY: &str = "(No API key set)";
/// Returned when the request or its decoding failed.
pub const ERROR_REPLY: &str = "(Error retrieving response)";
/// Returned when the upstream answered without usable text.
pub const EMPTY_REPLY: &str = "(No response)";

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// CompletionRequest - what is sent to the completion endpoint
#[derive(Clone)]
pub struct CompletionRequest {
    pub model: ChatModel,
    pub system_prompt: String,
    pub user_prompt: String,
    pub api_key: String,
}

impl CompletionRequest {
    /// Ordered message list: system instruction first, then the user prompt
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(&self.system_prompt),
            ChatMessage::user(&self.user_prompt),
        ]
    }
}

impl std::fmt::Debug for CompletionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionRequest")
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .field("user_prompt", &self.user_prompt)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// DispatchOutcome - terminal result of one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Trimmed, non-empty reply text
    Reply(String),
    /// No API key configured; nothing was sent
    MissingCredential,
    /// Transport or decoding failure
    Failed,
    /// Well-formed response without usable text
    Empty,
}

impl DispatchOutcome {
    /// Text to display: the reply itself or the matching sentinel
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) => text,
            Self::MissingCredential => NO_API_KEY_REPLY,
            Self::Failed => ERROR_REPLY,
            Self::Empty => EMPTY_REPLY,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Reply(text) => text,
            other => other.text().to_string(),
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, Self::Reply(_))
    }
}

impl std::fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
