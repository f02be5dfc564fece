//! ChatPost Entity
//!
//! A message handed to the chat sink (game chat, Discord channel, terminal).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Visibility;

/// Alias used for assistant replies.
pub const ASSISTANT_ALIAS: &str = "ChatGPT";

/// Who a post is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Speaker {
    /// The user who asked
    User(String),
    /// The assistant itself
    Assistant,
}

impl Speaker {
    pub fn display_name(&self) -> &str {
        match self {
            Speaker::User(name) => name,
            Speaker::Assistant => ASSISTANT_ALIAS,
        }
    }
}

/// A chat message ready to be posted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPost {
    pub id: Uuid,
    pub speaker: Speaker,
    /// Bold lead-in rendered before the body (e.g. "You asked ChatGPT:")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub body: String,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
}

impl ChatPost {
    /// Create a new post with generated ID and timestamp
    pub fn new(speaker: Speaker, body: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            heading: None,
            body: body.into(),
            visibility,
            created_at: Utc::now(),
        }
    }

    /// Set the heading
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Heading and body as one markdown line
    pub fn to_markdown(&self) -> String {
        match &self.heading {
            Some(heading) => format!("**{}** {}", heading, self.body),
            None => self.body.clone(),
        }
    }
}
