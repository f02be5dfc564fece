//! Chat Integration Port
//!
//! Abstract interface for posting messages to the host's chat
//! (a game chat log, a Discord channel, a terminal).
//!
//! Host-specific implementations live in separate crates
//! (e.g., loremind-integration-discord).

use async_trait::async_trait;

use crate::domain::entities::ChatPost;
use crate::domain::errors::DomainError;

/// Chat sink interface
///
/// # Example
///
/// ```rust,ignore
/// use loremind::ports::ChatSink;
///
/// struct DiscordChatSink { /* ... */ }
///
/// #[async_trait]
/// impl ChatSink for DiscordChatSink {
///     async fn post(&self, post: ChatPost) -> Result<(), DomainError> {
///         // Send to Discord
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait ChatSink: Send + Sync {
    /// Post a message, honouring its visibility
    async fn post(&self, post: ChatPost) -> Result<(), DomainError>;

    /// Get the sink name (e.g., "discord", "terminal")
    fn name(&self) -> &str;
}
