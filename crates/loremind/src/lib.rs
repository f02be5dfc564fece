//! Loremind Domain Library
//!
//! Lets tabletop players and game-masters ask a chat-completion model
//! questions, optionally in the voice of an NPC whose memory lives in a
//! journal.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure entities and values
//!   - `entities/`: MemoryDocument, CompletionRequest, DispatchOutcome, ChatPost
//!   - `value_objects/`: ChatModel, Visibility, AssistantSettings
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: MemoryStore
//!   - `services/`: CompletionTransport, Notifier
//!   - `integration`: ChatSink
//!
//! - **Services** (`services/`): memory resolver, dispatcher, chat relay
//! - **Adapters** (`adapters/`): OpenAI client, journal stores
//!
//! # Usage
//!
//! ```rust,ignore
//! use loremind::{AssistantSettings, CompletionDispatcher, OpenAiChatClient, TracingNotifier};
//!
//! let dispatcher = CompletionDispatcher::new(
//!     Arc::new(OpenAiChatClient::new()),
//!     Arc::new(TracingNotifier),
//! );
//! let memory = loremind::resolve_memory(Some("Jaaris"), &journal);
//! let reply = dispatcher.dispatch_text(&settings, "Who are you?", Some("Jaaris"), &memory).await;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use adapters::{InMemoryJournal, JournalData, JsonJournal, OpenAiChatClient, TracingNotifier};
pub use domain::{
    AssistantSettings, ChatMessage, ChatModel, ChatPost, CompletionRequest, DispatchOutcome,
    DomainError, MemoryDocument, MemoryPage, MessageRole, NoticeLevel, Speaker, UserRole,
    Visibility, EMPTY_REPLY, ERROR_REPLY, MEMORY_FOLDER, NO_API_KEY_REPLY,
};
pub use ports::{ChatSink, CompletionTransport, MemoryStore, Notifier};
pub use services::{
    parse_chat_command, resolve, resolve_memory, seed_helper, system_prompt, wait_until_ready,
    ChatCommand, ChatLineOutcome, ChatRelay, CompletionDispatcher, MemoryLookup,
};
