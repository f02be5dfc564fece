//! Adapters
//!
//! Concrete implementations of the ports that need nothing from a host:
//! the OpenAI client, journal stores and a tracing-backed notifier.

mod in_memory_journal;
mod journal_data;
mod json_journal;
mod openai;
mod tracing_notifier;

pub use in_memory_journal::InMemoryJournal;
pub use journal_data::{JournalData, JournalFolder, DEFAULT_FOLDER_COLOR};
pub use json_journal::JsonJournal;
pub use openai::{OpenAiChatClient, OPENAI_CHAT_URL};
pub use tracing_notifier::TracingNotifier;
