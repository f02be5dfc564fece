//! Services
//!
//! Assistant logic built on the ports: memory lookup, dispatch, the chat
//! relay and the small helpers hosts call around it.

pub mod bootstrap;
pub mod chat_command;
pub mod dispatcher;
pub mod memory_resolver;
pub mod readiness;
pub mod relay;

pub use bootstrap::{helper_document, seed_helper, HELPER_NAME};
pub use chat_command::{parse_chat_command, ChatCommand, CHAT_COMMAND_PREFIX};
pub use dispatcher::{system_prompt, CompletionDispatcher, GENERIC_SYSTEM_PROMPT};
pub use memory_resolver::{resolve, resolve_memory, MemoryLookup};
pub use readiness::wait_until_ready;
pub use relay::{ChatLineOutcome, ChatRelay};
