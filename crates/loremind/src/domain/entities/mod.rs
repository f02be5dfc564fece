//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - MemoryDocument: Journal entry holding an NPC's memory pages
//! - CompletionRequest / DispatchOutcome: One chat-completion exchange
//! - ChatPost: Message handed to the chat sink

mod completion;
mod memory;
mod message;

pub use completion::*;
pub use memory::*;
pub use message::*;
