//! Chat Command Parser
//!
//! Recognises the `/gpt` chat command in raw chat input.

/// Prefix that routes a chat line to the assistant.
pub const CHAT_COMMAND_PREFIX: &str = "/gpt";

/// A recognised chat command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Ask the assistant
    Ask { prompt: String },
    /// The command was typed without a prompt; swallow it
    Blank,
}

/// Parse a raw chat line. `None` means the line is ordinary chat.
pub fn parse_chat_command(line: &str) -> Option<ChatCommand> {
    let rest = line.strip_prefix(CHAT_COMMAND_PREFIX)?;
    let prompt = rest.trim();
    if prompt.is_empty() {
        Some(ChatCommand::Blank)
    } else {
        Some(ChatCommand::Ask {
            prompt: prompt.to_string(),
        })
    }
}
