//! ChatModel - Selectable completion models

use serde::{Deserialize, Serialize};

/// Completion model
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChatModel {
    #[default]
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

impl ChatModel {
    pub const ALL: [ChatModel; 3] = [ChatModel::Gpt4o, ChatModel::Gpt4, ChatModel::Gpt35Turbo];

    /// Model identifier sent to the API
    pub fn id(&self) -> &'static str {
        match self {
            ChatModel::Gpt4o => "gpt-4o",
            ChatModel::Gpt4 => "gpt-4",
            ChatModel::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }

    /// Human-readable label for settings screens
    pub fn label(&self) -> &'static str {
        match self {
            ChatModel::Gpt4o => "GPT-4o (Fastest + Multimodal)",
            ChatModel::Gpt4 => "GPT-4 (Accurate, slower)",
            ChatModel::Gpt35Turbo => "GPT-3.5 Turbo (Fast & cheap)",
        }
    }
}

impl std::fmt::Display for ChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for ChatModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gpt-4o" => Ok(ChatModel::Gpt4o),
            "gpt-4" => Ok(ChatModel::Gpt4),
            "gpt-3.5-turbo" => Ok(ChatModel::Gpt35Turbo),
            _ => Err(format!("Unknown model: {}", s)),
        }
    }
}
