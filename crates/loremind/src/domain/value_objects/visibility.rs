//! Visibility and roles

use serde::{Deserialize, Serialize};

/// Who can see a chat post
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    /// Whispered to game-masters only
    GmOnly,
}

impl Visibility {
    pub fn whisper_if(gm_only: bool) -> Self {
        if gm_only {
            Visibility::GmOnly
        } else {
            Visibility::Public
        }
    }
}

/// Role of the user operating the assistant
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Gm,
    Player,
}

impl UserRole {
    pub fn is_gm(&self) -> bool {
        matches!(self, UserRole::Gm)
    }
}
