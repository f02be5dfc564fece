//! AssistantSettings - Configuration passed to the assistant at call time
//!
//! Built once by the host from whatever storage it has; the core never
//! reads global state.

use serde::{Deserialize, Serialize};

use super::{ChatModel, UserRole, Visibility};

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantSettings {
    /// OpenAI API key, empty when not configured
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: ChatModel,
    /// Whisper replies to game-masters only
    #[serde(default = "default_true")]
    pub whisper_to_gm: bool,
    /// Only game-masters may open the assistant panel
    #[serde(default = "default_true")]
    pub gm_only_button: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: ChatModel::default(),
            whisper_to_gm: true,
            gm_only_button: true,
        }
    }
}

impl AssistantSettings {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: ChatModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_whisper_to_gm(mut self, whisper: bool) -> Self {
        self.whisper_to_gm = whisper;
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Visibility for posts produced by the assistant
    pub fn post_visibility(&self) -> Visibility {
        Visibility::whisper_if(self.whisper_to_gm)
    }

    /// Whether a user with `role` may open the panel
    pub fn panel_available(&self, role: UserRole) -> bool {
        !self.gm_only_button || role.is_gm()
    }
}

impl std::fmt::Debug for AssistantSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantSettings")
            .field("api_key", &if self.has_api_key() { "<set>" } else { "<unset>" })
            .field("model", &self.model)
            .field("whisper_to_gm", &self.whisper_to_gm)
            .field("gm_only_button", &self.gm_only_button)
            .finish()
    }
}
