//! Configuration management for Loremind CLI
//!
//! Stores the API key, model choice, whisper settings and Discord details in
//! ~/.config/loremind/config.toml

use anyhow::{Context, Result};
use loremind::{AssistantSettings, ChatModel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "loremind";
const CONFIG_FILE: &str = "config.toml";
const JOURNAL_FILE: &str = "journal.json";
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Discord bot settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscordSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gm_channel_id: Option<u64>,
}

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: ChatModel,
    #[serde(default = "default_true")]
    pub whisper_to_gm: bool,
    #[serde(default = "default_true")]
    pub gm_only_button: bool,
    /// Name shown on questions asked from this terminal
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_path: Option<PathBuf>,
    /// OpenAI-compatible endpoint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub discord: DiscordSection,
}

fn default_true() -> bool {
    true
}

fn default_user_name() -> String {
    "Gamemaster".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: ChatModel::default(),
            whisper_to_gm: true,
            gm_only_button: true,
            user_name: default_user_name(),
            journal_path: None,
            endpoint: None,
            discord: DiscordSection::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content).with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Journal file: explicit setting, else next to the config file
    pub fn journal_path(&self) -> Result<PathBuf> {
        match &self.journal_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(JOURNAL_FILE)),
        }
    }

    /// Settings handed to the assistant.
    ///
    /// `OPENAI_API_KEY` in the environment wins over the stored key.
    pub fn settings(&self) -> AssistantSettings {
        let env_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        self.settings_with_key_override(env_key)
    }

    fn settings_with_key_override(&self, env_key: Option<String>) -> AssistantSettings {
        AssistantSettings {
            api_key: env_key
                .or_else(|| self.api_key.clone())
                .unwrap_or_default(),
            model: self.model,
            whisper_to_gm: self.whisper_to_gm,
            gm_only_button: self.gm_only_button,
        }
    }
}
