//! Discord configuration

use serde::{Deserialize, Serialize};

/// Configuration for Discord integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// Channel that receives game-master whispers
    pub gm_channel_id: Option<u64>,
    /// Connection attempts before giving up on startup
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,
}

fn default_connect_attempts() -> u32 {
    3
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            gm_channel_id: None,
            connect_attempts: default_connect_attempts(),
        }
    }

    /// Set the GM whisper channel
    pub fn with_gm_channel_id(mut self, channel_id: u64) -> Self {
        self.gm_channel_id = Some(channel_id);
        self
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DiscordConfig::new("test-token").with_gm_channel_id(67890);

        assert_eq!(config.token, "test-token");
        assert_eq!(config.gm_channel_id, Some(67890));
        assert_eq!(config.connect_attempts, 3);
    }

    #[test]
    fn test_default_has_no_token() {
        let config = DiscordConfig::default();
        assert!(config.token.is_empty());
        assert_eq!(config.gm_channel_id, None);
    }
}
