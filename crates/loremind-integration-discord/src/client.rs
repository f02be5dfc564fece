//! Discord API client wrapper

use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Discord API client
#[derive(Clone)]
pub struct DiscordClient {
    http: Arc<Http>,
}

impl DiscordClient {
    /// Create a new Discord client from a bot token
    pub fn new(token: &str) -> Self {
        Self {
            http: Arc::new(Http::new(token)),
        }
    }

    /// Wrap an existing HTTP handle (e.g. from an event context)
    pub fn from_http(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Send a message to a channel
    pub async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), serenity::Error> {
        let channel = ChannelId::new(channel_id);
        debug!(channel_id = %channel_id, content_len = %content.len(), "Sending message to Discord");

        channel
            .say(&self.http, content)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord message"))?;

        Ok(())
    }

    /// Whether the token is accepted by Discord
    pub async fn health(&self) -> bool {
        match self.http.get_current_user().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Discord health check failed");
                false
            }
        }
    }
}
