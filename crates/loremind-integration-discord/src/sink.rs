//! ChatSink implementation for Discord

use async_trait::async_trait;
use loremind::domain::entities::ChatPost;
use loremind::domain::errors::DomainError;
use loremind::domain::Visibility;
use loremind::ports::ChatSink;
use tracing::{debug, warn};

use crate::client::DiscordClient;

/// Discord caps message content at this many characters.
const MAX_MESSAGE_CHARS: usize = 2000;

/// Posts to the channel a command came from; whispers go to the GM channel
pub struct DiscordChatSink {
    client: DiscordClient,
    channel_id: u64,
    gm_channel_id: Option<u64>,
}

impl DiscordChatSink {
    pub fn new(client: DiscordClient, channel_id: u64, gm_channel_id: Option<u64>) -> Self {
        Self {
            client,
            channel_id,
            gm_channel_id,
        }
    }

    /// Channel that should receive a post with `visibility`
    fn target_channel(&self, visibility: Visibility) -> u64 {
        match (visibility, self.gm_channel_id) {
            (Visibility::Public, _) => self.channel_id,
            (Visibility::GmOnly, Some(gm)) => gm,
            (Visibility::GmOnly, None) => {
                warn!(
                    channel_id = %self.channel_id,
                    "No GM channel configured, whisper posted to origin channel"
                );
                self.channel_id
            }
        }
    }
}

/// Render a post as Discord markdown
fn render(post: &ChatPost) -> String {
    match post.heading {
        Some(_) => post.to_markdown(),
        None => format!("**{}:** {}", post.speaker.display_name(), post.body),
    }
}

/// Split `content` into pieces Discord accepts, on char boundaries
fn split_message(content: &str) -> Vec<String> {
    let chars: Vec<char> = content.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(MAX_MESSAGE_CHARS)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[async_trait]
impl ChatSink for DiscordChatSink {
    async fn post(&self, post: ChatPost) -> Result<(), DomainError> {
        let channel_id = self.target_channel(post.visibility);
        let content = render(&post);
        debug!(
            channel_id = %channel_id,
            post_id = %post.id,
            visibility = ?post.visibility,
            "Posting chat message to Discord"
        );

        for part in split_message(&content) {
            self.client
                .send_message(channel_id, &part)
                .await
                .map_err(|e| DomainError::ExternalService(format!("Discord API error: {}", e)))?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "discord"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loremind::domain::Speaker;

    fn sink(gm_channel_id: Option<u64>) -> DiscordChatSink {
        DiscordChatSink::new(DiscordClient::new("test-token"), 100, gm_channel_id)
    }

    #[test]
    fn test_public_posts_stay_in_origin_channel() {
        assert_eq!(sink(Some(200)).target_channel(Visibility::Public), 100);
    }

    #[test]
    fn test_whispers_go_to_gm_channel() {
        assert_eq!(sink(Some(200)).target_channel(Visibility::GmOnly), 200);
        assert_eq!(sink(None).target_channel(Visibility::GmOnly), 100);
    }

    #[test]
    fn test_render_with_and_without_heading() {
        let question = ChatPost::new(Speaker::User("Ana".into()), "Who rules here?", Visibility::Public)
            .with_heading("You asked ChatGPT:");
        assert_eq!(render(&question), "**You asked ChatGPT:** Who rules here?");

        let reply = ChatPost::new(Speaker::Assistant, "The crown.", Visibility::Public);
        assert_eq!(render(&reply), "**ChatGPT:** The crown.");
    }

    #[test]
    fn test_long_messages_are_split() {
        let long = "é".repeat(MAX_MESSAGE_CHARS * 2 + 5);
        let parts = split_message(&long);

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].chars().count(), MAX_MESSAGE_CHARS);
        assert_eq!(parts[2].chars().count(), 5);
        assert_eq!(parts.concat(), long);
    }

    #[test]
    fn test_short_message_single_part() {
        assert_eq!(split_message("hi"), vec!["hi".to_string()]);
    }
}
