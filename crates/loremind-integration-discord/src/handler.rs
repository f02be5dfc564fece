//! Discord gateway handler: answers `/gpt` chat lines

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use loremind::domain::errors::DomainError;
use loremind::domain::AssistantSettings;
use loremind::ports::MemoryStore;
use loremind::services::{wait_until_ready, ChatLineOutcome, ChatRelay, CompletionDispatcher};
use serenity::all::{Client, Context, EventHandler, GatewayIntents, Message, Ready};
use tracing::{debug, info};

use crate::client::DiscordClient;
use crate::config::DiscordConfig;
use crate::sink::DiscordChatSink;

const CONNECT_RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Event handler relaying chat commands to the assistant
pub struct LoremindHandler {
    config: DiscordConfig,
    settings: AssistantSettings,
    store: Arc<dyn MemoryStore>,
    dispatcher: CompletionDispatcher,
}

impl LoremindHandler {
    pub fn new(
        config: DiscordConfig,
        settings: AssistantSettings,
        store: Arc<dyn MemoryStore>,
        dispatcher: CompletionDispatcher,
    ) -> Self {
        Self {
            config,
            settings,
            store,
            dispatcher,
        }
    }

    fn relay_for(&self, client: DiscordClient, channel_id: u64) -> ChatRelay {
        let sink = DiscordChatSink::new(client, channel_id, self.config.gm_channel_id);
        ChatRelay::new(self.store.clone(), self.dispatcher.clone(), Arc::new(sink))
    }
}

/// Only human-authored lines are considered
fn should_consider(author_is_bot: bool, content: &str) -> bool {
    !author_is_bot && !content.is_empty()
}

#[async_trait]
impl EventHandler for LoremindHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(bot = %ready.user.name, "Discord bot connected");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if !should_consider(msg.author.bot, &msg.content) {
            return;
        }

        let relay = self.relay_for(DiscordClient::from_http(ctx.http.clone()), msg.channel_id.get());
        match relay.handle_chat_line(&self.settings, &msg.content).await {
            ChatLineOutcome::PassThrough => {}
            ChatLineOutcome::Handled(reply) => debug!(
                channel_id = %msg.channel_id,
                author = %msg.author.name,
                answered = reply.is_some(),
                "Handled chat command"
            ),
        }
    }
}

/// Connect to Discord and serve until the gateway shuts down.
///
/// Verifies the token with a bounded number of attempts first.
pub async fn run(
    config: DiscordConfig,
    settings: AssistantSettings,
    store: Arc<dyn MemoryStore>,
    dispatcher: CompletionDispatcher,
) -> Result<(), DomainError> {
    if config.token.is_empty() {
        return Err(DomainError::Configuration("Discord token is not set".to_string()));
    }

    let probe = DiscordClient::new(&config.token);
    let probe = &probe;
    wait_until_ready("discord", config.connect_attempts, CONNECT_RETRY_INTERVAL, || async move {
        probe.health().await
    })
    .await?;

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let token = config.token.clone();
    let handler = LoremindHandler::new(config, settings, store, dispatcher);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| DomainError::ExternalService(format!("Discord client error: {}", e)))?;

    info!("Starting Discord gateway");
    client
        .start()
        .await
        .map_err(|e| DomainError::ExternalService(format!("Discord gateway error: {}", e)))
}
