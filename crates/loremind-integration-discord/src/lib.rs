//! Discord Integration for Loremind
//!
//! Runs a Discord bot that answers `/gpt` chat lines and posts replies,
//! sending game-master whispers to a dedicated channel.
//!
//! # Usage
//!
//! ```rust,ignore
//! use loremind_integration_discord::{run, DiscordConfig};
//!
//! let config = DiscordConfig::new("your-bot-token").with_gm_channel_id(1234);
//! run(config, settings, store, dispatcher).await?;
//! ```

mod client;
mod config;
mod handler;
mod sink;

pub use client::DiscordClient;
pub use config::DiscordConfig;
pub use handler::{run, LoremindHandler};
pub use sink::DiscordChatSink;
