//! Loremind CLI - Ask the assistant, manage NPC memories, run the Discord bot
//!
//! Terminal host for the Loremind assistant.

mod config;
mod terminal;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use loremind::{
    resolve, seed_helper, ChatLineOutcome, ChatModel, ChatRelay, CompletionDispatcher,
    JsonJournal, MemoryLookup, MemoryStore, OpenAiChatClient, UserRole, MEMORY_FOLDER,
};
use loremind_integration_discord::DiscordConfig;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::Config;
use terminal::{TerminalNotifier, TerminalSink};

#[derive(Parser)]
#[command(name = "loremind")]
#[command(about = "Loremind CLI - ask an LLM questions as your NPCs", long_about = None)]
#[command(version)]
struct Cli {
    /// Journal file holding NPC memories (overrides config)
    #[arg(long, global = true)]
    journal: Option<PathBuf>,

    /// Act as a player instead of the game-master
    #[arg(long, global = true)]
    player: bool,

    /// Disable colored chat output
    #[arg(long, global = true)]
    plain: bool,

    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the OpenAI API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Change a setting
    Set {
        #[command(subcommand)]
        setting: SetAction,
    },

    /// Ask a question, optionally in an NPC's voice
    Ask {
        /// The question
        prompt: String,
        /// NPC whose memory journal should be used
        #[arg(short, long)]
        npc: Option<String>,
    },

    /// Send a chat line; `/gpt <question>` lines are answered
    Chat {
        /// Raw chat line
        line: String,
    },

    /// Interactive assistant panel
    Panel,

    /// NPC memory journals
    Npc {
        #[command(subcommand)]
        action: NpcAction,
    },

    /// Create the tutorial "Helper" NPC if missing
    Bootstrap,

    /// Run the Discord bot
    Discord {
        /// Bot token (overrides config)
        #[arg(long)]
        token: Option<String>,
        /// Channel receiving GM whispers (overrides config)
        #[arg(long)]
        gm_channel: Option<u64>,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum SetAction {
    /// Completion model
    Model {
        #[arg(value_parser = parse_model)]
        model: ChatModel,
    },
    /// Whisper assistant replies to the GM
    Whisper { state: Toggle },
    /// Only the GM may open the panel
    GmOnly { state: Toggle },
    /// Name shown on your questions
    Name { name: String },
}

#[derive(Subcommand)]
enum NpcAction {
    /// List NPCs with a memory journal
    List,
    /// Print an NPC's memory as the assistant sees it
    Show { name: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn enabled(self) -> bool {
        matches!(self, Toggle::On)
    }
}

fn parse_model(s: &str) -> Result<ChatModel, String> {
    s.parse()
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "loremind=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // Ignore a second initialisation attempt
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Host {
        journal_override: cli.journal,
        role: if cli.player { UserRole::Player } else { UserRole::Gm },
        plain: cli.plain || !std::io::stdout().is_terminal(),
    };

    match cli.command {
        Commands::Login { key } => cmd_login(key),
        Commands::Set { setting } => cmd_set(setting),
        Commands::Ask { prompt, npc } => cmd_ask(&ctx, prompt, npc).await,
        Commands::Chat { line } => cmd_chat(&ctx, line).await,
        Commands::Panel => cmd_panel(&ctx).await,
        Commands::Npc { action } => cmd_npc(&ctx, action),
        Commands::Bootstrap => cmd_bootstrap(&ctx),
        Commands::Discord { token, gm_channel } => cmd_discord(&ctx, token, gm_channel).await,
        Commands::Config => cmd_config(&ctx),
    }
}

/// Per-invocation host state
struct Host {
    journal_override: Option<PathBuf>,
    role: UserRole,
    plain: bool,
}

impl Host {
    fn journal(&self, config: &Config) -> Result<Arc<JsonJournal>> {
        let path = match &self.journal_override {
            Some(path) => path.clone(),
            None => config.journal_path()?,
        };
        debug!(path = ?path, "Opening journal");
        let journal = JsonJournal::open(&path)
            .with_context(|| format!("Failed to open journal {:?}", path))?;
        Ok(Arc::new(journal))
    }

    fn dispatcher(&self, config: &Config) -> CompletionDispatcher {
        let transport = match &config.endpoint {
            Some(url) => OpenAiChatClient::with_endpoint(url.clone()),
            None => OpenAiChatClient::new(),
        };
        CompletionDispatcher::new(Arc::new(transport), Arc::new(TerminalNotifier))
    }

    fn relay(&self, config: &Config) -> Result<ChatRelay> {
        Ok(ChatRelay::new(
            self.journal(config)?,
            self.dispatcher(config),
            Arc::new(TerminalSink::new(self.plain)),
        ))
    }
}

// ============================================
// Command Implementations
// ============================================

fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("OpenAI API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);
    println!(
        "{}",
        "You will not be able to view this key again. Store it somewhere safe.".dimmed()
    );

    Ok(())
}

fn cmd_set(setting: SetAction) -> Result<()> {
    let mut config = Config::load()?;

    match setting {
        SetAction::Model { model } => {
            config.model = model;
            println!("{} Model set to {}", "✓".green(), model.label().cyan());
        }
        SetAction::Whisper { state } => {
            config.whisper_to_gm = state.enabled();
            println!("{} Whisper replies to GM: {}", "✓".green(), on_off(state.enabled()));
        }
        SetAction::GmOnly { state } => {
            config.gm_only_button = state.enabled();
            println!("{} GM-only panel: {}", "✓".green(), on_off(state.enabled()));
        }
        SetAction::Name { name } => {
            println!("{} Asking as {}", "✓".green(), name.cyan());
            config.user_name = name;
        }
    }

    config.save()
}

async fn cmd_ask(host: &Host, prompt: String, npc: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let relay = host.relay(&config)?;

    if relay
        .submit_panel(&config.settings(), &config.user_name, &prompt, npc.as_deref())
        .await
        .is_none()
    {
        bail!("Nothing to ask: the prompt is empty");
    }

    Ok(())
}

async fn cmd_chat(host: &Host, line: String) -> Result<()> {
    let config = Config::load()?;
    let relay = host.relay(&config)?;

    match relay.handle_chat_line(&config.settings(), &line).await {
        ChatLineOutcome::PassThrough => println!("{}: {}", config.user_name.cyan().bold(), line),
        ChatLineOutcome::Handled(None) => {
            println!("{}", "Usage: /gpt <question>".dimmed());
        }
        ChatLineOutcome::Handled(Some(_)) => {}
    }

    Ok(())
}

async fn cmd_panel(host: &Host) -> Result<()> {
    let config = Config::load()?;
    let settings = config.settings();

    if !settings.panel_available(host.role) {
        bail!("The assistant panel is restricted to the GM");
    }

    let relay = host.relay(&config)?;

    println!("{}", "Loremind Assistant".bold());
    println!("{}", "Submit an empty question to close the panel.".dimmed());

    loop {
        let query: String = Input::new()
            .with_prompt("Question")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        if query.trim().is_empty() {
            break;
        }

        let mut choices = vec!["None".to_string()];
        choices.extend(relay.personas());
        let selected = Select::new()
            .with_prompt("NPC")
            .items(&choices)
            .default(0)
            .interact()
            .context("Failed to read NPC selection")?;
        let npc = (selected > 0).then(|| choices[selected].as_str());

        if let Some(reply) = relay
            .submit_panel(&settings, &config.user_name, &query, npc)
            .await
        {
            println!("\n{}\n{}\n", "Output".dimmed(), reply);
        }
    }

    Ok(())
}

fn cmd_npc(host: &Host, action: NpcAction) -> Result<()> {
    let config = Config::load()?;
    let journal = host.journal(&config)?;

    match action {
        NpcAction::List => {
            let names = journal.names_in(MEMORY_FOLDER);

            if names.is_empty() {
                println!("No NPC memories found in '{}'.", MEMORY_FOLDER);
                println!("\n{}", "Create the tutorial NPC with:".dimmed());
                println!("  loremind bootstrap");
                return Ok(());
            }

            println!("{}", "NPCs:".bold());
            for name in names {
                println!("  {}", name.cyan());
            }
        }

        NpcAction::Show { name } => match resolve(Some(name.as_str()), journal.as_ref()) {
            MemoryLookup::Found(text) => {
                println!("{} {}", "Memory of".dimmed(), name.cyan().bold());
                println!("{}", text);
            }
            MemoryLookup::NotFound | MemoryLookup::NoPersona => {
                bail!("No memory journal named '{}' in '{}'", name, MEMORY_FOLDER);
            }
        },
    }

    Ok(())
}

fn cmd_bootstrap(host: &Host) -> Result<()> {
    let config = Config::load()?;
    let journal = host.journal(&config)?;

    if !seed_helper(journal.as_ref(), &TerminalNotifier)? {
        println!("{} Helper NPC already exists", "✓".green());
    }

    Ok(())
}

async fn cmd_discord(host: &Host, token: Option<String>, gm_channel: Option<u64>) -> Result<()> {
    let config = Config::load()?;
    let journal = host.journal(&config)?;

    let token = token
        .or_else(|| std::env::var("DISCORD_TOKEN").ok())
        .or_else(|| config.discord.token.clone())
        .context("No Discord token. Pass --token, set DISCORD_TOKEN or add [discord] token to the config.")?;

    let mut discord = DiscordConfig::new(token);
    if let Some(channel) = gm_channel.or(config.discord.gm_channel_id) {
        discord = discord.with_gm_channel_id(channel);
    }

    seed_helper(journal.as_ref(), &TerminalNotifier)?;

    println!("{} Connecting to Discord...", "→".cyan());
    loremind_integration_discord::run(
        discord,
        config.settings(),
        journal,
        host.dispatcher(&config),
    )
    .await?;

    Ok(())
}

fn cmd_config(host: &Host) -> Result<()> {
    let config = Config::load()?;
    let settings = config.settings();
    let journal_path = match &host.journal_override {
        Some(path) => path.clone(),
        None => config.journal_path()?,
    };

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Journal: {:?}", journal_path);
    println!(
        "  API Key: {}",
        if settings.has_api_key() { "Set".green() } else { "Not set".red() }
    );
    println!("  Model: {}", settings.model.label().cyan());
    println!("  Whisper to GM: {}", on_off(settings.whisper_to_gm));
    println!("  GM-only panel: {}", on_off(settings.gm_only_button));
    println!("  Asking as: {}", config.user_name.cyan());
    if let Some(endpoint) = &config.endpoint {
        println!("  Endpoint: {}", endpoint);
    }

    Ok(())
}

fn on_off(enabled: bool) -> colored::ColoredString {
    if enabled {
        "on".green()
    } else {
        "off".red()
    }
}
