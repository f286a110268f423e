//! Herald binary - watches the document store and provisions Discord
//! resources in response.

use clap::Parser;
use herald::{
    ConfigError, ConfigErrorKind, DiscordChat, FileResumeStore, FixedCutoff, HeraldConfig,
    MemoryStore, Reactor, ResumeStore,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(about = "Herald - newsroom to Discord automation bridge")]
#[command(version)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "herald.toml")]
    config: PathBuf,

    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN")]
    discord_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Best-effort .env for local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!(config_file = ?args.config, "Starting Herald");

    let config = if args.config.exists() {
        HeraldConfig::from_file(&args.config)?
    } else {
        warn!(config_file = ?args.config, "config file not found, using defaults");
        HeraldConfig::default()
    };

    let token = args
        .discord_token
        .or(config.discord.token.clone())
        .ok_or_else(|| {
            ConfigError::new(ConfigErrorKind::MissingValue(
                "discord token: set DISCORD_TOKEN or [discord].token".into(),
            ))
        })?;
    let chat = Arc::new(DiscordChat::new(&token)?);

    // Demo backend; production replaces this with the real store client.
    let store = Arc::new(MemoryStore::new());

    let resume: Arc<dyn ResumeStore> = match &config.store.resume_path {
        Some(path) => {
            info!(path = %path.display(), "persisting resume positions");
            Arc::new(FileResumeStore::open(path)?)
        }
        None => Arc::new(FixedCutoff(*config.reactions.cutoff())),
    };

    let reactor = Reactor::new(store, chat, resume, config.reactions.clone());
    let mut handle = reactor.spawn().await?;

    info!("Herald running, press Ctrl+C to stop");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            failure = handle.failures().recv() => {
                match failure {
                    Some(f) => error!(
                        feed = %f.feed,
                        document_id = %f.document_id,
                        error = %f.error,
                        "reaction failed"
                    ),
                    None => break,
                }
            }
        }
    }

    info!("Shutting down");
    handle.shutdown().await;
    Ok(())
}
