//! Main entry point for Translate Relay CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translate_relay::cli::commands::{self, Commands};
use translate_relay::RelayConfig;

/// Translate Relay - Google Cloud Translation relay
#[derive(Parser, Debug)]
#[command(name = "translate-relay", version, about, long_about = None)]
struct Args {
    /// API key for Google Cloud Translation (defaults to TRANSLATE_RELAY_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Configuration file (toml, json or yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("translate_relay={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = RelayConfig::load(args.config.as_deref())?;

    // Override config with CLI args if provided
    if let Some(api_key) = args.api_key {
        config.api_key = api_key;
    }

    match args.command {
        Some(Commands::Translate {
            texts,
            source_lang,
            target_lang,
            proxy,
        }) => {
            commands::handle_translate(config, texts, source_lang, target_lang, proxy).await?;
        }
        Some(Commands::Server { host, port }) => {
            commands::handle_server(config, host, port).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
