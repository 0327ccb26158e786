//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::GoogleTranslator;
use crate::core::config::RelayConfig;

/// Commands for Translate Relay
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate texts once and print the normalized result
    Translate {
        /// Text to translate (repeat for a batch)
        #[arg(short = 'x', long = "text", required = true)]
        texts: Vec<String>,

        /// Source language (default: configured default_lang)
        #[arg(short, long, default_value = "")]
        source_lang: String,

        /// Target language (default: configured default_lang)
        #[arg(short, long, default_value = "")]
        target_lang: String,

        /// Proxy address, overrides the configured proxy_url
        #[arg(long)]
        proxy: Option<String>,
    },

    /// Start HTTP relay server
    Server {
        /// Bind address, overrides the configured host
        #[arg(long)]
        host: Option<String>,

        /// Listen port, overrides the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Handle one-shot translation command
pub async fn handle_translate(
    config: RelayConfig,
    texts: Vec<String>,
    source_lang: String,
    target_lang: String,
    proxy: Option<String>,
) -> anyhow::Result<()> {
    let proxy_url = proxy.unwrap_or_else(|| config.proxy_url.clone());

    info!("Translating {} text(s)", texts.len());

    let translator = GoogleTranslator::new(&config)?;
    let outcome = translator
        .translate_texts(&source_lang, &target_lang, &texts, &config.api_key, &proxy_url)
        .await;

    let (result, error) = outcome.into_parts();
    println!("{}", serde_json::to_string_pretty(&result)?);

    if let Some(e) = error {
        anyhow::bail!(e);
    }

    Ok(())
}

/// Handle server command
pub async fn handle_server(
    mut config: RelayConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!("Starting HTTP server on {}:{}", config.host, config.port);
    println!("🚀 Server starting on http://{}:{}", config.host, config.port);

    run_server(config).await?;

    Ok(())
}
