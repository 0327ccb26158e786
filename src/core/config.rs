//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::core::errors::{Result, TranslationError};

/// Google Cloud Translation API v2 endpoint
pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Language used when the caller leaves source or target empty
pub const DEFAULT_LANG: &str = "en";

/// Prefix for environment overrides, e.g. `TRANSLATE_RELAY_API_KEY`
pub const ENV_PREFIX: &str = "TRANSLATE_RELAY";

/// Configuration for the relay and its provider adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    pub api_key: String,
    pub endpoint: String,
    pub proxy_url: String,
    pub default_lang: String,
    pub timeout_ms: u64,
    pub host: String,
    pub port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            proxy_url: String::new(),
            default_lang: DEFAULT_LANG.to_string(),
            timeout_ms: 30000,
            host: "0.0.0.0".to_string(),
            port: 1188,
        }
    }
}

impl RelayConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// Later sources win: a `TRANSLATE_RELAY_TIMEOUT_MS` variable overrides
    /// `timeout_ms` from the file, which overrides the built-in default.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = ::config::Config::builder()
            .set_default("api_key", defaults.api_key)?
            .set_default("endpoint", defaults.endpoint)?
            .set_default("proxy_url", defaults.proxy_url)?
            .set_default("default_lang", defaults.default_lang)?
            .set_default("timeout_ms", defaults.timeout_ms as i64)?
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port as i64)?;

        if let Some(path) = file {
            info!("Loading configuration from {}", path.display());
            builder = builder.add_source(::config::File::from(path));
        }

        let config: Self = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "endpoint is required".to_string(),
            });
        }

        if self.default_lang.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "default_lang is required".to_string(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
