//! Translate Relay - translation relay library
//!
//! This library provides a Google Cloud Translation provider adapter that
//! normalizes upstream answers into the relay's shared result shape, plus a
//! small HTTP relay endpoint built on top of it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::GoogleTranslator,
    config::RelayConfig,
    errors::TranslationError,
    logger::{Logger, MemoryLogger, TracingLogger},
    models::{ProviderTag, TranslateOutcome, TranslationResult},
    provider::{ProviderRequest, TranslationProvider},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
