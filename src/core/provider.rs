//! Provider capability shared by translation adapters

use async_trait::async_trait;

use crate::core::models::{ProviderTag, TranslateOutcome};

/// Everything a provider needs for one call
#[derive(Debug, Clone, Default)]
pub struct ProviderRequest {
    pub source_lang: String,
    pub target_lang: String,
    pub texts: Vec<String>,
    pub credential: String,
    /// Empty for a direct connection
    pub proxy_url: String,
}

impl ProviderRequest {
    pub fn new(texts: Vec<String>, credential: impl Into<String>) -> Self {
        Self {
            texts,
            credential: credential.into(),
            ..Default::default()
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }

    pub fn with_target_lang(mut self, target_lang: impl Into<String>) -> Self {
        self.target_lang = target_lang.into();
        self
    }

    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = proxy_url.into();
        self
    }
}

/// A translation backend the relay can call
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Tag stamped on successful results
    fn tag(&self) -> ProviderTag;

    /// Translate once, without retries
    async fn translate(&self, request: &ProviderRequest) -> TranslateOutcome;
}
