//! Google Cloud Translation provider adapter

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::RelayConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::logger::{Logger, TracingLogger};
use crate::core::models::{
    GoogleTranslateRequest, GoogleTranslateResponse, ProviderTag, TranslateOutcome,
    TranslationResult,
};
use crate::core::provider::{ProviderRequest, TranslationProvider};

/// Adapter for Google Cloud Translation API v2.
///
/// Each call sends exactly one request. Failures are never retried; they come
/// back as a [`TranslateOutcome`] whose result carries the status and message.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
    default_lang: String,
    timeout: Duration,
    logger: Arc<dyn Logger>,
}

impl GoogleTranslator {
    /// Create an adapter that logs through `tracing`
    pub fn new(config: &RelayConfig) -> Result<Self> {
        Self::with_logger(config, Arc::new(TracingLogger))
    }

    /// Create an adapter with an injected logger
    pub fn with_logger(config: &RelayConfig, logger: Arc<dyn Logger>) -> Result<Self> {
        config.validate()?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = base_client(timeout).no_proxy().build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            default_lang: config.default_lang.clone(),
            timeout,
            logger,
        })
    }

    /// Translate `texts` and return the first translation.
    ///
    /// Empty `source_lang` / `target_lang` fall back to the configured default
    /// language. An empty `proxy_url` means a direct connection.
    pub async fn translate_texts(
        &self,
        source_lang: &str,
        target_lang: &str,
        texts: &[String],
        api_key: &str,
        proxy_url: &str,
    ) -> TranslateOutcome {
        if texts.is_empty() {
            return reported(StatusCode::BAD_REQUEST, "No text to translate");
        }

        if api_key.is_empty() {
            return reported(StatusCode::BAD_REQUEST, "API key is required");
        }

        let source_lang = self.or_default(source_lang);
        let target_lang = self.or_default(target_lang);

        let payload = GoogleTranslateRequest::text(texts, source_lang, target_lang);
        let body = match serde_json::to_vec(&payload) {
            Ok(body) => body,
            Err(e) => {
                self.logger.error(&format!("Failed to marshal request: {}", e));
                return failed(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to marshal request",
                    e.into(),
                );
            }
        };

        let request = match self.build_request(api_key, body) {
            Ok(request) => request,
            Err(e) => {
                self.logger.error(&format!("Failed to create request: {}", e));
                return failed(StatusCode::SERVICE_UNAVAILABLE, "Failed to create request", e);
            }
        };

        let client = if proxy_url.is_empty() {
            self.logger.info("No proxy specified, using direct connection");
            self.client.clone()
        } else {
            match self.proxied_client(proxy_url) {
                Ok(client) => client,
                Err(e @ TranslationError::InvalidProxy { .. }) => {
                    self.logger.error(&format!("Failed to parse proxy URL: {}", e));
                    return failed(StatusCode::SERVICE_UNAVAILABLE, e.to_string(), e);
                }
                Err(e) => {
                    self.logger.error(&format!("Failed to create proxied client: {}", e));
                    return failed(StatusCode::SERVICE_UNAVAILABLE, "Failed to create request", e);
                }
            }
        };

        let response = match client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                let e = e.without_url();
                self.logger.error(&format!("Request error: {}", e));
                return failed(
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!("Translation request failed: {}", e),
                    e.into(),
                );
            }
        };

        // `bytes()` takes the response by value, so the connection goes back to
        // the pool (or is closed) before any of the exits below.
        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                let e = e.without_url();
                self.logger.error(&format!("Failed to read response body: {}", e));
                return failed(
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!("Failed to read response: {}", e),
                    e.into(),
                );
            }
        };

        if status != StatusCode::OK {
            self.logger.warn(&format!("API returned non-200 status code: {}", status.as_u16()));
            return TranslateOutcome::Reported(TranslationResult::failure_code(
                status.as_u16(),
                format!("API error: {}", String::from_utf8_lossy(&body)),
            ));
        }

        let parsed: GoogleTranslateResponse = match serde_json::from_slice(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.logger.error(&format!("Failed to parse response: {}", e));
                return failed(
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!("Failed to parse response: {}", e),
                    TranslationError::InvalidResponseError {
                        message: e.to_string(),
                    },
                );
            }
        };

        match parsed.first_text() {
            Some(text) => TranslateOutcome::Reported(TranslationResult::success(
                text,
                source_lang,
                target_lang,
                ProviderTag::GoogleCloud,
            )),
            None => {
                self.logger.warn("API returned empty translations array");
                reported(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Translation failed, API returns an empty result",
                )
            }
        }
    }

    fn or_default<'a>(&'a self, lang: &'a str) -> &'a str {
        if lang.is_empty() {
            &self.default_lang
        } else {
            lang
        }
    }

    /// Build the POST request with the key as a query parameter
    fn build_request(&self, api_key: &str, body: Vec<u8>) -> Result<reqwest::Request> {
        let url = Url::parse_with_params(&self.endpoint, &[("key", api_key)]).map_err(|e| {
            TranslationError::RequestBuild {
                message: format!("{}: {}", self.endpoint, e),
            }
        })?;

        let mut request = reqwest::Request::new(Method::POST, url);
        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(body.into());

        Ok(request)
    }

    /// Client whose transport goes through `proxy_url`
    fn proxied_client(&self, proxy_url: &str) -> Result<reqwest::Client> {
        let proxy_url = parse_proxy_url(proxy_url)?;
        self.logger.info(&format!("Using proxy: {}", redact(&proxy_url)));

        let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| TranslationError::InvalidProxy {
            message: e.to_string(),
        })?;

        base_client(self.timeout)
            .proxy(proxy)
            .build()
            .map_err(|e| TranslationError::RequestBuild {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslator {
    fn tag(&self) -> ProviderTag {
        ProviderTag::GoogleCloud
    }

    async fn translate(&self, request: &ProviderRequest) -> TranslateOutcome {
        self.translate_texts(
            &request.source_lang,
            &request.target_lang,
            &request.texts,
            &request.credential,
            &request.proxy_url,
        )
        .await
    }
}

/// Parse a proxy address, rejecting ASCII control characters outright
pub fn parse_proxy_url(raw: &str) -> Result<Url> {
    if let Some(c) = raw.chars().find(|c| c.is_ascii_control()) {
        return Err(TranslationError::InvalidProxy {
            message: format!("invalid control character {:?} in URL", c),
        });
    }

    Url::parse(raw).map_err(|e| TranslationError::InvalidProxy {
        message: e.to_string(),
    })
}

fn base_client(timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .pool_max_idle_per_host(10)
}

/// Proxy URL for logs, password masked
fn redact(url: &Url) -> String {
    let mut shown = url.clone();
    if shown.password().is_some() && shown.set_password(Some("***")).is_err() {
        // Userinfo cannot be rewritten in place; show scheme and host only
        return format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    }
    shown.to_string()
}

fn reported(status: StatusCode, message: &str) -> TranslateOutcome {
    TranslateOutcome::Reported(TranslationResult::failure(status, message))
}

fn failed(status: StatusCode, message: impl Into<String>, error: TranslationError) -> TranslateOutcome {
    TranslateOutcome::Failed {
        result: TranslationResult::failure(status, message),
        error,
    }
}
