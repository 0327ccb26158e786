//! HTTP relay endpoint implementation

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::GoogleTranslator;
use crate::core::config::RelayConfig;
use crate::core::models::TranslationResult;
use crate::core::provider::{ProviderRequest, TranslationProvider};

/// Application state
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn TranslationProvider>,
    api_key: String,
    proxy_url: String,
}

impl AppState {
    /// State that sends every request to `provider` with the given credential
    pub fn new(
        provider: Arc<dyn TranslationProvider>,
        api_key: impl Into<String>,
        proxy_url: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            proxy_url: proxy_url.into(),
        }
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// A single text or a batch of texts
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    /// One text
    One(String),
    /// Several texts, only the first translation is returned
    Many(Vec<String>),
}

impl TextInput {
    fn into_texts(self) -> Vec<String> {
        match self {
            TextInput::One(text) if text.is_empty() => Vec::new(),
            TextInput::One(text) => vec![text],
            TextInput::Many(texts) => texts,
        }
    }
}

/// Relay translation request
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: TextInput,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<TranslateRequest>, JsonRejection>,
) -> (StatusCode, Json<TranslationResult>) {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected relay request: {}", rejection.body_text());
            let result = TranslationResult::failure_code(
                StatusCode::BAD_REQUEST.as_u16(),
                format!("Invalid request body: {}", rejection.body_text()),
            );
            return (StatusCode::BAD_REQUEST, Json(result));
        }
    };

    let request = ProviderRequest::new(payload.text.into_texts(), state.api_key.clone())
        .with_source_lang(payload.source_lang.unwrap_or_default())
        .with_target_lang(payload.target_lang.unwrap_or_default())
        .with_proxy(state.proxy_url.clone());

    let outcome = state.provider.translate(&request).await;
    if let Some(e) = outcome.error() {
        warn!("Translation via {} failed: {}", state.provider.tag(), e);
    }

    let (result, _) = outcome.into_parts();
    let status = StatusCode::from_u16(result.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, Json(result))
}

/// Build the relay router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/translate", post(translate))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(config: RelayConfig) -> anyhow::Result<()> {
    let provider = Arc::new(GoogleTranslator::new(&config)?);

    if config.api_key.is_empty() {
        warn!("No API key configured, every translation will be rejected");
    }

    let state = Arc::new(AppState::new(provider, config.api_key.clone(), config.proxy_url.clone()));
    let app = router(state);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
