//! Relay endpoint tests against a mocked upstream

use assert_json_diff::{assert_json_eq, assert_json_include};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use translate_relay::server::api::{router, AppState};
use translate_relay::{
    GoogleTranslator, MemoryLogger, ProviderRequest, ProviderTag, RelayConfig, TranslateOutcome,
    TranslationError, TranslationProvider, TranslationResult,
};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_relay(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(Arc::new(state))).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn google_relay(upstream: &MockServer, api_key: &str) -> String {
    let config = RelayConfig {
        endpoint: format!("{}/language/translate/v2", upstream.uri()),
        ..Default::default()
    };
    let translator = GoogleTranslator::with_logger(&config, Arc::new(MemoryLogger::new())).unwrap();
    spawn_relay(AppState::new(Arc::new(translator), api_key, "")).await
}

#[tokio::test]
async fn test_health_check() {
    let upstream = MockServer::start().await;
    let relay = google_relay(&upstream, "key").await;

    let body: serde_json::Value = reqwest::get(format!("{}/", relay))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_json_include!(actual: body, expected: json!({"status": "ok", "service": "translate-relay"}));
}

#[tokio::test]
async fn test_translate_through_relay() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(query_param("key", "relay-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"translations": [{"translatedText": "Hola"}]}})),
        )
        .mount(&upstream)
        .await;

    let relay = google_relay(&upstream, "relay-key").await;
    let response = reqwest::Client::new()
        .post(format!("{}/translate", relay))
        .json(&json!({"text": "Hello", "source_lang": "en", "target_lang": "es"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_json_eq!(
        body,
        json!({
            "code": 200,
            "message": "Success",
            "data": "Hola",
            "source_lang": "en",
            "target_lang": "es",
            "method": "GoogleCloud"
        })
    );
}

#[tokio::test]
async fn test_relay_mirrors_upstream_status() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string(r#"{"error":"quota exceeded"}"#))
        .mount(&upstream)
        .await;

    let relay = google_relay(&upstream, "key").await;
    let response = reqwest::Client::new()
        .post(format!("{}/translate", relay))
        .json(&json!({"text": ["Hello"], "target_lang": "es"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 403);
    let result: TranslationResult = response.json().await.unwrap();
    assert!(result.message.contains("quota exceeded"));
}

#[tokio::test]
async fn test_relay_rejects_empty_text_without_calling_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let relay = google_relay(&upstream, "key").await;
    let response = reqwest::Client::new()
        .post(format!("{}/translate", relay))
        .json(&json!({"text": ""}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_json_eq!(body, json!({"code": 400, "message": "No text to translate"}));
}

#[tokio::test]
async fn test_relay_malformed_body_gets_result_shape() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let relay = google_relay(&upstream, "key").await;
    let client = reqwest::Client::new();

    for body in [r#"{"text": "#, r#"{"target_lang": "es"}"#] {
        let response = client
            .post(format!("{}/translate", relay))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);
        let result: TranslationResult = response.json().await.unwrap();
        assert_eq!(result.code, 400);
        assert!(result.message.starts_with("Invalid request body:"));
        assert_eq!(result.translated_text, None);
    }

    let response = client
        .post(format!("{}/translate", relay))
        .body(r#"{"text": "Hello"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let result: TranslationResult = response.json().await.unwrap();
    assert_eq!(result.code, 400);
}

/// Provider that always fails locally
struct BrokenProvider;

#[async_trait]
impl TranslationProvider for BrokenProvider {
    fn tag(&self) -> ProviderTag {
        ProviderTag::GoogleCloud
    }

    async fn translate(&self, request: &ProviderRequest) -> TranslateOutcome {
        TranslateOutcome::Failed {
            result: TranslationResult::failure_code(503, format!("down for {}", request.credential)),
            error: TranslationError::RequestBuild {
                message: "relative URL without a base".to_string(),
            },
        }
    }
}

#[tokio::test]
async fn test_relay_accepts_any_provider() {
    let relay = spawn_relay(AppState::new(Arc::new(BrokenProvider), "secret", "")).await;
    let response = reqwest::Client::new()
        .post(format!("{}/translate", relay))
        .json(&json!({"text": "Hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 503);
    let result: TranslationResult = response.json().await.unwrap();
    assert_eq!(result.message, "down for secret");
    assert_eq!(result.provider, None);
}
